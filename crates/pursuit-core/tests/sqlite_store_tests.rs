mod common;

use std::sync::Arc;

use common::{company_form, create_sqlite_tracker, TODAY};
use jiff::civil::date;
use pursuit_core::{
    credentials::Credentials,
    error::RemoteError,
    models::{Rating, StageStatus},
    remote::{Order, RemoteStore, Row, RowFilter, SqliteStore, Table},
    tracker::FixedClock,
    CompanyForm, StageForm, TrackerBuilder,
};
use serde_json::json;
use tempfile::TempDir;

fn row(value: serde_json::Value) -> Row {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_store_round_trips_rows() {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::open(temp_dir.path().join("store.db")).unwrap();

    let id = store
        .insert(
            Table::Companies,
            row(json!({
                "user_id": "local",
                "name": "Acme",
                "tags": ["a", "__password:x"],
                "job_benefits": null,
                "current_stage": 2
            })),
        )
        .await
        .unwrap()
        .unwrap();

    let rows = store
        .select(Table::Companies, RowFilter::id(&id), None)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], json!(id));
    assert_eq!(rows[0]["tags"], json!(["a", "__password:x"]));
    assert_eq!(rows[0]["job_benefits"], json!(null));
    assert_eq!(rows[0]["current_stage"], json!(2));
    assert_eq!(rows[0]["size"], json!(null));
}

#[tokio::test]
async fn test_store_orders_and_filters_children() {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::open(temp_dir.path().join("store.db")).unwrap();

    for (company_id, name) in [("1", "Entry"), ("2", "Entry"), ("1", "Interview")] {
        store
            .insert(
                Table::Stages,
                row(json!({"company_id": company_id, "name": name})),
            )
            .await
            .unwrap();
    }

    let rows = store
        .select(
            Table::Stages,
            RowFilter::within("company_id", ["1"]),
            Some(Order::desc("id")),
        )
        .await
        .unwrap();
    let names: Vec<&str> = rows.iter().filter_map(|r| r["name"].as_str()).collect();
    assert_eq!(names, vec!["Interview", "Entry"]);
    assert!(rows.iter().all(|r| r["company_id"] == json!("1")));

    store
        .delete(Table::Stages, RowFilter::eq("company_id", "1"))
        .await
        .unwrap();
    let left = store.select(Table::Stages, RowFilter::All, None).await.unwrap();
    assert_eq!(left.len(), 1);
}

#[tokio::test]
async fn test_store_update_missing_row_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::open(temp_dir.path().join("store.db")).unwrap();

    let err = store
        .update(Table::Stages, row(json!({"name": "x"})), "99")
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Rejected { .. }));
}

#[tokio::test]
async fn test_store_rejects_unknown_columns() {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::open(temp_dir.path().join("store.db")).unwrap();

    let result = store
        .insert(Table::Contacts, row(json!({"company_id": "1", "salary": "1M"})))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_tracker_persists_across_sessions() {
    let (temp_dir, mut tracker) = create_sqlite_tracker().await;
    assert_eq!(tracker.load_all().await.unwrap(), 0);

    let form = CompanyForm {
        industry: "Robotics".to_string(),
        overall_rating: Some(Rating::new(4).unwrap()),
        tags_text: "hardware".to_string(),
        job_benefits: Some(vec!["Stock options".to_string()]),
        credentials: Credentials {
            site_url: Some("https://careers.acme.example".to_string()),
            ..Default::default()
        },
        ..company_form("Acme", "Firmware Engineer")
    };
    let added = tracker.add_company(&form).await.unwrap();
    assert!(added.is_synced());
    let id = added.value.id.clone();
    let stage = tracker.add_stage(&id, "Technical interview").await.unwrap().value;

    let stage_form = StageForm {
        status: StageStatus::Scheduled,
        date: Some(date(2024, 6, 3)),
        time: Some("14:00".to_string()),
        location: Some("https://meet.example.com/x".to_string()),
        preparation: vec!["Review RTOS basics".to_string()],
        ..StageForm::from(&stage)
    };
    assert!(tracker
        .update_stage(&id, &stage.id, &stage_form)
        .await
        .unwrap()
        .is_synced());

    // A second session over the same file sees everything
    let mut reopened = TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_clock(Arc::new(FixedClock(TODAY)))
        .build()
        .await
        .unwrap();
    assert_eq!(reopened.load_all().await.unwrap(), 1);

    let company = reopened.company(&id).unwrap();
    assert_eq!(company.industry, "Robotics");
    assert_eq!(company.overall_rating, Rating::new(4).ok());
    assert_eq!(company.visible_tags(), vec!["hardware"]);
    assert_eq!(
        company.credentials().site_url.as_deref(),
        Some("https://careers.acme.example")
    );
    assert_eq!(
        company.job_details.benefits,
        Some(vec!["Stock options".to_string()])
    );
    assert_eq!(company.job_details.requirements, None);

    assert_eq!(company.stages.len(), 2);
    assert_eq!(company.stages[0].name, "Entry");
    assert_eq!(company.stages[0].completed_at, Some(TODAY));
    let interview = &company.stages[1];
    assert_eq!(interview.status, StageStatus::Scheduled);
    assert_eq!(interview.time.as_deref(), Some("14:00"));
    assert_eq!(interview.preparation, vec!["Review RTOS basics"]);
}

#[tokio::test]
async fn test_tracker_scopes_by_user() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("shared.db");
    let build = |user: &str| {
        TrackerBuilder::new()
            .with_database_path(Some(db_path.clone()))
            .with_user(user)
            .build()
    };

    let mut alice = build("alice").await.unwrap();
    alice
        .add_company(&company_form("Acme", "Engineer"))
        .await
        .unwrap();

    let mut bob = build("bob").await.unwrap();
    assert_eq!(bob.load_all().await.unwrap(), 0);
    assert_eq!(alice.load_all().await.unwrap(), 1);
}

#[tokio::test]
async fn test_tracker_delete_cascades_on_disk() {
    let (temp_dir, mut tracker) = create_sqlite_tracker().await;
    let id = tracker
        .add_company(&company_form("Acme", "Engineer"))
        .await
        .unwrap()
        .value
        .id;
    tracker.add_stage(&id, "Interview").await.unwrap();

    let deleted = tracker.delete_company(&id).await.unwrap();
    assert!(deleted.is_synced());

    let store = SqliteStore::open(temp_dir.path().join("test.db")).unwrap();
    assert!(store
        .select(Table::Stages, RowFilter::All, None)
        .await
        .unwrap()
        .is_empty());
    assert!(store
        .select(Table::Companies, RowFilter::All, None)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_builder_rejects_blank_user() {
    let temp_dir = TempDir::new().unwrap();
    let result = TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("x.db")))
        .with_user("  ")
        .build()
        .await;
    assert!(result.is_err());
}
