#![allow(dead_code)]

use std::{
    cmp::Ordering,
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use jiff::civil::{date, Date};
use pursuit_core::{
    error::{RemoteError, RemoteResult},
    remote::{rows::value_text, Order, RemoteStore, Row, RowFilter, Table},
    tracker::FixedClock,
    CompanyForm, Tracker, TrackerBuilder,
};
use serde_json::{json, Value};
use tempfile::TempDir;

pub const TODAY: Date = date(2024, 6, 1);

/// The four adapter calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Select,
    Insert,
    Update,
    Delete,
}

#[derive(Default)]
struct State {
    tables: HashMap<Table, Vec<Row>>,
    next_id: u64,
    calls: Vec<(Call, Table)>,
    failing: Vec<(Call, Table)>,
    offline: bool,
    omit_ids: bool,
}

/// In-memory `RemoteStore` that records every call and fails on request.
#[derive(Default)]
pub struct FakeStore {
    state: Mutex<State>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every `call` against `table` fail.
    pub fn fail(&self, call: Call, table: Table) {
        self.state.lock().unwrap().failing.push((call, table));
    }

    /// Make every call fail.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// Succeed inserts without reporting the new id.
    pub fn omit_ids(&self) {
        self.state.lock().unwrap().omit_ids = true;
    }

    pub fn calls(&self) -> Vec<(Call, Table)> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, call: Call, table: Table) -> usize {
        self.calls().iter().filter(|c| **c == (call, table)).count()
    }

    pub fn rows(&self, table: Table) -> Vec<Row> {
        self.state
            .lock()
            .unwrap()
            .tables
            .get(&table)
            .cloned()
            .unwrap_or_default()
    }

    /// Store `row` directly, bypassing the call log. Returns its id.
    pub fn seed(&self, table: Table, row: Value) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let mut row = row.as_object().cloned().expect("seed rows are objects");
        row.insert("id".into(), json!(id));
        state.tables.entry(table).or_default().push(row);
        id.to_string()
    }

    fn begin(&self, call: Call, table: Table) -> RemoteResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push((call, table));
        if state.offline || state.failing.contains(&(call, table)) {
            return Err(RemoteError::Unavailable(format!("{call:?} {table} failed")));
        }
        Ok(state)
    }
}

fn compare_cells(a: &Row, b: &Row, column: &str) -> Ordering {
    let text = |row: &Row| row.get(column).and_then(value_text);
    let (a, b) = (text(a), text(b));
    match (
        a.as_deref().and_then(|s| s.parse::<i64>().ok()),
        b.as_deref().and_then(|s| s.parse::<i64>().ok()),
    ) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.cmp(&b),
    }
}

#[async_trait]
impl RemoteStore for FakeStore {
    async fn select(
        &self,
        table: Table,
        filter: RowFilter,
        order: Option<Order>,
    ) -> RemoteResult<Vec<Row>> {
        let state = self.begin(Call::Select, table)?;
        let mut rows: Vec<Row> = state
            .tables
            .get(&table)
            .map(|rows| rows.iter().filter(|r| filter.matches(r)).cloned().collect())
            .unwrap_or_default();
        if let Some(order) = order {
            rows.sort_by(|a, b| {
                let ordering = compare_cells(a, b, order.column);
                if order.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }
        Ok(rows)
    }

    async fn insert(&self, table: Table, mut row: Row) -> RemoteResult<Option<String>> {
        let mut state = self.begin(Call::Insert, table)?;
        state.next_id += 1;
        let id = state.next_id;
        row.insert("id".into(), json!(id));
        state.tables.entry(table).or_default().push(row);
        Ok((!state.omit_ids).then(|| id.to_string()))
    }

    async fn update(&self, table: Table, patch: Row, id: &str) -> RemoteResult<()> {
        let mut state = self.begin(Call::Update, table)?;
        let filter = RowFilter::id(id);
        let row = state
            .tables
            .entry(table)
            .or_default()
            .iter_mut()
            .find(|r| filter.matches(r))
            .ok_or_else(|| RemoteError::Rejected {
                table: table.to_string(),
                message: format!("no row with id {id}"),
            })?;
        for (column, value) in patch {
            row.insert(column, value);
        }
        Ok(())
    }

    async fn delete(&self, table: Table, filter: RowFilter) -> RemoteResult<()> {
        let mut state = self.begin(Call::Delete, table)?;
        state
            .tables
            .entry(table)
            .or_default()
            .retain(|r| !filter.matches(r));
        Ok(())
    }
}

/// Tracker over `store`, pinned to [`TODAY`].
pub async fn create_test_tracker(store: Arc<FakeStore>) -> Tracker {
    TrackerBuilder::new()
        .with_remote(store)
        .with_clock(Arc::new(FixedClock(TODAY)))
        .build()
        .await
        .expect("Failed to create tracker")
}

/// Tracker over a SQLite file in a fresh temp dir.
pub async fn create_sqlite_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(Arc::new(FixedClock(TODAY)))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

pub fn company_form(name: &str, job_title: &str) -> CompanyForm {
    CompanyForm {
        name: name.to_string(),
        job_title: job_title.to_string(),
        ..Default::default()
    }
}
