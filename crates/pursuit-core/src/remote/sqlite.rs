//! SQLite-backed remote store.
//!
//! Stands in for the hosted relational store: same four calls, same three
//! tables. Each call opens its own connection on the blocking pool so the
//! async tracker never blocks on disk I/O.

use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::{
    params_from_iter,
    types::{Value as SqlValue, ValueRef},
    Connection,
};
use serde_json::{Number, Value};
use tokio::task;

use super::{Order, RemoteError, RemoteResult, RemoteStore, Row, RowFilter, Table};
use crate::error::{DatabaseResultExt, Result, TrackerError};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

/// A [`RemoteStore`] persisting to a SQLite database file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the parent directory cannot be
    /// created, `TrackerError::Database` if the schema cannot be applied.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        Self::connect(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(path: &Path) -> Result<Connection> {
        let connection =
            Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;
        Ok(connection)
    }

    async fn run<T, F>(&self, f: F) -> RemoteResult<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();
        task::spawn_blocking(move || {
            let connection = Self::connect(&path)?;
            f(&connection)
        })
        .await
        .map_err(|e| RemoteError::Unavailable(format!("Task join error: {e}")))?
        .map_err(RemoteError::from)
    }
}

#[async_trait::async_trait]
impl RemoteStore for SqliteStore {
    async fn select(
        &self,
        table: Table,
        filter: RowFilter,
        order: Option<Order>,
    ) -> RemoteResult<Vec<Row>> {
        debug!("select from {table} where {filter:?}");
        self.run(move |conn| select_rows(conn, table, &filter, order))
            .await
    }

    async fn insert(&self, table: Table, row: Row) -> RemoteResult<Option<String>> {
        debug!("insert into {table}");
        self.run(move |conn| insert_row(conn, table, &row))
            .await
            .map(Some)
    }

    async fn update(&self, table: Table, patch: Row, id: &str) -> RemoteResult<()> {
        debug!("update {table} id {id}");
        let row_id = id.to_string();
        let changed = self
            .run(move |conn| update_row(conn, table, &patch, &row_id))
            .await?;
        if changed == 0 {
            return Err(RemoteError::Rejected {
                table: table.to_string(),
                message: format!("no row with id {id}"),
            });
        }
        Ok(())
    }

    async fn delete(&self, table: Table, filter: RowFilter) -> RemoteResult<()> {
        debug!("delete from {table} where {filter:?}");
        self.run(move |conn| delete_rows(conn, table, &filter))
            .await
            .map(|_| ())
    }
}

fn select_rows(
    conn: &Connection,
    table: Table,
    filter: &RowFilter,
    order: Option<Order>,
) -> Result<Vec<Row>> {
    let mut params = Vec::new();
    let mut sql = format!(
        "SELECT * FROM {table} WHERE {}",
        where_clause(table, filter, &mut params)?
    );
    match order {
        Some(order) => {
            check_column(table, order.column)?;
            let direction = if order.ascending { "ASC" } else { "DESC" };
            sql.push_str(&format!(" ORDER BY {} {direction}, id ASC", order.column));
        }
        None => sql.push_str(" ORDER BY id ASC"),
    }

    let mut stmt = conn.prepare(&sql).db_context("Failed to prepare select")?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let rows = stmt
        .query_map(params_from_iter(params.iter()), |r| {
            let mut row = Row::new();
            for (i, name) in columns.iter().enumerate() {
                row.insert(name.clone(), from_sql(table, name, r.get_ref(i)?));
            }
            Ok(row)
        })
        .db_context("Failed to query rows")?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read rows")
}

fn insert_row(conn: &Connection, table: Table, row: &Row) -> Result<String> {
    let mut columns = Vec::new();
    let mut values = Vec::new();
    for (column, value) in row {
        if column == "id" {
            continue;
        }
        check_column(table, column)?;
        columns.push(column.as_str());
        values.push(to_sql(value));
    }
    if columns.is_empty() {
        return Err(TrackerError::invalid_input("row").with_reason("no columns to insert"));
    }

    let placeholders = (1..=columns.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        columns.join(", ")
    );
    conn.execute(&sql, params_from_iter(values.iter()))
        .db_context("Failed to insert row")?;
    Ok(conn.last_insert_rowid().to_string())
}

fn update_row(conn: &Connection, table: Table, patch: &Row, id: &str) -> Result<usize> {
    let mut assignments = Vec::new();
    let mut values = Vec::new();
    for (column, value) in patch {
        if column == "id" {
            continue;
        }
        check_column(table, column)?;
        values.push(to_sql(value));
        assignments.push(format!("{column} = ?{}", values.len()));
    }
    if assignments.is_empty() {
        return Err(TrackerError::invalid_input("patch").with_reason("no columns to update"));
    }

    values.push(SqlValue::Text(id.to_string()));
    let sql = format!(
        "UPDATE {table} SET {} WHERE id = ?{}",
        assignments.join(", "),
        values.len()
    );
    conn.execute(&sql, params_from_iter(values.iter()))
        .db_context("Failed to update row")
}

fn delete_rows(conn: &Connection, table: Table, filter: &RowFilter) -> Result<usize> {
    let mut params = Vec::new();
    let sql = format!(
        "DELETE FROM {table} WHERE {}",
        where_clause(table, filter, &mut params)?
    );
    conn.execute(&sql, params_from_iter(params.iter()))
        .db_context("Failed to delete rows")
}

fn where_clause(table: Table, filter: &RowFilter, params: &mut Vec<SqlValue>) -> Result<String> {
    match filter {
        RowFilter::All => Ok("1 = 1".to_string()),
        RowFilter::Eq { column, value } => {
            check_column(table, column)?;
            params.push(to_sql(value));
            Ok(format!("{column} = ?{}", params.len()))
        }
        RowFilter::In { column, values } => {
            check_column(table, column)?;
            if values.is_empty() {
                return Ok("0 = 1".to_string());
            }
            let placeholders = values
                .iter()
                .map(|value| {
                    params.push(to_sql(value));
                    format!("?{}", params.len())
                })
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("{column} IN ({placeholders})"))
        }
    }
}

/// Column names are spliced into SQL, so only whitelisted ones pass.
fn check_column(table: Table, column: &str) -> Result<()> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(TrackerError::invalid_input(column)
            .with_reason(format!("not a column of {table}")))
    }
}

fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(SqlValue::Integer)
            .or_else(|| n.as_f64().map(SqlValue::Real))
            .unwrap_or(SqlValue::Null),
        Value::String(s) => SqlValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => SqlValue::Text(value.to_string()),
    }
}

/// Ids surface as text; array columns are decoded from their JSON text.
fn from_sql(table: Table, column: &str, value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => Value::Null,
        ValueRef::Integer(i) if column == "id" || column == "company_id" => {
            Value::String(i.to_string())
        }
        ValueRef::Integer(i) => Value::Number(i.into()),
        ValueRef::Real(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            if table.array_columns().contains(&column) {
                serde_json::from_str(&text).unwrap_or(Value::String(text))
            } else {
                Value::String(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_where_clause_rejects_unknown_columns() {
        let mut params = Vec::new();
        let filter = RowFilter::eq("name; DROP TABLE companies", "x");
        assert!(where_clause(Table::Companies, &filter, &mut params).is_err());
    }

    #[test]
    fn test_where_clause_numbers_placeholders() {
        let mut params = Vec::new();
        let clause = where_clause(
            Table::Stages,
            &RowFilter::within("company_id", ["1", "2", "3"]),
            &mut params,
        )
        .unwrap();
        assert_eq!(clause, "company_id IN (?1, ?2, ?3)");
        assert_eq!(params.len(), 3);

        let empty = where_clause(
            Table::Stages,
            &RowFilter::within("company_id", Vec::<String>::new()),
            &mut params,
        )
        .unwrap();
        assert_eq!(empty, "0 = 1");
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(to_sql(&json!(["a", "b"])), SqlValue::Text("[\"a\",\"b\"]".into()));
        assert_eq!(to_sql(&json!(3)), SqlValue::Integer(3));
        assert_eq!(to_sql(&json!(null)), SqlValue::Null);

        assert_eq!(
            from_sql(Table::Companies, "tags", ValueRef::Text(b"[\"x\"]")),
            json!(["x"])
        );
        assert_eq!(
            from_sql(Table::Stages, "company_id", ValueRef::Integer(9)),
            json!("9")
        );
        assert_eq!(
            from_sql(Table::Stages, "rating", ValueRef::Integer(4)),
            json!(4)
        );
    }
}
