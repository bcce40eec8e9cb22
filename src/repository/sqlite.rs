// SQLite document store adapter
//
// rusqlite is blocking, so every call hops onto tokio's blocking pool. The
// connection is shared behind a mutex; SQLite serializes writers anyway.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::{new_id, EmployeeRepository, EmployeeStream};
use crate::db;
use crate::entities::Employee;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteEmployeeRepository {
    /// Wrap an already prepared connection (see [`db::setup_database`])
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open the database at `path` (or `:memory:`) and create the schema
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(db::open_database(path)?))
    }

    /// Number of stored documents
    pub async fn count(&self) -> Result<i64> {
        run_blocking(Arc::clone(&self.conn), |conn| db::verify_count(conn)).await
    }
}

/// Run `f` against the locked connection on the blocking pool
async fn run_blocking<T, F>(conn: Arc<Mutex<Connection>>, f: F) -> Result<T>
where
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let conn = conn.lock().map_err(|_| Error::LockPoisoned)?;
        f(&conn)
    })
    .await?
}

// ============================================================================
// Blocking operations
// ============================================================================

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn decode_document(id: String, document: &str) -> Result<Employee> {
    let mut employee: Employee = serde_json::from_str(document)?;
    // The key column is authoritative
    employee.id = id;
    Ok(employee)
}

fn save_employee(conn: &Connection, mut employee: Employee) -> Result<Employee> {
    if !employee.is_persisted() {
        employee.id = new_id();
        employee.created_at = None;
    } else {
        // Creation time belongs to the store: the stored row wins, a new id
        // gets a fresh one
        let stored: Option<String> = conn
            .query_row(
                "SELECT created_at FROM employees WHERE id = ?1",
                params![employee.id],
                |row| row.get(0),
            )
            .optional()?;
        employee.created_at = stored.as_deref().and_then(parse_timestamp);
    }

    employee.touch(Utc::now());

    let document = serde_json::to_string(&employee)?;
    let created_at = employee.created_at.map(|dt| dt.to_rfc3339());
    let updated_at = employee.updated_at.map(|dt| dt.to_rfc3339());

    conn.execute(
        "INSERT INTO employees (id, document, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
            document = excluded.document,
            updated_at = excluded.updated_at",
        params![employee.id, document, created_at, updated_at],
    )?;

    tracing::debug!(id = %employee.id, "employee saved");
    Ok(employee)
}

fn find_employee(conn: &Connection, id: &str) -> Result<Option<Employee>> {
    let row: Option<(String, String)> = conn
        .query_row(
            "SELECT id, document FROM employees WHERE id = ?1",
            params![id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    row.map(|(id, document)| decode_document(id, &document))
        .transpose()
}

fn find_all_employees(conn: &Connection) -> Result<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT id, document FROM employees ORDER BY rowid")?;

    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, document)| decode_document(id, &document))
        .collect()
}

fn delete_employee(conn: &Connection, id: &str) -> Result<()> {
    let removed = conn.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
    tracing::debug!(id, removed, "employee delete");
    Ok(())
}

// ============================================================================
// Repository implementation
// ============================================================================

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee> {
        run_blocking(Arc::clone(&self.conn), move |conn| save_employee(conn, employee)).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>> {
        let id = id.to_string();
        run_blocking(Arc::clone(&self.conn), move |conn| find_employee(conn, &id)).await
    }

    fn find_all(&self) -> EmployeeStream {
        let conn = Arc::clone(&self.conn);

        stream::once(run_blocking(conn, find_all_employees))
            .map_ok(|employees| stream::iter(employees.into_iter().map(Ok::<_, Error>)))
            .try_flatten()
            .boxed()
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        run_blocking(Arc::clone(&self.conn), move |conn| delete_employee(conn, &id)).await
    }
}
