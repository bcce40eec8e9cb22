use crate::dto::EmployeeDto;
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// Database location that opens a private in-memory store
pub const IN_MEMORY: &str = ":memory:";

/// Open (or create) the document store and make sure the schema exists
pub fn open_database(path: &Path) -> Result<Connection> {
    let conn = if path.as_os_str() == IN_MEMORY {
        Connection::open_in_memory()?
    } else {
        Connection::open(path)?
    };

    setup_database(&conn)?;
    tracing::info!(path = %path.display(), "database opened");

    Ok(conn)
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // Enable WAL mode for crash recovery
    conn.pragma_update(None, "journal_mode", "WAL")?;

    // ==========================================================================
    // Employees collection
    // One JSON document per row, keyed by its string id. Full scans follow
    // rowid, which an upsert leaves unchanged.
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY NOT NULL,
            document TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

pub fn verify_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;

    Ok(count)
}

/// Read employees from a CSV file with a `firstName,lastName,email` header.
/// An `id` column, if present, is read but later ignored by the import.
pub fn load_csv(csv_path: &Path) -> Result<Vec<EmployeeDto>> {
    let mut rdr = csv::Reader::from_path(csv_path)?;

    let mut employees = Vec::new();
    for result in rdr.deserialize() {
        let employee: EmployeeDto = result?;
        employees.push(employee);
    }

    tracing::debug!(count = employees.len(), path = %csv_path.display(), "csv loaded");
    Ok(employees)
}
