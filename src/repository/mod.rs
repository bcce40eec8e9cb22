//! Repository - async access to the employee document store.
//!
//! The service only ever sees [`EmployeeRepository`]. Two adapters ship with
//! the crate: [`SqliteEmployeeRepository`] for real deployments and
//! [`InMemoryEmployeeRepository`] as a substitutable fake.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::entities::Employee;
use crate::error::Result;

pub mod memory;
pub mod sqlite;

#[cfg(test)]
pub(crate) mod testing;

pub use memory::InMemoryEmployeeRepository;
pub use sqlite::SqliteEmployeeRepository;

/// Lazy, finite, single-pass sequence of stored employees
pub type EmployeeStream = BoxStream<'static, Result<Employee>>;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert when `employee.id` is empty (the store assigns one), otherwise
    /// replace the record with that id. The returned entity carries the id.
    async fn save(&self, employee: Employee) -> Result<Employee>;

    /// `None` when no record has this id
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>>;

    /// Every stored record, in store-defined order. Nothing is read until the
    /// stream is polled.
    fn find_all(&self) -> EmployeeStream;

    /// Succeeds whether or not the record existed
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}

/// Fresh store-assigned identity
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
