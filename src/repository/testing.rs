// Test doubles that are not useful outside the crate's own tests

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use super::{EmployeeRepository, EmployeeStream};
use crate::entities::Employee;
use crate::error::{Error, Result};

/// Every call fails as if the store were unreachable
#[derive(Debug, Clone, Default)]
pub struct FailingEmployeeRepository;

fn unavailable() -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "store unavailable",
    ))
}

#[async_trait]
impl EmployeeRepository for FailingEmployeeRepository {
    async fn save(&self, _employee: Employee) -> Result<Employee> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Employee>> {
        Err(unavailable())
    }

    fn find_all(&self) -> EmployeeStream {
        stream::once(async { Err::<Employee, _>(unavailable()) }).boxed()
    }

    async fn delete_by_id(&self, _id: &str) -> Result<()> {
        Err(unavailable())
    }
}
