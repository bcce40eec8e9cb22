// In-memory adapter, keyed by id. Used as the test double for the service
// and the HTTP layer; iteration order is id order.

use async_trait::async_trait;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{new_id, EmployeeRepository, EmployeeStream};
use crate::entities::Employee;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    records: Arc<RwLock<BTreeMap<String, Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> Result<Employee> {
        let mut records = self.records.write().await;

        // Creation time belongs to the store, never to the caller
        let stored_created_at = if employee.is_persisted() {
            records.get(&employee.id).and_then(|e| e.created_at)
        } else {
            employee.id = new_id();
            None
        };
        employee.created_at = stored_created_at;
        employee.touch(Utc::now());

        records.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    fn find_all(&self) -> EmployeeStream {
        let records = Arc::clone(&self.records);

        // Snapshot taken on first poll
        stream::once(async move {
            let snapshot: Vec<Employee> = records.read().await.values().cloned().collect();
            snapshot
        })
        .flat_map(|employees| stream::iter(employees.into_iter().map(Ok::<_, Error>)))
        .boxed()
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.records.write().await.remove(id);
        Ok(())
    }
}
