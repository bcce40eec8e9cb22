// Employee Service - the five use-cases
//
// Each operation is a short chain over the repository: at most one fetch
// followed by one save. Failures are never handled here, only passed up.

use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::instrument;

use crate::dto::EmployeeDto;
use crate::error::Result;
use crate::mapper;
use crate::repository::EmployeeRepository;

/// Stream of mapped employees, as produced by [`EmployeeService::get_all_employees`]
pub type EmployeeDtoStream = BoxStream<'static, Result<EmployeeDto>>;

#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new employee. Any id on the DTO is dropped; the store
    /// assigns one.
    #[instrument(skip_all)]
    pub async fn save_employee(&self, dto: EmployeeDto) -> Result<EmployeeDto> {
        let saved = self.repository.save(mapper::to_entity(dto)).await?;
        tracing::info!(id = %saved.id, "employee created");
        Ok(mapper::to_dto(saved))
    }

    /// `None` when no employee has this id
    #[instrument(skip(self))]
    pub async fn get_employee(&self, id: &str) -> Result<Option<EmployeeDto>> {
        let found = self.repository.find_by_id(id).await?;
        Ok(found.map(mapper::to_dto))
    }

    /// Every stored employee, in store order. Empty store, empty stream.
    pub fn get_all_employees(&self) -> EmployeeDtoStream {
        self.repository.find_all().map_ok(EmployeeDto::from).boxed()
    }

    /// Overwrite first name, last name and email of an existing employee.
    /// The id never changes; `None` when the employee does not exist.
    #[instrument(skip(self, dto))]
    pub async fn update_employee(&self, dto: EmployeeDto, id: &str) -> Result<Option<EmployeeDto>> {
        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            tracing::debug!("nothing to update");
            return Ok(None);
        };

        existing.apply_values(dto.first_name, dto.last_name, dto.email);
        let saved = self.repository.save(existing).await?;
        tracing::info!("employee updated");

        Ok(Some(mapper::to_dto(saved)))
    }

    /// Completes successfully whether or not the employee existed
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: &str) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        tracing::info!("employee deleted");
        Ok(())
    }

    /// Save each DTO as a new employee, in order. Stops at the first failure.
    #[instrument(skip_all, fields(count = dtos.len()))]
    pub async fn import_employees(&self, dtos: Vec<EmployeeDto>) -> Result<usize> {
        let mut inserted = 0;
        for dto in dtos {
            self.save_employee(dto).await?;
            inserted += 1;
        }

        tracing::info!(inserted, "import finished");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::repository::testing::FailingEmployeeRepository;
    use crate::repository::InMemoryEmployeeRepository;

    fn create_test_service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()))
    }

    fn ramesh() -> EmployeeDto {
        EmployeeDto::new("Ramesh", "Fadatare", "ramesh@gmail.com")
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let service = create_test_service();

        let saved = service.save_employee(ramesh()).await.unwrap();
        assert!(!saved.id.is_empty());

        let fetched = service.get_employee(&saved.id).await.unwrap().unwrap();
        assert_eq!(fetched.first_name, "Ramesh");
        assert_eq!(fetched.last_name, "Fadatare");
        assert_eq!(fetched.email, "ramesh@gmail.com");
        assert_eq!(fetched.id, saved.id);
    }

    #[tokio::test]
    async fn test_save_ignores_client_id() {
        let service = create_test_service();

        let mut dto = ramesh();
        dto.id = "client-chosen".to_string();
        let saved = service.save_employee(dto).await.unwrap();

        assert_ne!(saved.id, "client-chosen");
        assert!(service.get_employee("client-chosen").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let service = create_test_service();
        assert!(service.get_employee("never-saved").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let service = create_test_service();
        let saved = service.save_employee(ramesh()).await.unwrap();

        let mut changes = EmployeeDto::new("Ramesh", "Fadatare", "ramesh@example.com");
        changes.id = "ignored".to_string();
        let updated = service
            .update_employee(changes, &saved.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.email, "ramesh@example.com");

        let fetched = service.get_employee(&saved.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "ramesh@example.com");
        assert_eq!(fetched.first_name, "Ramesh");
    }

    #[tokio::test]
    async fn test_update_missing_is_none() {
        let service = create_test_service();

        let result = service.update_employee(ramesh(), "123").await.unwrap();
        assert!(result.is_none());

        // Update must not create the record
        assert!(service.get_employee("123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = create_test_service();
        let saved = service.save_employee(ramesh()).await.unwrap();

        service.delete_employee(&saved.id).await.unwrap();
        service.delete_employee(&saved.id).await.unwrap();

        assert!(service.get_employee(&saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_empty_and_populated() {
        let service = create_test_service();

        let empty: Vec<EmployeeDto> = service.get_all_employees().try_collect().await.unwrap();
        assert!(empty.is_empty());

        service.save_employee(ramesh()).await.unwrap();
        service
            .save_employee(EmployeeDto::new("Tony", "Stark", "tony.stark@gmail.com"))
            .await
            .unwrap();

        let all: Vec<EmployeeDto> = service.get_all_employees().try_collect().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|dto| !dto.id.is_empty()));
        assert!(all.iter().any(|dto| dto.last_name == "Stark"));
    }

    #[tokio::test]
    async fn test_import_employees() {
        let service = create_test_service();

        let inserted = service
            .import_employees(vec![
                ramesh(),
                EmployeeDto::new("Tony", "Stark", "tony.stark@gmail.com"),
            ])
            .await
            .unwrap();

        assert_eq!(inserted, 2);
        let all: Vec<EmployeeDto> = service.get_all_employees().try_collect().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let service = EmployeeService::new(Arc::new(FailingEmployeeRepository));

        assert!(matches!(service.save_employee(ramesh()).await, Err(Error::Io(_))));
        assert!(matches!(service.get_employee("1").await, Err(Error::Io(_))));
        assert!(matches!(
            service.update_employee(ramesh(), "1").await,
            Err(Error::Io(_))
        ));
        assert!(matches!(service.delete_employee("1").await, Err(Error::Io(_))));

        let all: Result<Vec<EmployeeDto>> = service.get_all_employees().try_collect().await;
        assert!(all.is_err());
    }
}
