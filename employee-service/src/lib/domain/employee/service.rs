use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::PasswordHash;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::task::models::Task;
use crate::domain::task::ports::TaskRepository;

/// Domain service implementation for employee operations.
///
/// Concrete implementation of EmployeeServicePort with dependency injection.
pub struct EmployeeService<ER, TR>
where
    ER: EmployeeRepository,
    TR: TaskRepository,
{
    repository: Arc<ER>,
    task_repository: Arc<TR>,
    password_hasher: Arc<auth::PasswordHasher>,
}

impl<ER, TR> EmployeeService<ER, TR>
where
    ER: EmployeeRepository,
    TR: TaskRepository,
{
    /// Create a new employee service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Employee persistence implementation
    /// * `task_repository` - Task persistence, used to attach tasks to employees
    pub fn new(repository: Arc<ER>, task_repository: Arc<TR>) -> Self {
        Self {
            repository,
            task_repository,
            password_hasher: Arc::new(auth::PasswordHasher::new()),
        }
    }

    /// Hash on the blocking pool so Argon2 never occupies a runtime worker.
    async fn hash_password(&self, password: String) -> Result<PasswordHash, EmployeeError> {
        let hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| EmployeeError::Unknown(format!("Hashing task failed: {}", e)))?
            .map(PasswordHash::new)
            .map_err(|e| EmployeeError::Password(e.to_string()))
    }

    async fn with_tasks(&self, employee: Employee) -> Result<EmployeeDetails, EmployeeError> {
        let tasks = self.task_repository.list_by_employee(employee.id).await?;
        Ok(EmployeeDetails { employee, tasks })
    }
}

#[async_trait]
impl<ER, TR> EmployeeServicePort for EmployeeService<ER, TR>
where
    ER: EmployeeRepository,
    TR: TaskRepository,
{
    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let password_hash = self.hash_password(command.password).await?;

        let employee = NewEmployee {
            name: command.name,
            surname: command.surname,
            email: command.email,
            age: command.age,
            working_hours: command.working_hours,
            password_hash,
        };

        let created = self.repository.create(employee).await?;
        tracing::info!(employee_id = %created.id, "Employee created");

        Ok(created)
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<EmployeeDetails, EmployeeError> {
        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))?;

        self.with_tasks(employee).await
    }

    async fn list_employees(&self) -> Result<Vec<EmployeeDetails>, EmployeeError> {
        let employees = self.repository.list_all().await?;

        let mut tasks_by_employee: HashMap<EmployeeId, Vec<Task>> = HashMap::new();
        for task in self.task_repository.list_all().await? {
            tasks_by_employee
                .entry(task.employee_id)
                .or_default()
                .push(task);
        }

        Ok(employees
            .into_iter()
            .map(|employee| {
                let tasks = tasks_by_employee.remove(&employee.id).unwrap_or_default();
                EmployeeDetails { employee, tasks }
            })
            .collect())
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<EmployeeDetails, EmployeeError> {
        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(id))?;

        command.apply_to(&mut employee);

        let updated = self
            .repository
            .update(employee)
            .await?
            .ok_or(EmployeeError::NotFound(id))?;
        tracing::info!(employee_id = %id, "Employee updated");

        self.with_tasks(updated).await
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        if !self.repository.delete(id).await? {
            return Err(EmployeeError::NotFound(id));
        }
        tracing::info!(employee_id = %id, "Employee deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::employee::models::EmailAddress;
    use crate::domain::employee::models::PersonName;
    use crate::domain::task::errors::TaskError;
    use crate::domain::task::models::NewTask;
    use crate::domain::task::models::TaskId;

    mock! {
        pub TestEmployeeRepository {}

        #[async_trait]
        impl EmployeeRepository for TestEmployeeRepository {
            async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError>;
            async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Employee>, EmployeeError>;
            async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;
            async fn update(&self, employee: Employee) -> Result<Option<Employee>, EmployeeError>;
            async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeError>;
        }
    }

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn create(&self, task: NewTask) -> Result<Task, TaskError>;
            async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError>;
            async fn list_all(&self) -> Result<Vec<Task>, TaskError>;
            async fn list_by_employee(&self, employee_id: EmployeeId) -> Result<Vec<Task>, TaskError>;
            async fn update(&self, task: Task) -> Result<Option<Task>, TaskError>;
            async fn delete(&self, id: TaskId) -> Result<bool, TaskError>;
        }
    }

    fn employee(id: i64, email: &str) -> Employee {
        Employee {
            id: EmployeeId(id),
            name: PersonName::new("Ada".to_string()).unwrap(),
            surname: PersonName::new("Lovelace".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            age: 36,
            working_hours: 40,
            password_hash: PasswordHash::new("$argon2id$test_hash".to_string()),
        }
    }

    fn task(id: i64, employee_id: i64) -> Task {
        Task {
            id: TaskId(id),
            title: format!("Task {}", id),
            description: "Something to do".to_string(),
            employee_id: EmployeeId(employee_id),
        }
    }

    #[tokio::test]
    async fn test_create_employee_hashes_password() {
        let mut repository = MockTestEmployeeRepository::new();
        let task_repository = MockTestTaskRepository::new();

        repository
            .expect_create()
            .withf(|employee| {
                employee.email.as_str() == "ada@example.com"
                    && employee.password_hash.as_str().starts_with("$argon2")
                    && auth::PasswordHasher::new()
                        .verify("password123", employee.password_hash.as_str())
            })
            .times(1)
            .returning(|employee| Ok(employee.with_id(EmployeeId(1))));

        let service = EmployeeService::new(Arc::new(repository), Arc::new(task_repository));

        let command = CreateEmployeeCommand {
            name: PersonName::new("Ada".to_string()).unwrap(),
            surname: PersonName::new("Lovelace".to_string()).unwrap(),
            email: EmailAddress::new("ada@example.com".to_string()).unwrap(),
            age: 36,
            working_hours: 40,
            password: "password123".to_string(),
        };

        let created = service.create_employee(command).await.unwrap();
        assert_eq!(created.id, EmployeeId(1));
        assert_ne!(created.password_hash.as_str(), "password123");
    }

    #[tokio::test]
    async fn test_create_employee_duplicate_email() {
        let mut repository = MockTestEmployeeRepository::new();
        let task_repository = MockTestTaskRepository::new();

        repository.expect_create().times(1).returning(|employee| {
            Err(EmployeeError::EmailAlreadyExists(
                employee.email.as_str().to_string(),
            ))
        });

        let service = EmployeeService::new(Arc::new(repository), Arc::new(task_repository));

        let command = CreateEmployeeCommand {
            name: PersonName::new("Ada".to_string()).unwrap(),
            surname: PersonName::new("Lovelace".to_string()).unwrap(),
            email: EmailAddress::new("ada@example.com".to_string()).unwrap(),
            age: 36,
            working_hours: 40,
            password: "password123".to_string(),
        };

        let result = service.create_employee(command).await;
        assert!(matches!(
            result,
            Err(EmployeeError::EmailAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_get_employee_with_tasks() {
        let mut repository = MockTestEmployeeRepository::new();
        let mut task_repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .withf(|id| *id == EmployeeId(1))
            .times(1)
            .returning(|_| Ok(Some(employee(1, "ada@example.com"))));
        task_repository
            .expect_list_by_employee()
            .withf(|id| *id == EmployeeId(1))
            .times(1)
            .returning(|_| Ok(vec![task(1, 1), task(2, 1)]));

        let service = EmployeeService::new(Arc::new(repository), Arc::new(task_repository));

        let details = service.get_employee(EmployeeId(1)).await.unwrap();
        assert_eq!(details.employee.email.as_str(), "ada@example.com");
        assert_eq!(details.tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let mut repository = MockTestEmployeeRepository::new();
        let task_repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = EmployeeService::new(Arc::new(repository), Arc::new(task_repository));

        let result = service.get_employee(EmployeeId(9)).await;
        assert!(matches!(
            result,
            Err(EmployeeError::NotFound(EmployeeId(9)))
        ));
    }

    #[tokio::test]
    async fn test_list_employees_groups_tasks() {
        let mut repository = MockTestEmployeeRepository::new();
        let mut task_repository = MockTestTaskRepository::new();

        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![
                employee(1, "ada@example.com"),
                employee(2, "grace@example.com"),
            ])
        });
        task_repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![task(1, 2), task(2, 1), task(3, 2)]));

        let service = EmployeeService::new(Arc::new(repository), Arc::new(task_repository));

        let employees = service.list_employees().await.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].tasks.len(), 1);
        assert_eq!(employees[1].tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_update_employee_applies_patch() {
        let mut repository = MockTestEmployeeRepository::new();
        let mut task_repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(employee(1, "ada@example.com"))));
        repository
            .expect_update()
            .withf(|employee| {
                employee.name.as_str() == "Augusta"
                    && employee.surname.as_str() == "Lovelace"
                    && employee.age == 37
                    && employee.working_hours == 40
            })
            .times(1)
            .returning(|employee| Ok(Some(employee)));
        task_repository
            .expect_list_by_employee()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = EmployeeService::new(Arc::new(repository), Arc::new(task_repository));

        let command = UpdateEmployeeCommand {
            name: Some(PersonName::new("Augusta".to_string()).unwrap()),
            age: Some(37),
            ..Default::default()
        };

        let details = service
            .update_employee(EmployeeId(1), command)
            .await
            .unwrap();
        assert_eq!(details.employee.name.as_str(), "Augusta");
    }

    #[tokio::test]
    async fn test_update_employee_not_found() {
        let mut repository = MockTestEmployeeRepository::new();
        let task_repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = EmployeeService::new(Arc::new(repository), Arc::new(task_repository));

        let result = service
            .update_employee(EmployeeId(3), UpdateEmployeeCommand::default())
            .await;
        assert!(matches!(result, Err(EmployeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_employee() {
        let mut repository = MockTestEmployeeRepository::new();
        let task_repository = MockTestTaskRepository::new();

        repository
            .expect_delete()
            .withf(|id| *id == EmployeeId(1))
            .times(1)
            .returning(|_| Ok(true));
        repository
            .expect_delete()
            .withf(|id| *id == EmployeeId(2))
            .times(1)
            .returning(|_| Ok(false));

        let service = EmployeeService::new(Arc::new(repository), Arc::new(task_repository));

        assert!(service.delete_employee(EmployeeId(1)).await.is_ok());
        assert!(matches!(
            service.delete_employee(EmployeeId(2)).await,
            Err(EmployeeError::NotFound(EmployeeId(2)))
        ));
    }
}
