use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::EmailAddress;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::UpdateEmployeeCommand;

/// Port for employee domain service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Register a new employee; the password is hashed before storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Retrieve an employee and their tasks.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_employee(&self, id: EmployeeId) -> Result<EmployeeDetails, EmployeeError>;

    /// Retrieve every employee with their tasks.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_employees(&self) -> Result<Vec<EmployeeDetails>, EmployeeError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_employee(
        &self,
        id: EmployeeId,
        command: UpdateEmployeeCommand,
    ) -> Result<EmployeeDetails, EmployeeError>;

    /// Delete an employee together with their tasks.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError>;
}

/// Persistence operations for the employee aggregate.
///
/// Lookups and mutations of a missing row answer `None` / `false`; errors
/// are reserved for storage failures and constraint violations.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee, returning it with its assigned id.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError>;

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Option<Employee>, EmployeeError>;

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Overwrite a stored employee; `None` when no row has its id.
    async fn update(&self, employee: Employee) -> Result<Option<Employee>, EmployeeError>;

    /// Remove an employee; `false` when no row has this id.
    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeError>;
}
