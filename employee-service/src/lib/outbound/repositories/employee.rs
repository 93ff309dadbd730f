use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::CredentialRecord;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::EmailAddress;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::NewEmployee;
use crate::domain::employee::models::PasswordHash;
use crate::domain::employee::models::PersonName;
use crate::domain::employee::ports::EmployeeRepository;

pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    surname: String,
    email: String,
    password_hash: String,
    age: i64,
    working_hours: i64,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let corrupt = |field: &str, value: i64| {
            EmployeeError::DatabaseError(format!(
                "Stored {} out of range for employee {}: {}",
                field, row.id, value
            ))
        };

        Ok(Employee {
            id: EmployeeId(row.id),
            name: PersonName::new(row.name)?,
            surname: PersonName::new(row.surname)?,
            email: EmailAddress::new(row.email)?,
            age: u32::try_from(row.age).map_err(|_| corrupt("age", row.age))?,
            working_hours: u32::try_from(row.working_hours)
                .map_err(|_| corrupt("working_hours", row.working_hours))?,
            password_hash: PasswordHash::new(row.password_hash),
        })
    }
}

fn map_write_error(e: sqlx::Error, email: &EmailAddress) -> EmployeeError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return EmployeeError::EmailAlreadyExists(email.as_str().to_string());
        }
    }
    EmployeeError::DatabaseError(e.to_string())
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, surname, email, password_hash, age, working_hours)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee.name.as_str())
        .bind(employee.surname.as_str())
        .bind(employee.email.as_str())
        .bind(employee.password_hash.as_str())
        .bind(i64::from(employee.age))
        .bind(i64::from(employee.working_hours))
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &employee.email))?;

        Ok(employee.with_id(EmployeeId(result.last_insert_rowid())))
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, surname, email, password_hash, age, working_hours
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, surname, email, password_hash, age, working_hours
            FROM employees
            WHERE email = ?
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        row.map(Employee::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, surname, email, password_hash, age, working_hours
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn update(&self, employee: Employee) -> Result<Option<Employee>, EmployeeError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, surname = ?, email = ?, password_hash = ?, age = ?, working_hours = ?
            WHERE id = ?
            "#,
        )
        .bind(employee.name.as_str())
        .bind(employee.surname.as_str())
        .bind(employee.email.as_str())
        .bind(employee.password_hash.as_str())
        .bind(i64::from(employee.age))
        .bind(i64::from(employee.working_hours))
        .bind(employee.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &employee.email))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(employee))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CredentialStore for SqliteEmployeeRepository {
    async fn find_credentials(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<CredentialRecord>, AuthError> {
        EmployeeRepository::find_by_email(self, email)
            .await
            .map(|employee| employee.map(CredentialRecord::from))
            .map_err(|e| AuthError::Store(e.to_string()))
    }
}
