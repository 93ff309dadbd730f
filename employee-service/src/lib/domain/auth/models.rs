use crate::domain::employee::models::EmailAddress;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::PasswordHash;
use crate::domain::employee::models::PersonName;

/// The employee a validated access token belongs to.
///
/// Has no password hash by construction, so handlers cannot leak it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: EmployeeId,
    pub email: EmailAddress,
    pub name: PersonName,
    pub surname: PersonName,
    pub age: u32,
    pub working_hours: u32,
}

/// Stored identifier and password hash of an employee.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub identity: Identity,
    pub password_hash: PasswordHash,
}

impl CredentialRecord {
    /// Drop the hash, keeping what non-authentication code may see.
    pub fn into_identity(self) -> Identity {
        self.identity
    }
}

impl From<Employee> for CredentialRecord {
    fn from(employee: Employee) -> Self {
        Self {
            identity: Identity {
                id: employee.id,
                email: employee.email,
                name: employee.name,
                surname: employee.surname,
                age: employee.age,
                working_hours: employee.working_hours,
            },
            password_hash: employee.password_hash,
        }
    }
}

/// Login form: the email is submitted as `username`.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Issued bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}
