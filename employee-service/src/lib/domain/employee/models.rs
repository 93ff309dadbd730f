use std::fmt;
use std::str::FromStr;

use crate::domain::employee::errors::EmailError;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::errors::EmployeeIdError;
use crate::domain::employee::errors::NameError;
use crate::domain::task::models::Task;

/// Employee aggregate entity.
///
/// Carries the stored password hash; it must never leave the domain in a
/// response. `PasswordHash` redacts itself from debug output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: PersonName,
    pub surname: PersonName,
    pub email: EmailAddress,
    pub age: u32,
    pub working_hours: u32,
    pub password_hash: PasswordHash,
}

/// An employee together with the tasks assigned to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub employee: Employee,
    pub tasks: Vec<Task>,
}

/// Employee unique identifier, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    /// Parse an employee ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, EmployeeIdError> {
        s.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(EmployeeId)
            .ok_or_else(|| EmployeeIdError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First name or surname.
///
/// Surrounding whitespace is trimmed; the result must be 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 100;

    pub fn new(name: String) -> Result<Self, NameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();
        if length == 0 {
            Err(NameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Comparison is
/// case-sensitive, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored password hash (PHC string).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Convert a signed count coming from the outside into a stored count.
pub fn non_negative(
    value: i64,
    error: impl FnOnce(i64) -> EmployeeError,
) -> Result<u32, EmployeeError> {
    u32::try_from(value).map_err(|_| error(value))
}

/// Command to create a new employee with domain types
#[derive(Debug)]
pub struct CreateEmployeeCommand {
    pub name: PersonName,
    pub surname: PersonName,
    pub email: EmailAddress,
    pub age: u32,
    pub working_hours: u32,
    pub password: String,
}

/// Employee ready to be persisted; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: PersonName,
    pub surname: PersonName,
    pub email: EmailAddress,
    pub age: u32,
    pub working_hours: u32,
    pub password_hash: PasswordHash,
}

impl NewEmployee {
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            age: self.age,
            working_hours: self.working_hours,
            password_hash: self.password_hash,
        }
    }
}

/// Partial update of an employee.
///
/// Only provided fields are applied.
#[derive(Debug, Default)]
pub struct UpdateEmployeeCommand {
    pub name: Option<PersonName>,
    pub surname: Option<PersonName>,
    pub age: Option<u32>,
    pub working_hours: Option<u32>,
}

impl UpdateEmployeeCommand {
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(surname) = self.surname {
            employee.surname = surname;
        }
        if let Some(age) = self.age {
            employee.age = age;
        }
        if let Some(working_hours) = self.working_hours {
            employee.working_hours = working_hours;
        }
    }
}
