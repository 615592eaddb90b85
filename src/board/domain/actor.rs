//! Acting identity and person-summary value objects.

use super::{BoardDomainError, EmployeeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized email address identifying an actor against the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Validation is deliberately shallow: the remote store is the authority
    /// on which addresses exist, so only obviously malformed values are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidEmail`] when the value is empty or
    /// lacks an `@` separating a local part and a domain.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(BoardDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of an actor as resolved by the remote store.
///
/// Roles are free-form organizational labels; the board forwards them
/// verbatim so the server can scope task queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorRole(String);

impl ActorRole {
    /// Creates a validated role label.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyRole`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyRole);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the role as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActorRole {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lightweight person reference carried on tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    id: EmployeeId,
    name: String,
}

impl EmployeeSummary {
    /// Creates a person summary.
    #[must_use]
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resolved acting identity on whose behalf board operations run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    id: EmployeeId,
    name: String,
    email: EmailAddress,
    role: ActorRole,
}

impl ActorProfile {
    /// Creates an actor profile from resolved identity data.
    #[must_use]
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        email: EmailAddress,
        role: ActorRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            role,
        }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the actor's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the actor's role.
    #[must_use]
    pub const fn role(&self) -> &ActorRole {
        &self.role
    }

    /// Returns a person summary suitable for assignee/reporter fields.
    #[must_use]
    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary::new(self.id.clone(), self.name.clone())
    }
}
