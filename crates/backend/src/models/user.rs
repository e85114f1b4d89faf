//! User directory records.

use pizza_stand_core::{Email, EmailError, RoleAssignment, UserId};
use serde::{Deserialize, Serialize};

/// A user in the fixture's directory.
///
/// The password is stored in plaintext - this is canned test data that never
/// leaves the process - and is excluded from every response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

/// Partial user record accepted by `PUT /api/user/{id}`.
///
/// Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl User {
    /// Merge a partial update onto this record.
    ///
    /// Omitted fields are preserved, the password in particular.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if the update carries a malformed email; the
    /// record is left untouched in that case.
    pub fn apply(&mut self, update: &UserUpdate) -> Result<(), EmailError> {
        // Validate before mutating so a bad email can't half-apply.
        let email = update.email.as_deref().map(Email::parse).transpose()?;

        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(password) = &update.password {
            self.password = Some(password.clone());
        }
        Ok(())
    }

    /// Whether the stored password matches exactly (case-sensitive, no
    /// hashing - test fixture only).
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_deref() == Some(candidate)
    }
}
