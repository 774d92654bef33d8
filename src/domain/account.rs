use crate::error::{EnrollmentError, Result};
use serde::{Deserialize, Serialize};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The single stored user account.
///
/// Field names match the JSON record the mobile client persisted under the
/// `user` key, so existing installs deserialize unchanged. The password is
/// stored in plaintext: prototype semantics carried over deliberately.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct UserAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A registration form, validated before it becomes a `UserAccount`.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Validates the form and produces the account to store.
    ///
    /// Rules follow the original registration screen: every field required,
    /// a plausibly shaped email, a minimum password length, and a matching
    /// confirmation.
    pub fn into_account(self) -> Result<UserAccount> {
        if self.username.trim().is_empty() {
            return Err(EnrollmentError::Validation(
                "Please enter username".to_string(),
            ));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(EnrollmentError::Validation("Invalid email".to_string()));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(EnrollmentError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if self.confirm_password != self.password {
            return Err(EnrollmentError::Validation(
                "Passwords must match".to_string(),
            ));
        }
        Ok(UserAccount {
            username: self.username,
            email: self.email,
            password: self.password,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
