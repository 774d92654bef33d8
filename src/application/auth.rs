use crate::domain::account::{Registration, UserAccount};
use crate::domain::ports::KvStoreBox;
use crate::error::{EnrollmentError, Result};

/// Store key holding the JSON-encoded account record.
pub const USER_KEY: &str = "user";

/// Single-slot authentication over the persistent store.
///
/// There is one account per device; registering overwrites whatever was
/// stored before, and login compares username and password exactly.
pub struct AuthGate {
    store: KvStoreBox,
}

impl AuthGate {
    pub fn new(store: KvStoreBox) -> Self {
        Self { store }
    }

    /// Validates the registration form and persists the account,
    /// unconditionally replacing any prior one.
    pub async fn register(&self, registration: Registration) -> Result<UserAccount> {
        let account = registration.into_account()?;
        let encoded = serde_json::to_string(&account)?;
        self.store.set(USER_KEY, encoded).await?;
        Ok(account)
    }

    /// Succeeds iff an account exists and both fields match exactly.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserAccount> {
        let stored = self
            .store
            .get(USER_KEY)
            .await?
            .ok_or(EnrollmentError::InvalidCredentials)?;
        let account: UserAccount = serde_json::from_str(&stored)?;

        if account.username == username && account.password == password {
            Ok(account)
        } else {
            Err(EnrollmentError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryKvStore;

    fn gate() -> AuthGate {
        AuthGate::new(Box::new(InMemoryKvStore::new()))
    }

    fn registration(username: &str, password: &str) -> Registration {
        Registration {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: password.to_string(),
            confirm_password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let gate = gate();
        gate.register(registration("alice", "secret1")).await.unwrap();

        let account = gate.login("alice", "secret1").await.unwrap();
        assert_eq!(account.username, "alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let gate = gate();
        gate.register(registration("alice", "secret1")).await.unwrap();

        assert!(matches!(
            gate.login("alice", "wrong").await,
            Err(EnrollmentError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_without_account() {
        let gate = gate();
        assert!(matches!(
            gate.login("alice", "secret1").await,
            Err(EnrollmentError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_register_overwrites_previous_account() {
        let gate = gate();
        gate.register(registration("alice", "secret1")).await.unwrap();
        gate.register(registration("bob", "hunter22")).await.unwrap();

        assert!(gate.login("alice", "secret1").await.is_err());
        assert!(gate.login("bob", "hunter22").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_is_case_sensitive() {
        let gate = gate();
        gate.register(registration("alice", "secret1")).await.unwrap();

        assert!(gate.login("Alice", "secret1").await.is_err());
        assert!(gate.login("alice", "Secret1").await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_registration_stores_nothing() {
        let gate = gate();
        let mut reg = registration("alice", "secret1");
        reg.confirm_password = "other".to_string();

        assert!(gate.register(reg).await.is_err());
        assert!(gate.login("alice", "secret1").await.is_err());
    }
}
