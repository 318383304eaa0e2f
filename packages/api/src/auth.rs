//! # Demo login
//!
//! There is no real credential check. A login succeeds when the user search
//! returns an account whose username equals the typed one, ignoring case,
//! and the password is non-empty. The matching account is then stored as the
//! [`SessionRecord`].
//!
//! ## Failure order
//!
//! 1. Empty username → [`Error::Validation`], no request is made.
//! 2. Request fails → [`Error::Network`].
//! 3. No matching username → [`Error::InvalidUsername`].
//! 4. Empty password → [`Error::InvalidPassword`].

use store::{Error, KeyValueStorage, Result, SessionRecord, SessionStore, UserRecord};
use tracing::{info, warn};

use crate::client::UserDirectory;

/// Message shown when a required field is blank.
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Resolve `username` to an account. Both inputs are trimmed first.
pub async fn authenticate<D: UserDirectory>(
    directory: &D,
    username: &str,
    password: &str,
) -> Result<UserRecord> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() {
        return Err(Error::validation(FILL_ALL_FIELDS));
    }

    let candidates = directory.search_users(username).await?;
    let user = candidates
        .into_iter()
        .find(|u| u.username.to_lowercase() == username.to_lowercase())
        .ok_or(Error::InvalidUsername)?;

    if password.is_empty() {
        return Err(Error::InvalidPassword);
    }

    Ok(user)
}

/// Login, logout and session lookup, bound to one directory and one store.
pub struct AuthFlow<D, S: KeyValueStorage> {
    directory: D,
    session: SessionStore<S>,
}

impl<D: UserDirectory, S: KeyValueStorage> AuthFlow<D, S> {
    pub fn new(directory: D, session: SessionStore<S>) -> Self {
        Self { directory, session }
    }

    /// Authenticate and persist the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionRecord> {
        match authenticate(&self.directory, username, password).await {
            Ok(user) => {
                let record = SessionRecord::from(&user);
                self.session.save(&record)?;
                info!(username = %record.username, id = record.id, "Login succeeded");
                Ok(record)
            }
            Err(e) => {
                warn!(username = username.trim(), "Login failed: {}", e.detail());
                Err(e)
            }
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.session.clear()?;
        info!("Logged out");
        Ok(())
    }

    pub fn current_user(&self) -> Option<SessionRecord> {
        self.session.load()
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::MemoryStorage;

    use super::*;

    /// Mimics the remote search: substring match on username or first name.
    struct FakeDirectory {
        users: Vec<UserRecord>,
        offline: bool,
        requests: Cell<usize>,
    }

    impl FakeDirectory {
        fn new() -> Self {
            Self {
                users: vec![user(1, "Emily", "emilys"), user(2, "Michael", "michaelw")],
                offline: false,
                requests: Cell::new(0),
            }
        }

        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::new()
            }
        }
    }

    impl UserDirectory for FakeDirectory {
        async fn search_users(&self, query: &str) -> Result<Vec<UserRecord>> {
            self.requests.set(self.requests.get() + 1);
            if self.offline {
                return Err(Error::Network("connection refused".to_string()));
            }
            let q = query.to_lowercase();
            Ok(self
                .users
                .iter()
                .filter(|u| {
                    u.username.to_lowercase().contains(&q) || u.first_name.to_lowercase().contains(&q)
                })
                .cloned()
                .collect())
        }
    }

    fn user(id: u32, first_name: &str, username: &str) -> UserRecord {
        UserRecord {
            id,
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    fn flow(directory: FakeDirectory) -> AuthFlow<FakeDirectory, MemoryStorage> {
        AuthFlow::new(directory, SessionStore::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_login_persists_matching_user() {
        let flow = flow(FakeDirectory::new());

        let record = flow.login("emilys", "anything").await.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.first_name, "Emily");
        assert_eq!(flow.current_user(), Some(record));
    }

    #[tokio::test]
    async fn test_username_match_ignores_case_and_whitespace() {
        let flow = flow(FakeDirectory::new());

        let record = flow.login("  EmilyS ", "pw").await.unwrap();
        assert_eq!(record.username, "emilys");
    }

    #[tokio::test]
    async fn test_partial_username_is_rejected() {
        let flow = flow(FakeDirectory::new());

        assert_eq!(flow.login("emil", "pw").await, Err(Error::InvalidUsername));
        assert_eq!(flow.login("nobody", "pw").await, Err(Error::InvalidUsername));
        assert!(flow.current_user().is_none());
    }

    #[tokio::test]
    async fn test_empty_password_is_invalid() {
        let flow = flow(FakeDirectory::new());

        assert_eq!(flow.login("emilys", "   ").await, Err(Error::InvalidPassword));
        assert!(flow.current_user().is_none());
    }

    #[tokio::test]
    async fn test_empty_username_skips_request() {
        let directory = FakeDirectory::new();
        let result = authenticate(&directory, " ", "pw").await;

        assert_eq!(result, Err(Error::validation(FILL_ALL_FIELDS)));
        assert_eq!(directory.requests.get(), 0);
    }

    #[tokio::test]
    async fn test_network_failure_is_reported() {
        let flow = flow(FakeDirectory::offline());

        let err = flow.login("emilys", "pw").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert_eq!(err.to_string(), "Network error: Please check your connection");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let flow = flow(FakeDirectory::new());
        flow.login("michaelw", "pw").await.unwrap();
        assert!(flow.session().is_authenticated());

        flow.logout().unwrap();
        assert!(!flow.session().is_authenticated());
        assert!(flow.current_user().is_none());
    }
}
