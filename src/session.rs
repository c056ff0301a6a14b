use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    auth::CredentialVerifier,
    error::{StorageError, StorageResult},
    models::{Role, User},
    storage::SharedStorage,
};

pub const SESSION_KEY: &str = "auth_state";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Current login. A user is present exactly when the session is
/// authenticated, so the two can't drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    is_authenticated: bool,
    #[serde(default)]
    user: Option<User>,
}

impl TryFrom<SessionRecord> for Session {
    type Error = String;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        match (record.is_authenticated, record.user) {
            (true, Some(user)) => Ok(Session::authenticated(user)),
            (false, None) => Ok(Session::default()),
            (true, None) => Err("authenticated session without a user".to_string()),
            (false, Some(_)) => Err("user present on an unauthenticated session".to_string()),
        }
    }
}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        Self {
            is_authenticated: session.is_authenticated(),
            user: session.user,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Role),
    InvalidCredentials,
}

impl LoginOutcome {
    pub fn is_ok(self) -> bool {
        matches!(self, LoginOutcome::Authenticated(_))
    }

    pub fn role(self) -> Option<Role> {
        match self {
            LoginOutcome::Authenticated(role) => Some(role),
            LoginOutcome::InvalidCredentials => None,
        }
    }

    /// Text for the login page when the attempt was refused.
    pub fn message(self) -> Option<&'static str> {
        match self {
            LoginOutcome::Authenticated(_) => None,
            LoginOutcome::InvalidCredentials => Some(INVALID_CREDENTIALS),
        }
    }
}

/// Owns the `auth_state` key and the in-memory copy of the current session.
pub struct SessionStore {
    storage: SharedStorage,
    verifier: Arc<dyn CredentialVerifier>,
    current: Session,
}

impl SessionStore {
    /// Restores the persisted session, falling back to a logged-out one.
    pub fn load(storage: SharedStorage, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let current = read_session(&storage);
        Self {
            storage,
            verifier,
            current,
        }
    }

    pub fn current(&self) -> &Session {
        &self.current
    }

    /// Leading and trailing whitespace in the username is ignored. A refused
    /// login leaves the current session untouched.
    pub fn login(&mut self, username: &str, password: &str) -> StorageResult<LoginOutcome> {
        let username = username.trim();
        let Some(role) = self.verifier.verify(username, password) else {
            log::info!("Login refused for {username:?}");
            return Ok(LoginOutcome::InvalidCredentials);
        };

        self.replace(Session::authenticated(User {
            username: username.to_string(),
            role,
        }))?;
        log::info!("{username} logged in as {}", role.as_str());
        Ok(LoginOutcome::Authenticated(role))
    }

    pub fn logout(&mut self) -> StorageResult<()> {
        if let Some(user) = self.current.user() {
            log::info!("{} logged out", user.username);
        }
        self.replace(Session::default())
    }

    fn replace(&mut self, session: Session) -> StorageResult<()> {
        let serialized = serde_json::to_string(&session).map_err(|source| StorageError::Serialize {
            key: SESSION_KEY.to_string(),
            source,
        })?;
        self.storage.set(SESSION_KEY, &serialized)?;
        self.current = session;
        Ok(())
    }
}

fn read_session(storage: &SharedStorage) -> Session {
    let raw = match storage.get(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Session::default(),
        Err(err) => {
            log::warn!("Could not read saved session: {err}");
            return Session::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(session) => session,
        Err(err) => {
            log::warn!("Saved session is invalid, starting logged out: {err}");
            Session::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{StaticCredentials, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER};
    use crate::storage::{KeyValueStore, MemoryStorage};

    fn verifier() -> Arc<dyn CredentialVerifier> {
        Arc::new(StaticCredentials::new(DEFAULT_ADMIN_USER, DEFAULT_ADMIN_PASSWORD).expect("hash"))
    }

    fn store_with(storage: &Arc<MemoryStorage>) -> SessionStore {
        SessionStore::load(storage.clone(), verifier())
    }

    #[test]
    fn starts_logged_out_without_saved_state() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(&storage);
        assert!(!store.current().is_authenticated());
        assert!(store.current().user().is_none());
    }

    #[test]
    fn admin_login_is_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(&storage);

        let outcome = store.login("admin", "admin123").expect("login");
        assert_eq!(outcome, LoginOutcome::Authenticated(Role::Admin));
        assert!(store.current().is_admin());

        let raw = storage.get(SESSION_KEY).expect("get").expect("saved");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["isAuthenticated"], true);
        assert_eq!(value["user"]["username"], "admin");
        assert_eq!(value["user"]["role"], "admin");
    }

    #[test]
    fn session_survives_restart() {
        let storage = Arc::new(MemoryStorage::new());
        store_with(&storage).login("maria", "x").expect("login");

        let restored = store_with(&storage);
        assert!(restored.current().is_authenticated());
        assert_eq!(restored.current().role(), Some(Role::Client));
        assert_eq!(
            restored.current().user().map(|u| u.username.as_str()),
            Some("maria")
        );
    }

    #[test]
    fn refused_login_keeps_previous_session() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(&storage);
        store.login("maria", "x").expect("login");
        let before = store.current().clone();

        let outcome = store.login("", "x").expect("login");
        assert!(!outcome.is_ok());
        assert_eq!(outcome.role(), None);
        assert_eq!(outcome.message(), Some("Invalid credentials"));
        assert_eq!(store.current(), &before);
        assert_eq!(store_with(&storage).current(), &before);
    }

    #[test]
    fn whitespace_username_is_refused() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(&storage);
        assert_eq!(
            store.login("   ", "secret").expect("login"),
            LoginOutcome::InvalidCredentials
        );
        assert!(storage.get(SESSION_KEY).expect("get").is_none());
    }

    #[test]
    fn logout_resets_and_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(&storage);
        store.login("admin", "admin123").expect("login");
        store.logout().expect("logout");

        assert_eq!(store.current(), &Session::default());
        let raw = storage.get(SESSION_KEY).expect("get").expect("saved");
        assert_eq!(raw, r#"{"isAuthenticated":false,"user":null}"#);
        assert!(!store_with(&storage).current().is_authenticated());
    }

    #[test]
    fn corrupt_or_inconsistent_state_falls_back_to_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        for raw in [
            "not json",
            r#"{"isAuthenticated":true,"user":null}"#,
            r#"{"isAuthenticated":false,"user":{"username":"x","role":"admin"}}"#,
            r#"{"isAuthenticated":true,"user":{"username":"x","role":"root"}}"#,
        ] {
            storage.set(SESSION_KEY, raw).expect("set");
            assert_eq!(store_with(&storage).current(), &Session::default(), "{raw}");
        }
    }

    #[test]
    fn legacy_client_session_is_restored() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                SESSION_KEY,
                r#"{"isAuthenticated":true,"user":{"username":"joao","role":"cliente"}}"#,
            )
            .expect("set");
        assert_eq!(store_with(&storage).current().role(), Some(Role::Client));
    }
}
