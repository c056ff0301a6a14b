use std::sync::Arc;

use crate::{
    appointments::AppointmentStore,
    auth::{CredentialVerifier, StaticCredentials},
    config::Config,
    error::SetupError,
    session::SessionStore,
    storage::{FileStorage, SharedStorage},
};

/// Everything the pages need, built once at startup and passed down.
pub struct AppState {
    pub appointments: AppointmentStore,
    pub session: SessionStore,
}

impl AppState {
    /// File-backed state under `config.data_dir`.
    pub fn open(config: &Config) -> Result<Self, SetupError> {
        log::info!("Using booking data in {}", config.data_dir.display());
        let storage: SharedStorage = Arc::new(FileStorage::new(&config.data_dir));
        Self::with_storage(storage, config)
    }

    pub fn with_storage(storage: SharedStorage, config: &Config) -> Result<Self, SetupError> {
        let credentials = StaticCredentials::new(&config.admin_user, &config.admin_password)
            .map_err(|err| SetupError::PasswordHash(err.to_string()))?;
        let verifier: Arc<dyn CredentialVerifier> = Arc::new(credentials);
        Ok(Self::with_verifier(storage, verifier))
    }

    /// Swap in another credential check without touching the stores.
    pub fn with_verifier(storage: SharedStorage, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            appointments: AppointmentStore::new(storage.clone()),
            session: SessionStore::load(storage, verifier),
        }
    }
}
