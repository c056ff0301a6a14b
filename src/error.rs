use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Reasons a booking submission is refused. Field variants carry the message
/// shown next to the offending input.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Name is required.")]
    MissingName,
    #[error("Phone number is required.")]
    MissingPhone,
    #[error("Please pick a date.")]
    MissingDate,
    #[error("Please pick a time.")]
    MissingTime,
    #[error("Appointments are only available on Mondays and Saturdays.")]
    DateNotAllowed,
    #[error("Appointments are only available between 09:00 and 19:00.")]
    TimeNotAllowed,
    #[error("Unknown service {0:?}.")]
    UnknownService(String),
    #[error("Unknown barber {0:?}.")]
    UnknownBarber(String),
    #[error("Could not save the appointment: {0}")]
    Storage(#[from] StorageError),
}

impl BookingError {
    /// Form field the error belongs to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingName => Some("name"),
            Self::MissingPhone => Some("phone"),
            Self::MissingDate | Self::DateNotAllowed => Some("date"),
            Self::MissingTime | Self::TimeNotAllowed => Some("time"),
            Self::UnknownService(_) => Some("service"),
            Self::UnknownBarber(_) => Some("barber"),
            Self::Storage(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to hash admin password: {0}")]
    PasswordHash(String),
}
