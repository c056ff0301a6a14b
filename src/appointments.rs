use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::{StorageError, StorageResult},
    models::{Appointment, AppointmentDraft},
    storage::SharedStorage,
};

pub const APPOINTMENTS_KEY: &str = "appointments";

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Owns the `appointments` key. Records are kept in creation order and the
/// whole list is rewritten on every change.
#[derive(Clone)]
pub struct AppointmentStore {
    storage: SharedStorage,
}

impl AppointmentStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// Unreadable or malformed data reads as an empty list; individual
    /// records that don't fit the schema are skipped.
    pub fn list(&self) -> Vec<Appointment> {
        match self.load() {
            Ok(appointments) => appointments,
            Err(err) => {
                log::warn!("Could not read appointments: {err}");
                Vec::new()
            }
        }
    }

    /// Storage failures are returned; only corrupt contents read as empty, so
    /// a failed read never gets written back over the stored list.
    fn load(&self) -> StorageResult<Vec<Appointment>> {
        let Some(raw) = self.storage.get(APPOINTMENTS_KEY)? else {
            return Ok(Vec::new());
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                log::warn!("Stored appointments are not a list; ignoring them");
                return Ok(Vec::new());
            }
            Err(err) => {
                log::warn!("Stored appointments are corrupt: {err}");
                return Ok(Vec::new());
            }
        };

        Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Appointment>(item) {
                Ok(appointment) if !appointment.id.trim().is_empty() => Some(appointment),
                Ok(_) => {
                    log::warn!("Skipping stored appointment without an id");
                    None
                }
                Err(err) => {
                    log::warn!("Skipping malformed stored appointment: {err}");
                    None
                }
            })
            .collect())
    }

    /// Eligibility is the caller's job; this never rejects a draft.
    pub fn save(&self, draft: AppointmentDraft) -> StorageResult<Appointment> {
        let appointment = Appointment::from_draft(new_id(), Utc::now(), draft);
        let mut current = self.load()?;
        current.push(appointment.clone());
        self.persist(&current)?;

        log::info!(
            "Appointment {} created for {} on {} at {}",
            appointment.id,
            appointment.name,
            appointment.date,
            appointment.time
        );
        Ok(appointment)
    }

    pub fn remove(&self, id: &str) -> StorageResult<()> {
        let mut current = self.load()?;
        let before = current.len();
        current.retain(|appointment| appointment.id != id);
        self.persist(&current)?;

        if current.len() < before {
            log::info!("Appointment {id} removed");
        } else {
            log::debug!("Appointment {id} not found; nothing removed");
        }
        Ok(())
    }

    pub fn clear_all(&self) -> StorageResult<()> {
        self.persist(&[])?;
        log::info!("All appointments cleared");
        Ok(())
    }

    fn persist(&self, appointments: &[Appointment]) -> StorageResult<()> {
        let serialized =
            serde_json::to_string(appointments).map_err(|source| StorageError::Serialize {
                key: APPOINTMENTS_KEY.to_string(),
                source,
            })?;
        self.storage.set(APPOINTMENTS_KEY, &serialized)
    }
}
