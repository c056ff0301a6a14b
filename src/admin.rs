use crate::{appointments::AppointmentStore, error::StorageResult, models::Appointment};

pub const CLEAR_ALL_PROMPT: &str = "Are you sure you want to remove every appointment?";

/// Appointment list as shown on the admin page. Access control happens in
/// [`crate::navigation::guard`] before a panel is opened.
pub struct AdminPanel<'a> {
    store: &'a AppointmentStore,
    appointments: Vec<Appointment>,
    date_filter: Option<String>,
}

impl<'a> AdminPanel<'a> {
    pub fn open(store: &'a AppointmentStore) -> Self {
        Self {
            store,
            appointments: store.list(),
            date_filter: None,
        }
    }

    pub fn refresh(&mut self) {
        self.appointments = self.store.list();
    }

    pub fn date_filter(&self) -> Option<&str> {
        self.date_filter.as_deref()
    }

    /// An empty string clears the filter.
    pub fn set_date_filter(&mut self, date: &str) {
        let date = date.trim();
        self.date_filter = (!date.is_empty()).then(|| date.to_string());
    }

    pub fn clear_date_filter(&mut self) {
        self.date_filter = None;
    }

    /// Appointments matching the date filter exactly, in booking order.
    pub fn list(&self) -> Vec<&Appointment> {
        match self.date_filter.as_deref() {
            Some(date) => self
                .appointments
                .iter()
                .filter(|appointment| appointment.date == date)
                .collect(),
            None => self.appointments.iter().collect(),
        }
    }

    pub fn remove(&mut self, id: &str) -> StorageResult<()> {
        self.store.remove(id)?;
        self.refresh();
        Ok(())
    }

    /// `confirm` is asked with [`CLEAR_ALL_PROMPT`]; nothing happens unless it
    /// returns true. Returns whether the list was cleared.
    pub fn clear_all<F>(&mut self, confirm: F) -> StorageResult<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CLEAR_ALL_PROMPT) {
            log::debug!("Clear all cancelled");
            return Ok(false);
        }
        self.store.clear_all()?;
        self.appointments.clear();
        Ok(true)
    }
}
