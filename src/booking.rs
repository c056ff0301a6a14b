use crate::{
    appointments::AppointmentStore,
    calendar::{allowed_times, is_allowed_date, is_allowed_time},
    error::BookingError,
    models::{find_barber, find_service, AppointmentDraft, BarberSnapshot, BARBERS, SERVICES},
};

/// What the client sees after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub appointment_id: String,
    pub date: String,
    pub time: String,
    pub barber_name: String,
}

impl BookingConfirmation {
    pub fn message(&self) -> String {
        format!(
            "Appointment booked for {} at {} with {}.",
            self.date, self.time, self.barber_name
        )
    }
}

/// Draft state of the scheduling form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub barber_id: String,
    pub notes: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            date: String::new(),
            time: allowed_times().into_iter().next().unwrap_or_default(),
            service: SERVICES.first().map(|s| s.id.to_string()).unwrap_or_default(),
            barber_id: BARBERS.first().map(|b| b.id.to_string()).unwrap_or_default(),
            notes: String::new(),
        }
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message to show under the date input while editing.
    pub fn date_error(&self) -> Option<BookingError> {
        (!self.date.trim().is_empty() && !is_allowed_date(&self.date))
            .then_some(BookingError::DateNotAllowed)
    }

    /// Message to show under the time input while editing.
    pub fn time_error(&self) -> Option<BookingError> {
        (!self.time.trim().is_empty() && !is_allowed_time(&self.time))
            .then_some(BookingError::TimeNotAllowed)
    }

    /// Whether the submit button should be enabled.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Every problem with the current draft, in form order.
    pub fn validate(&self) -> Vec<BookingError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(BookingError::MissingName);
        }
        if self.phone.trim().is_empty() {
            errors.push(BookingError::MissingPhone);
        }
        if self.date.trim().is_empty() {
            errors.push(BookingError::MissingDate);
        } else if !is_allowed_date(&self.date) {
            errors.push(BookingError::DateNotAllowed);
        }
        if self.time.trim().is_empty() {
            errors.push(BookingError::MissingTime);
        } else if !is_allowed_time(&self.time) {
            errors.push(BookingError::TimeNotAllowed);
        }
        if find_service(&self.service).is_none() {
            errors.push(BookingError::UnknownService(self.service.clone()));
        }
        if find_barber(&self.barber_id).is_none() {
            errors.push(BookingError::UnknownBarber(self.barber_id.clone()));
        }
        errors
    }

    /// Validates and persists the draft. On failure nothing is written and
    /// every field error is returned; on success the form is reset.
    pub fn submit(
        &mut self,
        store: &AppointmentStore,
    ) -> Result<BookingConfirmation, Vec<BookingError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            log::debug!("Booking rejected: {} field error(s)", errors.len());
            return Err(errors);
        }

        let barber = match find_barber(&self.barber_id) {
            Some(barber) => BarberSnapshot::from(barber),
            None => return Err(vec![BookingError::UnknownBarber(self.barber_id.clone())]),
        };
        let notes = self.notes.trim();
        let draft = AppointmentDraft {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            service: self.service.clone(),
            barber,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        };

        let saved = store
            .save(draft)
            .map_err(|err| vec![BookingError::from(err)])?;

        *self = Self::default();
        Ok(BookingConfirmation {
            appointment_id: saved.id,
            date: saved.date,
            time: saved.time,
            barber_name: saved.barber.name,
        })
    }
}
