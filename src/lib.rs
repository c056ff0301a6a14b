//! Booking core for a barbershop.
//!
//! Clients fill a [`booking::BookingForm`]; dates must fall on a Monday or
//! Saturday and times between 09:00 and 19:00 ([`calendar`]). Valid requests
//! are stored by the [`appointments::AppointmentStore`]. Administrators log in
//! through the [`session::SessionStore`], pass the [`navigation::guard`], and
//! manage bookings with an [`admin::AdminPanel`].
//!
//! Both stores persist JSON text in a [`storage::KeyValueStore`] under the
//! `appointments` and `auth_state` keys. The login is a local flag, not real
//! authentication.

pub mod admin;
pub mod appointments;
pub mod auth;
pub mod booking;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod session;
pub mod state;
pub mod storage;

pub use admin::AdminPanel;
pub use appointments::AppointmentStore;
pub use booking::{BookingConfirmation, BookingForm};
pub use config::Config;
pub use error::{BookingError, SetupError, StorageError};
pub use models::{Appointment, AppointmentDraft, BarberSnapshot, Role, User};
pub use navigation::{guard, post_login_target, Navigation, Route};
pub use session::{LoginOutcome, Session, SessionStore};
pub use state::AppState;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, SharedStorage};
