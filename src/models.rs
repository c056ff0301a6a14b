use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CLIENT: &str = "client";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    // Older saved sessions spell it the Portuguese way.
    #[serde(alias = "cliente")]
    Client,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Client => ROLE_CLIENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Barber {
    pub id: &'static str,
    pub name: &'static str,
}

/// Copy of a barber taken at booking time. Stored appointments keep this even
/// if the roster changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberSnapshot {
    pub id: String,
    pub name: String,
}

impl From<&Barber> for BarberSnapshot {
    fn from(barber: &Barber) -> Self {
        Self {
            id: barber.id.to_string(),
            name: barber.name.to_string(),
        }
    }
}

pub const SERVICES: &[Service] = &[
    Service { id: "corte", name: "Corte", price: 35 },
    Service { id: "corte simples", name: "Corte Simples", price: 20 },
    Service { id: "barba", name: "Barba", price: 20 },
    Service { id: "sobrancelha", name: "Sobrancelha", price: 15 },
    Service { id: "combo1", name: "Corte + Barba", price: 50 },
    Service { id: "combo2", name: "Corte + Barba + Sobrancelha", price: 55 },
];

pub const BARBERS: &[Barber] = &[
    Barber { id: "1", name: "Rafael" },
    Barber { id: "2", name: "Diego" },
    Barber { id: "3", name: "Thiago" },
];

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

pub fn find_barber(id: &str) -> Option<&'static Barber> {
    BARBERS.iter().find(|barber| barber.id == id)
}

/// Fields supplied by the booking form, before an id and timestamp exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub barber: BarberSnapshot,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub barber: BarberSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    pub fn from_draft(id: String, created_at: DateTime<Utc>, draft: AppointmentDraft) -> Self {
        Self {
            id,
            created_at,
            name: draft.name,
            phone: draft.phone,
            date: draft.date,
            time: draft.time,
            service: draft.service,
            barber: draft.barber,
            notes: draft.notes,
        }
    }

    pub fn service_name(&self) -> &str {
        find_service(&self.service).map_or(self.service.as_str(), |service| service.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_client_role_is_accepted() {
        let user: User =
            serde_json::from_str(r#"{"username":"maria","role":"cliente"}"#).expect("parse");
        assert_eq!(user.role, Role::Client);
        let json = serde_json::to_string(&user).expect("serialize");
        assert!(json.contains(r#""role":"client""#));
    }

    #[test]
    fn catalog_lookups() {
        assert_eq!(find_service("combo2").map(|s| s.price), Some(55));
        assert!(find_service("manicure").is_none());
        assert_eq!(find_barber("1").map(|b| b.name), Some("Rafael"));
        assert!(find_barber("99").is_none());
    }

    #[test]
    fn appointment_uses_camel_case_fields() {
        let appointment = Appointment::from_draft(
            "abc".to_string(),
            Utc::now(),
            AppointmentDraft {
                name: "Ana".to_string(),
                phone: "555".to_string(),
                date: "2024-06-03".to_string(),
                time: "09:00".to_string(),
                service: "barba".to_string(),
                barber: BarberSnapshot::from(&BARBERS[0]),
                notes: None,
            },
        );
        let value = serde_json::to_value(&appointment).expect("serialize");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("notes").is_none());
        assert_eq!(value["barber"]["name"], "Rafael");
        assert_eq!(appointment.service_name(), "Barba");
    }
}
