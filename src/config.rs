use std::env;
use std::path::PathBuf;

use crate::auth::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER};

pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub admin_user: String,
    pub admin_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            admin_user: DEFAULT_ADMIN_USER.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl Config {
    /// Reads `BOOKING_DATA_DIR`, `ADMIN_USER` and `ADMIN_PASSWORD`, keeping
    /// the defaults for anything unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let config = Self {
            data_dir: var("BOOKING_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            admin_user: var("ADMIN_USER").unwrap_or(defaults.admin_user),
            admin_password: var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
        };

        if config.admin_password == DEFAULT_ADMIN_PASSWORD {
            log::warn!(
                "ADMIN_PASSWORD not set. Using default password '{DEFAULT_ADMIN_PASSWORD}'. Set ADMIN_PASSWORD in production."
            );
        }
        config
    }
}
