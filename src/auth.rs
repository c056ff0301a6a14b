use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::models::Role;

pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Maps a credential pair to a role. `None` means the login is refused.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Option<Role>;
}

/// One reserved admin account; every other non-empty pair is let in as a
/// client. Placeholder only: there is no user directory behind it.
pub struct StaticCredentials {
    admin_username: String,
    admin_password_hash: String,
}

impl StaticCredentials {
    pub fn new(admin_username: &str, admin_password: &str) -> Result<Self, password_hash::Error> {
        Ok(Self {
            admin_username: admin_username.to_string(),
            admin_password_hash: hash_password(admin_password)?,
        })
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Role> {
        if username.is_empty() || password.is_empty() {
            return None;
        }
        if username == self.admin_username && verify_password(password, &self.admin_password_hash) {
            return Some(Role::Admin);
        }
        Some(Role::Client)
    }
}

pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(hash) => Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok(),
        Err(_) => false,
    }
}
