//! Admin Account Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Admin account
///
/// The password hash is never serialized back out; [`AdminRecord`] is the
/// write-side shape used when creating the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Write-side admin shape (includes the password hash)
#[derive(Debug, Clone, Serialize)]
pub struct AdminRecord {
    pub name: String,
    pub email: String,
    pub hash_pass: String,
    pub created_at: i64,
}

/// Public admin projection for API responses
#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Register admin payload
#[derive(Debug, Clone, Deserialize)]
pub struct AdminRegister {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login admin payload
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLogin {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Admin {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
