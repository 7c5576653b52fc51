//! Application secret validation.
//!
//! Collects the values that the ingestion functions read at runtime
//! (authorizer token, database coordinates, bucket name) into a single
//! secret bundle, refusing to build one when any value is missing.

use std::fmt;

use serde::Deserialize;
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Result, RoleError};

/// Name of the secret the bundle is stored under.
pub const SECRET_NAME: &str = "unique-secrets-name";

/// Minimum authorizer token length, in characters.
pub const MIN_AUTH_TOKEN_LEN: usize = 10;

/// Raw secret inputs. Every field is required.
///
/// Inputs are wiped when the config is dropped, like the bundle built from it.
#[derive(Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretsConfig {
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub db_username: Option<String>,
    #[serde(default)]
    pub db_password: Option<String>,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(default)]
    pub db_endpoint: Option<String>,
    #[serde(default)]
    pub bucket_name: Option<String>,
}

impl fmt::Debug for SecretsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretsConfig")
            .field("db_name", &self.db_name)
            .field("db_endpoint", &self.db_endpoint)
            .field("bucket_name", &self.bucket_name)
            .finish_non_exhaustive()
    }
}

impl SecretsConfig {
    /// Validates the inputs and assembles the secret bundle.
    ///
    /// Properties are checked in declaration order; the first absent or
    /// empty one is reported.
    pub fn validate(&self) -> Result<SecretBundle> {
        let required: [(&'static str, &'static str, &Option<String>); 6] = [
            ("authToken", "AUTHORIZER_TOKEN", &self.auth_token),
            ("dbUsername", "DB_USERNAME", &self.db_username),
            ("dbPassword", "DB_PASSWORD", &self.db_password),
            ("dbName", "DB_NAME", &self.db_name),
            ("dbEndpoint", "DB_ENDPOINT", &self.db_endpoint),
            ("bucketName", "BUCKET_NAME", &self.bucket_name),
        ];

        let mut values = Vec::with_capacity(required.len());
        for (property, key, value) in required {
            match value.as_deref() {
                Some(v) if !v.is_empty() => values.push((key, Zeroizing::new(v.to_string()))),
                _ => {
                    warn!(property, "Missing required secret property");
                    return Err(RoleError::MissingRequiredProperty(property));
                }
            }
        }

        let token_len = self.auth_token.as_deref().map_or(0, |t| t.chars().count());
        if token_len < MIN_AUTH_TOKEN_LEN {
            return Err(RoleError::AuthTokenTooShort {
                min: MIN_AUTH_TOKEN_LEN,
                actual: token_len,
            });
        }

        Ok(SecretBundle {
            name: SECRET_NAME.to_string(),
            values,
        })
    }
}

/// Validated secret key/value pairs. Values are wiped from memory on drop.
pub struct SecretBundle {
    name: String,
    values: Vec<(&'static str, Zeroizing<String>)>,
}

impl SecretBundle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value stored under `key` (e.g. `DB_ENDPOINT`).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Secret keys in storage order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(k, _)| *k)
    }
}

impl fmt::Debug for SecretBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBundle")
            .field("name", &self.name)
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
