//! Error types for role construction.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while validating configuration or building a role.
///
/// Every variant is a construction-time failure: no role handle is produced
/// when one of these is returned.
#[derive(Debug, Error)]
pub enum RoleError {
    /// A referenced policy file does not exist under the policy root.
    ///
    /// Names that would leave the policy root (`..`, absolute paths) are
    /// reported this way too.
    #[error("Policy file {file} not found at path: {}", path.display())]
    PolicyFileNotFound { file: String, path: PathBuf },

    /// A policy file exists but is not a valid policy document, including
    /// entries that cannot be read as text (directories, denied permissions).
    #[error("Invalid JSON format in policy file {file}: {reason}")]
    PolicyFileMalformed { file: String, reason: String },

    /// The role type tag is outside the supported set.
    #[error("Invalid role type '{0}' (expected one of: lambda, rds, authorizer, composite)")]
    InvalidRoleType(String),

    /// A required configuration property was absent or empty.
    #[error("Missing required property: {0}")]
    MissingRequiredProperty(&'static str),

    /// The authorizer token does not meet the minimum length.
    #[error("Authorization token is too short ({actual} characters, minimum {min})")]
    AuthTokenTooShort { min: usize, actual: usize },
}

/// Result type for role operations.
pub type Result<T> = std::result::Result<T, RoleError>;
