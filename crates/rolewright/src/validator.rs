//! Policy file validation.
//!
//! Files are resolved relative to a single policy root and checked in list
//! order. The first failure aborts validation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, RoleError};
use crate::policy::PolicyDocument;

/// Checks that policy files exist and contain valid policy documents.
#[derive(Debug, Clone)]
pub struct PolicyValidator {
    root: PathBuf,
}

impl PolicyValidator {
    /// Creates a validator reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the policy root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path a policy file name resolves to.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// True if `file` stays under the policy root once joined.
    fn is_contained(file: &str) -> bool {
        Path::new(file)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }

    /// Validates every file, returning the parsed documents in input order.
    ///
    /// Read-only. Returns the first error encountered.
    pub fn validate<S: AsRef<str>>(&self, policy_files: &[S]) -> Result<Vec<PolicyDocument>> {
        policy_files
            .iter()
            .map(|file| self.load(file.as_ref()))
            .collect()
    }

    /// Loads and parses a single policy file.
    pub fn load(&self, file: &str) -> Result<PolicyDocument> {
        let path = self.resolve(file);

        if !Self::is_contained(file) {
            warn!(file = %file, "Policy file outside policy root");
            return Err(RoleError::PolicyFileNotFound {
                file: file.to_string(),
                path,
            });
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(file = %file, path = %path.display(), "Policy file not found");
                return Err(RoleError::PolicyFileNotFound {
                    file: file.to_string(),
                    path,
                });
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!(file = %file, "Policy file is not UTF-8");
                return Err(RoleError::PolicyFileMalformed {
                    file: file.to_string(),
                    reason: "file is not valid UTF-8".to_string(),
                });
            }
            Err(e) => {
                warn!(file = %file, error = %e, "Policy file unreadable");
                return Err(RoleError::PolicyFileMalformed {
                    file: file.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let document = PolicyDocument::parse(file, &content).map_err(|reason| {
            warn!(file = %file, reason = %reason, "Policy file malformed");
            RoleError::PolicyFileMalformed {
                file: file.to_string(),
                reason,
            }
        })?;

        debug!(
            file = %file,
            statements = document.statements.len(),
            "Policy file validated"
        );
        Ok(document)
    }
}
