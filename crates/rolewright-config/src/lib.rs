//! Configuration management for rolewright
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (ROLEWRIGHT_* prefix, highest precedence)
//! 2. rolewright.local.toml (gitignored, local overrides)
//! 3. rolewright.toml (git-tracked, project config)
//! 4. ~/.config/rolewright/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rolewright::{DefaultTags, RoleConfiguration, RoleManager, SecretsConfig};
use serde::{Deserialize, Serialize};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main rolewright configuration
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RolewrightConfig {
    pub project: ProjectConfig,
    pub policies: PolicyConfig,
    pub tags: DefaultTags,
    pub roles: Vec<RoleConfiguration>,
    /// Application secrets, usually kept in `rolewright.local.toml`.
    /// Never written back out.
    #[serde(skip_serializing)]
    pub secrets: Option<SecretsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "rolewright-project".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Directory policy file names are resolved against.
    pub directory: PathBuf,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("policies"),
        }
    }
}

impl RolewrightConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Parse a single TOML file without merging other sources
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Starter configuration written by `rolewright init`
    pub fn starter(project_name: impl Into<String>) -> Self {
        Self {
            project: ProjectConfig {
                name: project_name.into(),
            },
            roles: vec![
                RoleConfiguration::new(rolewright::RoleType::Lambda)
                    .with_policy_file("lambda_policy.json")
                    .with_role_name("MyLambdaRole")
                    .with_vpc_access(true),
            ],
            ..Default::default()
        }
    }

    /// Resolve relative paths to absolute
    pub fn resolve_paths(&mut self, base_dir: impl AsRef<Path>) {
        let base = base_dir.as_ref();

        if self.policies.directory.is_relative() {
            self.policies.directory = base.join(&self.policies.directory);
        }
    }

    /// Check cross-role constraints that single-role validation cannot see
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for role in &self.roles {
            let name = role.effective_name();
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateRoleName(name));
            }
        }
        Ok(())
    }

    /// Role manager reading from the configured policy directory
    pub fn role_manager(&self) -> RoleManager {
        RoleManager::new(&self.policies.directory).with_default_tags(self.tags.clone())
    }
}
