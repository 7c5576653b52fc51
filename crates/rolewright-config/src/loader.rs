//! Configuration loader with multi-source merging

use crate::{Paths, RolewrightConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "ROLEWRIGHT".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "ROLEWRIGHT")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/rolewright/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Config files in merge order (later files override earlier ones)
    pub fn file_layers(&self) -> Vec<PathBuf> {
        let mut layers = Vec::with_capacity(3);
        if self.include_user_config {
            if let Ok(user) = Paths::new().user_config_file() {
                layers.push(user);
            }
        }
        layers.push(Paths::project_config_file(&self.project_dir));
        layers.push(Paths::local_config_file(&self.project_dir));
        layers
    }

    /// Merge defaults, existing file layers, and `<PREFIX>_*` environment variables
    pub fn load(self) -> Result<RolewrightConfig> {
        let defaults = config::Config::try_from(&RolewrightConfig::default())
            .context("Failed to encode built-in defaults")?;

        let builder = self
            .file_layers()
            .into_iter()
            .filter(|layer| layer.exists())
            .fold(config::Config::builder().add_source(defaults), |builder, layer| {
                debug!(path = %layer.display(), "Merging config layer");
                builder.add_source(config::File::from(layer).format(config::FileFormat::Toml))
            })
            .add_source(
                config::Environment::with_prefix(&self.env_prefix)
                    .separator("_")
                    .try_parsing(true),
            );

        let mut merged: RolewrightConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        merged.resolve_paths(&self.project_dir);

        Ok(merged)
    }

    /// Like [`load`](Self::load), falling back to resolved defaults on error
    pub fn load_or_default(self) -> RolewrightConfig {
        let project_dir = self.project_dir.clone();
        self.load().unwrap_or_else(|e| {
            warn!(error = %e, "Using default configuration");
            let mut fallback = RolewrightConfig::default();
            fallback.resolve_paths(project_dir);
            fallback
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
