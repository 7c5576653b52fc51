//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use rolewright_config::{Paths, RolewrightConfig};

pub mod build;
pub mod config;
pub mod init;
pub mod validate;
pub mod version;

/// Loads the merged configuration for an initialized project.
pub(crate) fn load_project(project: &str) -> Result<RolewrightConfig> {
    let project_path = Path::new(project);

    if !Paths::is_initialized(project_path) {
        anyhow::bail!(
            "Project not initialized. Run 'rolewright init' in {} first.",
            project_path.display()
        );
    }

    RolewrightConfig::load_from_dir(project_path).context("Failed to load configuration")
}
