//! Well-known file locations

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const PROJECT_FILE: &str = "rolewright.toml";
const LOCAL_FILE: &str = "rolewright.local.toml";
const POLICY_DIR: &str = "policies";

/// User-level (XDG) and project-level paths
pub struct Paths {
    dirs: Option<ProjectDirs>,
}

impl Paths {
    pub fn new() -> Self {
        Self {
            dirs: ProjectDirs::from("dev", "Rolewright", "rolewright"),
        }
    }

    /// `~/.config/rolewright/config.toml` on Linux; platform equivalent elsewhere
    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        let dirs = self.dirs.as_ref().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(PROJECT_FILE)
    }

    /// Untracked overrides layered over the project file
    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(LOCAL_FILE)
    }

    pub fn policy_dir(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(POLICY_DIR)
    }

    /// A project is initialized once its `rolewright.toml` exists
    pub fn is_initialized(project_dir: impl AsRef<Path>) -> bool {
        Self::project_config_file(project_dir).is_file()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_user_config_file_names_app() {
        // Home-less sandboxes yield NoHomeDirectory instead
        if let Ok(file) = Paths::new().user_config_file() {
            assert!(file.ends_with("config.toml"));
            assert!(file.to_string_lossy().contains("rolewright"));
        }
    }

    #[test]
    fn test_project_layout() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path();

        assert_eq!(Paths::project_config_file(root), root.join("rolewright.toml"));
        assert_eq!(Paths::local_config_file(root), root.join("rolewright.local.toml"));
        assert_eq!(Paths::policy_dir(root), root.join("policies"));
    }

    #[test]
    fn test_initialized_requires_config_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path();
        assert!(!Paths::is_initialized(root));

        // A directory with the config file's name does not count
        std::fs::create_dir(root.join("rolewright.toml")).unwrap();
        assert!(!Paths::is_initialized(root));

        std::fs::remove_dir(root.join("rolewright.toml")).unwrap();
        std::fs::write(root.join("rolewright.toml"), "[project]\nname = \"x\"\n").unwrap();
        assert!(Paths::is_initialized(root));
    }
}
