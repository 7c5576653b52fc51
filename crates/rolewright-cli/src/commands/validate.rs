//! Validate command - checks policy files and secrets without building roles.

use anyhow::{Context, Result};

use crate::style::{colors::SemanticStyle, print_error, print_success};

/// Reports every role, then fails with a count if any role was invalid.
pub fn run(project: &str) -> Result<()> {
    let config = super::load_project(project)?;
    config.validate()?;

    if let Some(secrets) = &config.secrets {
        let bundle = secrets.validate().context("Invalid [secrets] section")?;
        print_success(&format!(
            "secrets: {} value(s) for {}",
            bundle.keys().count(),
            bundle.name()
        ));
    }

    if config.roles.is_empty() {
        println!("{}", "No roles configured.".warning());
        return Ok(());
    }

    let manager = config.role_manager();
    let mut failed = 0;
    for role in &config.roles {
        let name = role.effective_name();
        match manager.validator().validate(&role.policy_files) {
            Ok(documents) => {
                let statements: usize = documents.iter().map(|d| d.statements.len()).sum();
                print_success(&format!(
                    "{name}: {} policy file(s), {statements} statement(s)",
                    documents.len()
                ));
            }
            Err(e) => {
                print_error(&format!("{name}: {e}"));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} role(s) failed validation", config.roles.len());
    }
    Ok(())
}
