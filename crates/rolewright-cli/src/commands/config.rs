//! Configuration management commands.

use anyhow::Result;

use crate::style::{colors::SemanticStyle, print_labeled, print_spacer};

/// Show current configuration.
pub fn show(project: &str, format: &str) -> Result<()> {
    let config = super::load_project(project)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&config)?),
        "toml" => println!("{}", toml::to_string_pretty(&config)?),
        "text" => {
            println!("{}", "rolewright configuration".header());
            print_spacer();

            println!("Project:");
            print_labeled("Name", &config.project.name);
            print_spacer();

            println!("Policies:");
            print_labeled("Directory", &config.policies.directory.display().to_string());
            print_spacer();

            println!("Tags:");
            print_labeled("Environment", &config.tags.environment);
            print_labeled("Project", &config.tags.project);
            print_spacer();

            println!("Roles:");
            if config.roles.is_empty() {
                println!("  {}", "(none)".muted());
            }
            for role in &config.roles {
                let files = if role.policy_files.is_empty() {
                    "-".to_string()
                } else {
                    role.policy_files.join(", ")
                };
                print_labeled(&role.effective_name(), &format!("{} [{files}]", role.role_type));
            }
        }
        other => anyhow::bail!("Unknown format '{other}' (expected text, json or toml)"),
    }

    Ok(())
}
