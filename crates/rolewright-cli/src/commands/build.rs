//! Build command - builds configured roles and prints them.

use anyhow::{Context, Result};
use rolewright::RoleHandle;

use crate::style::{colors::SemanticStyle, info_table, print_spacer, statement_table, tag_table};

pub fn run(project: &str, role: Option<&str>, format: &str) -> Result<()> {
    let config = super::load_project(project)?;
    config.validate()?;

    let selected: Vec<_> = match role {
        Some(name) => {
            let matched: Vec<_> = config
                .roles
                .iter()
                .filter(|r| r.effective_name() == name)
                .cloned()
                .collect();
            if matched.is_empty() {
                anyhow::bail!("No role named '{name}' in configuration");
            }
            matched
        }
        None => config.roles.clone(),
    };

    let roles = config
        .role_manager()
        .build_all(&selected)
        .context("Failed to build roles")?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&roles)?),
        "text" => print_roles(&roles),
        other => anyhow::bail!("Unknown format '{other}' (expected text or json)"),
    }

    Ok(())
}

fn print_roles(roles: &[RoleHandle]) {
    if roles.is_empty() {
        println!("{}", "No roles configured.".muted());
        return;
    }

    for role in roles {
        println!("{}", role.name().header());
        let role_type = role.role_type().to_string();
        let statements = role.statements().len().to_string();
        println!(
            "{}",
            info_table(&[
                ("Type", role_type.as_str()),
                ("Trusted service", role.trusted_service().unwrap_or("-")),
                ("Statements", statements.as_str()),
            ])
        );
        if !role.statements().is_empty() {
            println!("{}", statement_table(role.statements()));
        }
        println!("{}", tag_table(role.tags()));
        print_spacer();
    }
}
