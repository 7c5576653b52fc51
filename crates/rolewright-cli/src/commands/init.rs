//! Initialize command - creates a new rolewright project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rolewright_config::{Paths, RolewrightConfig};

use crate::style::{
    colors::SemanticStyle, print_code_example, print_hint, print_labeled, print_spacer,
    print_success,
};

const STARTER_POLICY: &str = r#"{
  "Version": "2012-10-17",
  "Statement": [
    {
      "Sid": "SecretRead",
      "Effect": "Allow",
      "Action": "secretsmanager:GetSecretValue",
      "Resource": "*"
    }
  ]
}
"#;

pub fn run(path: &str) -> Result<()> {
    let project_dir = Path::new(path);

    if Paths::is_initialized(project_dir) {
        anyhow::bail!(
            "Project already initialized in {}. rolewright.toml already exists.",
            project_dir.display()
        );
    }

    let policy_dir = Paths::policy_dir(project_dir);
    fs::create_dir_all(&policy_dir).context("Failed to create policies directory")?;

    let name = project_dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "rolewright-project".to_string());
    let config = RolewrightConfig::starter(name);
    let config_content =
        toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    fs::write(Paths::project_config_file(project_dir), config_content)
        .context("Failed to write rolewright.toml")?;

    let starter_policy = policy_dir.join("lambda_policy.json");
    if !starter_policy.exists() {
        fs::write(&starter_policy, STARTER_POLICY).context("Failed to write starter policy")?;
    }

    let gitignore_path = project_dir.join(".gitignore");
    if !gitignore_path.exists() {
        fs::write(&gitignore_path, "# Local config overrides\nrolewright.local.toml\n")
            .context("Failed to write .gitignore")?;
    }

    print_success("Project initialized");
    print_labeled("Config", "rolewright.toml");
    print_labeled("Policies", "policies/");
    print_spacer();
    println!("{}", "Next steps:".header());
    print_hint("Check the starter role's policy files:");
    print_code_example(&format!("rolewright validate --project {path}"));
    print_hint("Build it:");
    print_code_example(&format!("rolewright build --project {path}"));

    Ok(())
}
