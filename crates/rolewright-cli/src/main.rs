//! rolewright command-line interface.
//!
//! Validates policy files and builds the IAM role descriptions declared in a
//! project's `rolewright.toml`.
//!
//! # Quick Start
//!
//! ```bash
//! # Create rolewright.toml and a policies/ directory
//! rolewright init ./infra
//!
//! # Check every configured role's policy files
//! rolewright validate --project ./infra
//!
//! # Print the built roles as JSON for the provisioning step
//! rolewright build --project ./infra --format json
//! ```

mod commands;
mod style;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// rolewright - validate and build IAM role definitions.
#[derive(Parser)]
#[command(name = "rolewright")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Initialize a new project with a starter configuration.
    Init {
        /// Project directory to initialize.
        #[arg(default_value = ".")]
        path: String,
    },

    /// Validate the secrets table and the policy files of every configured role.
    Validate {
        /// Project directory containing rolewright.toml.
        #[arg(short, long, default_value = ".")]
        project: String,
    },

    /// Build configured roles and print them.
    Build {
        /// Project directory containing rolewright.toml.
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Build only the role with this name.
        #[arg(short, long)]
        role: Option<String>,

        /// Output format (text, json).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Project directory containing rolewright.toml.
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Init { path } => commands::init::run(&path),
        Commands::Validate { project } => commands::validate::run(&project),
        Commands::Build {
            project,
            role,
            format,
        } => commands::build::run(&project, role.as_deref(), &format),
        Commands::Config(ConfigCommands::Show { project, format }) => {
            commands::config::show(&project, &format)
        }
    }
}
