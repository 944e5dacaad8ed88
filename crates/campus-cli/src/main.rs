//! Campus access CLI.
//!
//! Inspects the role-based access rules of the campus dashboards.
//!
//! # Quick Start
//!
//! ```bash
//! # May a finance admin approve an enrollment?
//! campus check enrollments approve --role admin --sub-role finance_admin
//!
//! # Everything every profile may do
//! campus matrix
//!
//! # Where does a student land when opening the admin dashboard?
//! campus route /admin --role student
//! ```

mod commands;
mod style;

use anyhow::{Context, Result};
use campus_config::CampusConfig;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Campus - role-based access rules for the school dashboards.
#[derive(Parser)]
#[command(name = "campus")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory holding campus.toml.
    #[arg(short, long, global = true, default_value = ".")]
    project: String,

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

    /// Decide whether a profile may perform an action on a resource.
    Check {
        /// Resource name (e.g. courses, enrollments).
        resource: String,

        /// Action name (view, create, edit, approve, delete).
        action: String,

        /// Role of the profile (admin, professor, student).
        #[arg(short, long)]
        role: Option<String>,

        /// Sub-role of the profile (e.g. finance_admin, guest_lecturer).
        #[arg(short, long)]
        sub_role: Option<String>,

        /// Print the decision as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the permission matrix of every profile.
    Matrix {
        /// Only show profiles of this role.
        #[arg(short, long)]
        role: Option<String>,

        /// Print the matrix as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Decide where a profile ends up when navigating to a path.
    Route {
        /// Path being navigated to (e.g. /admin/finance).
        path: String,

        /// Role of the profile. Omit for a visitor without a session.
        #[arg(short, long)]
        role: Option<String>,

        /// Sub-role of the profile.
        #[arg(short, long)]
        sub_role: Option<String>,
    },

    /// Check that senior sub-roles hold every permission of junior ones.
    Hierarchy,

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Output format (text, toml, json).
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn init_logging(config: &CampusConfig) {
    // RUST_LOG wins over the configured filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    style::set_no_color(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    let config = CampusConfig::load_from_dir(&cli.project)
        .with_context(|| format!("Failed to load configuration from {}", cli.project))?;

    init_logging(&config);

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Check {
            resource,
            action,
            role,
            sub_role,
            json,
        } => commands::check::run(
            &config,
            &resource,
            &action,
            role.as_deref(),
            sub_role.as_deref(),
            json,
        ),
        Commands::Matrix { role, json } => commands::matrix::run(&config, role.as_deref(), json),
        Commands::Route {
            path,
            role,
            sub_role,
        } => commands::route::run(&config, &path, role.as_deref(), sub_role.as_deref()),
        Commands::Hierarchy => commands::hierarchy::run(&config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => {
                commands::config::show(&config, Path::new(&cli.project), &format)
            }
        },
    }
}
