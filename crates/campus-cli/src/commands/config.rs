//! Configuration management commands.

use anyhow::Result;
use campus_config::{CampusConfig, Paths};
use std::path::Path;

use crate::style::{colors::SemanticStyle, print_labeled};

/// Show the merged configuration.
pub fn show(config: &CampusConfig, project: &Path, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        "toml" => {
            println!("{}", config.to_toml()?);
        }
        "text" => print_text(config, project),
        other => anyhow::bail!("Unknown format '{other}' (expected text, toml or json)"),
    }

    Ok(())
}

fn print_text(config: &CampusConfig, project: &Path) {
    println!("{}", "Campus Configuration".header());
    println!("====================\n");

    println!("Project:");
    print_labeled("Name", &config.project.name);
    let project_file = Paths::project_config_file(project);
    let status = if Paths::is_initialized(project) {
        "found"
    } else {
        "not found, using defaults"
    };
    print_labeled(
        "Config file",
        &format!("{} ({status})", project_file.display().code()),
    );
    println!();

    println!("Logging:");
    print_labeled("Filter", &config.logging.filter);
    println!();

    println!("Audit:");
    print_labeled("Enabled", &config.audit.enabled.to_string());
    println!();

    println!("Matrix:");
    print_labeled("Resources", &config.matrix.resources.join(", "));
    print_labeled("Actions", &config.matrix.actions.join(", "));
    println!();

    println!("Routes:");
    if config.routes.is_empty() {
        println!("  {}", "(standard dashboard routes)".muted());
    }
    for rule in &config.routes {
        let access = if rule.public {
            "public".to_string()
        } else if rule.roles.is_empty() {
            "any signed-in user".to_string()
        } else {
            rule.roles
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        print_labeled(&rule.pattern, &access);
    }
}
