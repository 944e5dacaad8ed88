//! Configuration management for the campus access layer
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (CAMPUS_* prefix, highest precedence)
//! 2. campus.local.toml (gitignored, local overrides)
//! 3. campus.toml (git-tracked, project config)
//! 4. ~/.config/campus/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use anyhow::Result;
use campus_rbac::permissions::KNOWN_RESOURCES;
use campus_rbac::{Action, RouteGuard, RouteRule};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main campus configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusConfig {
    pub project: ProjectConfig,
    pub logging: LoggingConfig,
    pub audit: AuditConfig,
    pub matrix: MatrixConfig,
    /// Route rules replacing the standard guard. Empty keeps the standard.
    pub routes: Vec<RouteRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "campus".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub enabled: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Universe of resources and actions the matrix and hierarchy reports range over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub resources: Vec<String>,
    pub actions: Vec<String>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            resources: KNOWN_RESOURCES.iter().map(ToString::to_string).collect(),
            actions: Action::ALL.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CampusConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Reject configurations the reports and route guard cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matrix.resources.is_empty() {
            return Err(ConfigError::ValidationError(
                "matrix.resources must not be empty".to_string(),
            ));
        }
        if self.matrix.actions.is_empty() {
            return Err(ConfigError::ValidationError(
                "matrix.actions must not be empty".to_string(),
            ));
        }
        if let Some(index) = self.routes.iter().position(|r| r.pattern.is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "routes[{index}].pattern must not be empty"
            )));
        }
        Ok(())
    }

    /// Route guard described by this configuration
    pub fn route_guard(&self) -> RouteGuard {
        if self.routes.is_empty() {
            RouteGuard::standard()
        } else {
            RouteGuard::new(self.routes.clone())
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_types::{Actor, Role};

    #[test]
    fn test_default_config() {
        let config = CampusConfig::default();
        assert_eq!(config.logging.filter, "info");
        assert!(config.audit.enabled);
        assert_eq!(config.matrix.resources.len(), KNOWN_RESOURCES.len());
        assert_eq!(
            config.matrix.actions,
            vec!["view", "create", "edit", "approve", "delete"]
        );
        assert!(config.routes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_universe() {
        let mut config = CampusConfig::default();
        config.matrix.actions.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(msg)) if msg.contains("matrix.actions")
        ));
    }

    #[test]
    fn test_validation_rejects_empty_route_pattern() {
        let config = CampusConfig {
            routes: vec![
                RouteRule::public("/login"),
                RouteRule::for_roles("", [Role::Admin]),
            ],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("routes[1]"));
    }

    #[test]
    fn test_route_guard_falls_back_to_standard() {
        let config = CampusConfig::default();
        assert_eq!(config.route_guard(), RouteGuard::standard());

        let config = CampusConfig {
            routes: vec![RouteRule::authenticated("/*")],
            ..Default::default()
        };
        let guard = config.route_guard();
        assert!(guard.check(&Actor::student(), "/admin").is_allowed());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CampusConfig {
            routes: vec![RouteRule::for_roles("/finance/*", [Role::Admin])],
            ..Default::default()
        };
        let rendered = config.to_toml().unwrap();
        let parsed: CampusConfig = toml::from_str(&rendered).unwrap();

        assert_eq!(parsed.routes, config.routes);
        assert_eq!(parsed.matrix.resources, config.matrix.resources);
    }
}
