//! Permission enforcement with audit logging.
//!
//! Wraps a [`PolicyTable`] for callers that gate UI actions: a single check
//! either passes or yields an [`EnforcementError`], and batch helpers
//! compute which actions or resources an actor should be shown.

use campus_types::Actor;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::evaluator::{Decision, evaluate};
use crate::permissions::Action;
use crate::policy::PolicyTable;

/// Error type for policy enforcement.
#[derive(Debug, Error)]
pub enum EnforcementError {
    /// Access denied by policy.
    #[error("Access denied: {reason}")]
    AccessDenied { reason: String },

    /// Route not reachable for the actor.
    #[error("Route '{path}' denied; redirect to {redirect}")]
    RouteDenied { path: String, redirect: String },
}

/// Result type for enforcement operations.
pub type Result<T> = std::result::Result<T, EnforcementError>;

/// Policy enforcement engine.
pub struct PermissionEnforcer {
    table: PolicyTable,

    /// Whether to log access attempts.
    audit_enabled: bool,
}

impl PermissionEnforcer {
    pub fn new(table: PolicyTable) -> Self {
        Self {
            table,
            audit_enabled: true,
        }
    }

    /// Enforcer over the standard campus table.
    pub fn standard() -> Self {
        Self::new(PolicyTable::standard())
    }

    /// Disables audit logging (for testing).
    pub fn without_audit(mut self) -> Self {
        self.audit_enabled = false;
        self
    }

    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    /// Evaluates a request and records it in the audit log.
    pub fn decide(&self, actor: &Actor, resource: &str, action: &str) -> Decision {
        let decision = evaluate(&self.table, actor, resource, action);

        if self.audit_enabled {
            if decision.is_allowed() {
                info!(
                    actor = %actor,
                    role = ?actor.role,
                    sub_role = ?actor.sub_role,
                    resource = %resource,
                    action = %action,
                    rule = ?decision.matched_rule,
                    "Permission granted"
                );
            } else {
                warn!(
                    actor = %actor,
                    role = ?actor.role,
                    sub_role = ?actor.sub_role,
                    resource = %resource,
                    action = %action,
                    rule = ?decision.matched_rule,
                    destructive = Action::is_destructive_name(action),
                    "Permission denied"
                );
            }
        }

        decision
    }

    /// Returns `Ok(())` if access is allowed, `Err` otherwise.
    pub fn enforce(&self, actor: &Actor, resource: &str, action: &str) -> Result<()> {
        let decision = self.decide(actor, resource, action);

        if decision.is_allowed() {
            Ok(())
        } else {
            Err(EnforcementError::AccessDenied {
                reason: decision.reason,
            })
        }
    }

    /// Filters `candidates` down to the actions `actor` may perform on
    /// `resource`, preserving order.
    ///
    /// Used to decide which controls to render, so individual checks are not
    /// audited.
    pub fn permitted_actions<'c>(
        &self,
        actor: &Actor,
        resource: &str,
        candidates: &[&'c str],
    ) -> Vec<&'c str> {
        let permitted: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|action| evaluate(&self.table, actor, resource, action).is_allowed())
            .collect();

        debug!(
            actor = %actor,
            resource = %resource,
            permitted = ?permitted,
            "Computed permitted actions"
        );

        permitted
    }

    /// Filters `resources` down to those `actor` may view.
    pub fn visible_resources<'r>(&self, actor: &Actor, resources: &[&'r str]) -> Vec<&'r str> {
        let view = Action::View.as_str();
        resources
            .iter()
            .copied()
            .filter(|resource| evaluate(&self.table, actor, resource, view).is_allowed())
            .collect()
    }
}

impl Default for PermissionEnforcer {
    fn default() -> Self {
        Self::standard()
    }
}
