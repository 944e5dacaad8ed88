//! Permission evaluation.
//!
//! Selects the grant for the actor's role and sub-role, then checks whether
//! that grant covers the requested resource and action. No grant, or a
//! grant that does not cover the request, is a denial. Evaluation is pure:
//! it performs no I/O, keeps no state and cannot fail.

use std::sync::LazyLock;

use campus_types::Actor;

use crate::policy::{Effect, PolicyTable};

static STANDARD_TABLE: LazyLock<PolicyTable> = LazyLock::new(PolicyTable::standard);

/// Returns the shared campus decision table.
pub fn standard_table() -> &'static PolicyTable {
    &STANDARD_TABLE
}

// ============================================================================
// Decision
// ============================================================================

/// The result of evaluating a request against a policy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub effect: Effect,
    /// Name of the grant selected for the actor, or `None` when the actor's
    /// role/sub-role has no entry. A selected grant that does not cover the
    /// request still yields `Deny`.
    pub matched_rule: Option<String>,
    /// Human-readable explanation of why this decision was made.
    pub reason: String,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        self.effect == Effect::Allow
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Evaluates `action` on `resource` for `actor` against `table`.
pub fn evaluate(table: &PolicyTable, actor: &Actor, resource: &str, action: &str) -> Decision {
    let Some(grant) = table.grant_for(actor) else {
        return Decision {
            effect: Effect::default(),
            matched_rule: None,
            reason: format!("No policy entry for {actor}; denying by default"),
        };
    };

    if grant.permits(resource, action) {
        Decision {
            effect: Effect::Allow,
            matched_rule: Some(grant.name.clone()),
            reason: format!("Rule '{}' grants {action} on {resource}", grant.name),
        }
    } else {
        Decision {
            effect: Effect::Deny,
            matched_rule: Some(grant.name.clone()),
            reason: format!("Rule '{}' does not cover {action} on {resource}", grant.name),
        }
    }
}

/// Returns whether `actor` may perform `action` on `resource` under the
/// standard campus policy.
///
/// # Examples
///
/// ```
/// use campus_rbac::has_permission;
/// use campus_types::{Actor, SubRole};
///
/// let finance = Actor::with_sub_role(SubRole::FinanceAdmin);
/// assert!(has_permission(&finance, "enrollments", "approve"));
/// assert!(!has_permission(&finance, "enrollments", "delete"));
/// ```
pub fn has_permission(actor: &Actor, resource: &str, action: &str) -> bool {
    evaluate(standard_table(), actor, resource, action).is_allowed()
}
