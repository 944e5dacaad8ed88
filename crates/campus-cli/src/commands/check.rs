//! Permission check command.

use anyhow::Result;
use campus_config::CampusConfig;
use campus_rbac::PermissionEnforcer;
use serde_json::json;

use super::actor_from_flags;
use crate::style::{colors::SemanticStyle, print_allowed, print_denied, print_labeled};

pub fn run(
    config: &CampusConfig,
    resource: &str,
    action: &str,
    role: Option<&str>,
    sub_role: Option<&str>,
    json: bool,
) -> Result<()> {
    let actor = actor_from_flags(role, sub_role);
    let enforcer = PermissionEnforcer::standard().with_audit(config.audit.enabled);
    let decision = enforcer.decide(&actor, resource, action);

    if json {
        let out = json!({
            "actor": actor.to_string(),
            "resource": resource,
            "action": action,
            "effect": decision.effect,
            "matched_rule": decision.matched_rule,
            "reason": decision.reason,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if decision.is_allowed() {
        print_allowed("ALLOW");
    } else {
        print_denied("DENY");
    }
    print_labeled("Actor", &actor.to_string());
    print_labeled("Request", &format!("{action} {resource}"));
    print_labeled(
        "Rule",
        &decision
            .matched_rule
            .as_deref()
            .map_or_else(|| "none".muted(), |rule| rule.code()),
    );
    print_labeled("Reason", &decision.reason);

    Ok(())
}
