//! Permission matrix command.

use anyhow::{Context, Result};
use campus_config::CampusConfig;
use campus_rbac::PermissionEnforcer;
use campus_types::{Actor, Role};
use serde_json::json;

use crate::style::print_grid;

/// Every profile the policy distinguishes, in role then seniority order.
fn profiles(role: Option<Role>) -> Vec<Actor> {
    Role::ALL
        .into_iter()
        .filter(|r| role.is_none_or(|wanted| wanted == *r))
        .flat_map(|r| {
            let sub_roles = r.sub_roles();
            if sub_roles.is_empty() {
                vec![Actor::new(r, None)]
            } else {
                sub_roles.iter().map(|s| Actor::new(r, Some(*s))).collect()
            }
        })
        .collect()
}

pub fn run(config: &CampusConfig, role: Option<&str>, json: bool) -> Result<()> {
    let role = role
        .map(str::parse::<Role>)
        .transpose()
        .context("Invalid --role")?;

    // The matrix is a listing, not a stream of requests.
    let enforcer = PermissionEnforcer::standard().without_audit();
    let resources: Vec<&str> = config.matrix.resources.iter().map(String::as_str).collect();
    let actions: Vec<&str> = config.matrix.actions.iter().map(String::as_str).collect();
    let actors = profiles(role);

    if json {
        let rows: Vec<_> = actors
            .iter()
            .map(|actor| {
                let permissions: serde_json::Map<String, serde_json::Value> = resources
                    .iter()
                    .map(|resource| {
                        let permitted = enforcer.permitted_actions(actor, resource, &actions);
                        ((*resource).to_string(), json!(permitted))
                    })
                    .collect();
                json!({ "actor": actor.to_string(), "permissions": permissions })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut columns = vec!["profile".to_string()];
    columns.extend(resources.iter().map(ToString::to_string));

    let rows: Vec<Vec<String>> = actors
        .iter()
        .map(|actor| {
            let mut row = vec![actor.to_string()];
            row.extend(resources.iter().map(|resource| {
                let permitted = enforcer.permitted_actions(actor, resource, &actions);
                if permitted.is_empty() {
                    "-".to_string()
                } else {
                    permitted.join(", ")
                }
            }));
            row
        })
        .collect();

    print_grid(&columns, &rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_types::SubRole;

    #[test]
    fn profiles_cover_every_sub_role_and_students() {
        let all = profiles(None);
        assert_eq!(all.len(), SubRole::ALL.len() + 1);
        assert_eq!(all.last(), Some(&Actor::student()));
    }

    #[test]
    fn profiles_filter_by_role() {
        let professors = profiles(Some(Role::Professor));
        assert_eq!(professors.len(), SubRole::PROFESSOR.len());
        assert!(professors.iter().all(|a| a.role == Some(Role::Professor)));
    }
}
