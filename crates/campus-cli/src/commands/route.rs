//! Route guard command.

use anyhow::Result;
use campus_config::CampusConfig;

use super::actor_from_flags;
use crate::style::{colors::SemanticStyle, print_allowed, print_denied, print_labeled};

pub fn run(
    config: &CampusConfig,
    path: &str,
    role: Option<&str>,
    sub_role: Option<&str>,
) -> Result<()> {
    let actor = actor_from_flags(role, sub_role);
    let guard = config.route_guard();
    let outcome = guard.check(&actor, path);

    match outcome.redirect() {
        None => print_allowed("ALLOW"),
        Some(target) => {
            print_denied("REDIRECT");
            print_labeled("To", &target.warning());
        }
    }
    print_labeled("Actor", &actor.to_string());
    print_labeled("Path", &path.code());

    let rule = guard
        .rules()
        .iter()
        .find(|rule| rule.matches(path))
        .map_or_else(|| "none".muted(), |rule| rule.pattern.code());
    print_labeled("Rule", &rule);

    Ok(())
}
