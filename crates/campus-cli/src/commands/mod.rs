//! CLI command implementations.

pub mod check;
pub mod config;
pub mod hierarchy;
pub mod matrix;
pub mod route;
pub mod version;

use campus_types::{Actor, Profile};
use tracing::warn;

/// Builds the actor described by `--role` and `--sub-role`.
///
/// Unrecognized names are kept lenient so the command shows the decision
/// such a profile would actually receive.
pub fn actor_from_flags(role: Option<&str>, sub_role: Option<&str>) -> Actor {
    let profile = Profile::new(role, sub_role);

    if let Err(err) = Actor::try_from_profile(&profile) {
        if role.is_some() {
            warn!(error = %err, "Profile is not a well-formed role/sub-role pairing");
        }
    }

    Actor::from_profile(&profile)
}
