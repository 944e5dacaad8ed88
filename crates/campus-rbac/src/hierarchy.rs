//! Privilege containment between sub-roles.
//!
//! Grants are written per sub-role rather than derived from a declared
//! hierarchy, so "senior sees everything junior sees" is a property of the
//! table that has to be checked, not assumed. These helpers compute it over
//! a finite universe of resources and actions.

use std::collections::BTreeSet;

use campus_types::{Actor, Role, SubRole};

use crate::evaluator::evaluate;
use crate::policy::PolicyTable;

/// A `(resource, action)` pair.
pub type Capability = (String, String);

/// Returns every pair in `resources × actions` that `actor` is granted.
pub fn granted_pairs<R, A>(
    table: &PolicyTable,
    actor: &Actor,
    resources: &[R],
    actions: &[A],
) -> BTreeSet<Capability>
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    let mut granted = BTreeSet::new();
    for resource in resources {
        for action in actions {
            let (resource, action) = (resource.as_ref(), action.as_ref());
            if evaluate(table, actor, resource, action).is_allowed() {
                granted.insert((resource.to_string(), action.to_string()));
            }
        }
    }
    granted
}

/// Returns the pairs `junior` is granted but `senior` is not.
pub fn uncovered<R, A>(
    table: &PolicyTable,
    senior: &Actor,
    junior: &Actor,
    resources: &[R],
    actions: &[A],
) -> Vec<Capability>
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    let senior_pairs = granted_pairs(table, senior, resources, actions);
    granted_pairs(table, junior, resources, actions)
        .into_iter()
        .filter(|pair| !senior_pairs.contains(pair))
        .collect()
}

/// Returns whether `senior` is granted everything `junior` is.
pub fn dominates<R, A>(
    table: &PolicyTable,
    senior: &Actor,
    junior: &Actor,
    resources: &[R],
    actions: &[A],
) -> bool
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    uncovered(table, senior, junior, resources, actions).is_empty()
}

/// Containment result for one sub-role pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dominance {
    pub senior: SubRole,
    pub junior: SubRole,
    /// Pairs the junior holds that the senior lacks. Empty when the senior
    /// dominates.
    pub uncovered: Vec<Capability>,
}

impl Dominance {
    pub fn holds(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Checks every pair of `role`'s sub-roles in seniority order
/// ([`Role::sub_roles`] lists the most senior first).
pub fn seniority_report<R, A>(
    table: &PolicyTable,
    role: Role,
    resources: &[R],
    actions: &[A],
) -> Vec<Dominance>
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    let sub_roles = role.sub_roles();
    let mut report = Vec::new();

    for (i, senior) in sub_roles.iter().enumerate() {
        for junior in &sub_roles[i + 1..] {
            report.push(Dominance {
                senior: *senior,
                junior: *junior,
                uncovered: uncovered(
                    table,
                    &Actor::with_sub_role(*senior),
                    &Actor::with_sub_role(*junior),
                    resources,
                    actions,
                ),
            });
        }
    }

    report
}
