//! Access control policy table.
//!
//! The policy is data: a map keyed by [`Role`], whose value either applies
//! one [`Grant`] to every actor of that role or selects a [`Grant`] by
//! [`SubRole`]. Each grant pairs a resource scope with an action scope.
//! Anything the table does not explicitly grant is denied.

use std::collections::{BTreeMap, BTreeSet};

use campus_types::{Actor, Role, SubRole};
use serde::{Deserialize, Serialize};

use crate::permissions::{ANNOUNCEMENTS, Action, COURSES, DEPARTMENTS, ENROLLMENTS};

// ============================================================================
// Effect
// ============================================================================

/// Outcome of a policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Allow,
    Deny,
}

impl Default for Effect {
    /// Defaults to `Deny`: nothing is allowed unless a grant says so.
    fn default() -> Self {
        Self::Deny
    }
}

// ============================================================================
// Scopes
// ============================================================================

/// Which resources a grant covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceScope {
    /// Every resource, including ones the application has not named yet.
    Any,
    /// Exactly the listed resources.
    OneOf(BTreeSet<String>),
}

impl ResourceScope {
    pub fn one_of<I>(resources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::OneOf(resources.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, resource: &str) -> bool {
        match self {
            ResourceScope::Any => true,
            ResourceScope::OneOf(resources) => resources.contains(resource),
        }
    }
}

/// Which actions a grant covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionScope {
    Any,
    OneOf(BTreeSet<String>),
    /// Every action except the listed ones.
    AllExcept(BTreeSet<String>),
}

impl ActionScope {
    pub fn one_of<I>(actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::OneOf(actions.into_iter().map(Into::into).collect())
    }

    pub fn all_except<I>(actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::AllExcept(actions.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, action: &str) -> bool {
        match self {
            ActionScope::Any => true,
            ActionScope::OneOf(actions) => actions.contains(action),
            ActionScope::AllExcept(actions) => !actions.contains(action),
        }
    }
}

// ============================================================================
// Grant
// ============================================================================

/// A single row of the decision table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    /// Human-readable name for audit logging.
    pub name: String,
    pub resources: ResourceScope,
    pub actions: ActionScope,
}

impl Grant {
    pub fn new(name: impl Into<String>, resources: ResourceScope, actions: ActionScope) -> Self {
        Self {
            name: name.into(),
            resources,
            actions,
        }
    }

    /// Grant covering every resource and every action.
    pub fn unrestricted(name: impl Into<String>) -> Self {
        Self::new(name, ResourceScope::Any, ActionScope::Any)
    }

    /// Returns whether this grant covers `action` on `resource`.
    pub fn permits(&self, resource: &str, action: &str) -> bool {
        self.resources.contains(resource) && self.actions.contains(action)
    }
}

// ============================================================================
// PolicyTable
// ============================================================================

/// How a role's actors are matched to a grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleRules {
    /// One grant for the whole role; the actor's sub-role is ignored.
    Uniform(Grant),
    /// One grant per sub-role. Actors without a listed sub-role match nothing.
    PerSubRole(BTreeMap<SubRole, Grant>),
}

/// Decision table keyed by role, then sub-role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    roles: BTreeMap<Role, RoleRules>,
}

impl PolicyTable {
    /// Creates a table that denies everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `grant` to every actor of `role`, replacing any rules the role
    /// already had.
    pub fn with_uniform(mut self, role: Role, grant: Grant) -> Self {
        self.roles.insert(role, RoleRules::Uniform(grant));
        self
    }

    /// Assigns `grant` to `sub_role` under the role it belongs to.
    ///
    /// If that role currently has a uniform grant, it is replaced by
    /// per-sub-role rules.
    pub fn with_sub_role(mut self, sub_role: SubRole, grant: Grant) -> Self {
        let rules = self
            .roles
            .entry(sub_role.role())
            .or_insert_with(|| RoleRules::PerSubRole(BTreeMap::new()));

        match rules {
            RoleRules::PerSubRole(grants) => {
                grants.insert(sub_role, grant);
            }
            RoleRules::Uniform(_) => {
                *rules = RoleRules::PerSubRole(BTreeMap::from([(sub_role, grant)]));
            }
        }
        self
    }

    /// Returns the grant that applies to `actor`, if any.
    ///
    /// Selection only looks at role and sub-role; whether the grant covers a
    /// particular resource/action is a separate question.
    pub fn grant_for(&self, actor: &Actor) -> Option<&Grant> {
        let role = actor.role?;
        match self.roles.get(&role)? {
            RoleRules::Uniform(grant) => Some(grant),
            RoleRules::PerSubRole(grants) => grants.get(&actor.sub_role?),
        }
    }

    /// Returns the rules configured for `role`.
    pub fn rules_for(&self, role: Role) -> Option<&RoleRules> {
        self.roles.get(&role)
    }

    /// Iterates over every grant with the role and sub-role it is keyed by.
    pub fn grants(&self) -> impl Iterator<Item = (Role, Option<SubRole>, &Grant)> {
        self.roles.iter().flat_map(|(role, rules)| {
            let entries: Vec<(Role, Option<SubRole>, &Grant)> = match rules {
                RoleRules::Uniform(grant) => vec![(*role, None, grant)],
                RoleRules::PerSubRole(grants) => grants
                    .iter()
                    .map(|(sub_role, grant)| (*role, Some(*sub_role), grant))
                    .collect(),
            };
            entries
        })
    }

    /// Builds the campus decision table.
    ///
    /// | role      | sub-role            | grants                                              |
    /// |-----------|---------------------|-----------------------------------------------------|
    /// | admin     | super_admin         | everything                                          |
    /// | admin     | academic_admin      | courses, enrollments, departments; any action       |
    /// | admin     | finance_admin       | enrollments; view, approve                          |
    /// | admin     | department_admin    | courses, enrollments; anything but delete           |
    /// | professor | head_of_department  | courses, enrollments, announcements; any action     |
    /// | professor | senior_professor    | courses, enrollments, announcements; not delete     |
    /// | professor | assistant_professor | courses; view, edit                                 |
    /// | professor | guest_lecturer      | courses; view                                       |
    /// | student   | any                 | enrollments; view, create                           |
    pub fn standard() -> Self {
        Self::new()
            // -- Admin --
            .with_sub_role(SubRole::SuperAdmin, Grant::unrestricted("super-admin-all"))
            .with_sub_role(
                SubRole::AcademicAdmin,
                Grant::new(
                    "academic-admin-records",
                    ResourceScope::one_of([COURSES, ENROLLMENTS, DEPARTMENTS]),
                    ActionScope::Any,
                ),
            )
            .with_sub_role(
                SubRole::FinanceAdmin,
                Grant::new(
                    "finance-admin-enrollments",
                    ResourceScope::one_of([ENROLLMENTS]),
                    ActionScope::one_of([Action::View, Action::Approve]),
                ),
            )
            .with_sub_role(
                SubRole::DepartmentAdmin,
                Grant::new(
                    "department-admin-no-delete",
                    ResourceScope::one_of([COURSES, ENROLLMENTS]),
                    ActionScope::all_except([Action::Delete]),
                ),
            )
            // -- Professor --
            .with_sub_role(
                SubRole::HeadOfDepartment,
                Grant::new(
                    "head-of-department-teaching",
                    ResourceScope::one_of([COURSES, ENROLLMENTS, ANNOUNCEMENTS]),
                    ActionScope::Any,
                ),
            )
            .with_sub_role(
                SubRole::SeniorProfessor,
                Grant::new(
                    "senior-professor-no-delete",
                    ResourceScope::one_of([COURSES, ENROLLMENTS, ANNOUNCEMENTS]),
                    ActionScope::all_except([Action::Delete]),
                ),
            )
            .with_sub_role(
                SubRole::AssistantProfessor,
                Grant::new(
                    "assistant-professor-courses",
                    ResourceScope::one_of([COURSES]),
                    ActionScope::one_of([Action::View, Action::Edit]),
                ),
            )
            .with_sub_role(
                SubRole::GuestLecturer,
                Grant::new(
                    "guest-lecturer-read-courses",
                    ResourceScope::one_of([COURSES]),
                    ActionScope::one_of([Action::View]),
                ),
            )
            // -- Student --
            .with_uniform(
                Role::Student,
                Grant::new(
                    "student-enrollments",
                    ResourceScope::one_of([ENROLLMENTS]),
                    ActionScope::one_of([Action::View, Action::Create]),
                ),
            )
    }
}
