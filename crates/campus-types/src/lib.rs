//! # campus-types: Core actor types for the campus access layer
//!
//! This crate holds the identity types every other campus crate speaks:
//! - Top-level roles ([`Role`])
//! - Organizational sub-roles ([`SubRole`])
//! - The authenticated actor handed to the evaluator ([`Actor`])
//! - The raw profile record supplied by the session provider ([`Profile`])
//!
//! Two parsing paths exist. [`Actor::from_profile`] is lenient and never
//! fails: anything it does not recognize becomes `None`, which the
//! evaluator treats as a denial. [`Actor::try_from_profile`] and the
//! [`std::str::FromStr`] impls are strict and report a [`ParseError`] for
//! callers that validate upstream.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Error returned by strict role and sub-role parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    #[error("unknown sub-role: {0:?}")]
    UnknownSubRole(String),

    #[error("profile has no role")]
    MissingRole,

    #[error("sub-role {sub_role} does not belong to role {role}")]
    SubRoleMismatch { role: Role, sub_role: SubRole },
}

// ============================================================================
// Role
// ============================================================================

/// Top-level actor category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Professor,
    Student,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Professor, Role::Student];

    /// Returns the wire name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Professor => "professor",
            Role::Student => "student",
        }
    }

    /// Returns the dashboard route an actor of this role lands on.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Professor => "/professor",
            Role::Student => "/student",
        }
    }

    /// Returns the sub-roles that refine this role.
    ///
    /// Students have no sub-role variation, so the slice is empty.
    pub fn sub_roles(&self) -> &'static [SubRole] {
        match self {
            Role::Admin => &SubRole::ADMIN,
            Role::Professor => &SubRole::PROFESSOR,
            Role::Student => &[],
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseError::UnknownRole(s.to_string()))
    }
}

// ============================================================================
// SubRole
// ============================================================================

/// Finer-grained designation within a role.
///
/// Each sub-role belongs to exactly one [`Role`]; see [`SubRole::role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubRole {
    // -- Admin --
    SuperAdmin,
    AcademicAdmin,
    FinanceAdmin,
    DepartmentAdmin,

    // -- Professor --
    HeadOfDepartment,
    SeniorProfessor,
    AssistantProfessor,
    GuestLecturer,
}

impl SubRole {
    /// Admin sub-roles, most senior first.
    pub const ADMIN: [SubRole; 4] = [
        SubRole::SuperAdmin,
        SubRole::AcademicAdmin,
        SubRole::DepartmentAdmin,
        SubRole::FinanceAdmin,
    ];

    /// Professor sub-roles, most senior first.
    pub const PROFESSOR: [SubRole; 4] = [
        SubRole::HeadOfDepartment,
        SubRole::SeniorProfessor,
        SubRole::AssistantProfessor,
        SubRole::GuestLecturer,
    ];

    /// Every sub-role.
    pub const ALL: [SubRole; 8] = [
        SubRole::SuperAdmin,
        SubRole::AcademicAdmin,
        SubRole::DepartmentAdmin,
        SubRole::FinanceAdmin,
        SubRole::HeadOfDepartment,
        SubRole::SeniorProfessor,
        SubRole::AssistantProfessor,
        SubRole::GuestLecturer,
    ];

    /// Returns the wire name of this sub-role.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubRole::SuperAdmin => "super_admin",
            SubRole::AcademicAdmin => "academic_admin",
            SubRole::FinanceAdmin => "finance_admin",
            SubRole::DepartmentAdmin => "department_admin",
            SubRole::HeadOfDepartment => "head_of_department",
            SubRole::SeniorProfessor => "senior_professor",
            SubRole::AssistantProfessor => "assistant_professor",
            SubRole::GuestLecturer => "guest_lecturer",
        }
    }

    /// Returns the top-level role this sub-role refines.
    pub fn role(&self) -> Role {
        match self {
            SubRole::SuperAdmin
            | SubRole::AcademicAdmin
            | SubRole::FinanceAdmin
            | SubRole::DepartmentAdmin => Role::Admin,
            SubRole::HeadOfDepartment
            | SubRole::SeniorProfessor
            | SubRole::AssistantProfessor
            | SubRole::GuestLecturer => Role::Professor,
        }
    }
}

impl Display for SubRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubRole::ALL
            .into_iter()
            .find(|sub_role| sub_role.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSubRole(s.to_string()))
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Profile record as delivered by the session provider.
///
/// Fields are kept as raw strings; conversion into an [`Actor`] decides how
/// unrecognized values are handled. Unknown fields in the record are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub role: Option<String>,
    pub sub_role: Option<String>,
}

impl Profile {
    pub fn new(role: Option<&str>, sub_role: Option<&str>) -> Self {
        Self {
            role: role.map(str::to_string),
            sub_role: sub_role.map(str::to_string),
        }
    }
}

// ============================================================================
// Actor
// ============================================================================

/// The principal an access decision is made for.
///
/// `role == None` stands for "no session" as well as "role string not
/// recognized"; both are denied everything by the evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    pub role: Option<Role>,
    pub sub_role: Option<SubRole>,
}

impl Actor {
    pub fn new(role: Role, sub_role: Option<SubRole>) -> Self {
        Self {
            role: Some(role),
            sub_role,
        }
    }

    /// Actor without a session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Actor whose role is implied by the sub-role.
    pub fn with_sub_role(sub_role: SubRole) -> Self {
        Self::new(sub_role.role(), Some(sub_role))
    }

    pub fn student() -> Self {
        Self::new(Role::Student, None)
    }

    /// Builds an actor from a profile record without ever failing.
    ///
    /// Unrecognized role or sub-role strings become `None`. A sub-role that
    /// belongs to a different role is kept as-is; no policy block will match
    /// it.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            role: profile.role.as_deref().and_then(|r| r.parse().ok()),
            sub_role: profile.sub_role.as_deref().and_then(|s| s.parse().ok()),
        }
    }

    /// Builds an actor from a profile record, rejecting anything that is not
    /// a well-formed role/sub-role pairing.
    pub fn try_from_profile(profile: &Profile) -> Result<Self, ParseError> {
        let role: Role = profile
            .role
            .as_deref()
            .ok_or(ParseError::MissingRole)?
            .parse()?;
        let sub_role = profile
            .sub_role
            .as_deref()
            .map(str::parse::<SubRole>)
            .transpose()?;

        if let Some(sub_role) = sub_role {
            if sub_role.role() != role {
                return Err(ParseError::SubRoleMismatch { role, sub_role });
            }
        }

        Ok(Self::new(role, sub_role))
    }

    /// Returns whether the actor carries a recognized role.
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }
}

impl Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.role, self.sub_role) {
            (None, _) => f.write_str("anonymous"),
            (Some(role), None) => write!(f, "{role}"),
            (Some(role), Some(sub_role)) => write!(f, "{role}/{sub_role}"),
        }
    }
}

impl From<&Profile> for Actor {
    fn from(profile: &Profile) -> Self {
        Self::from_profile(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("admin", Role::Admin)]
    #[test_case("professor", Role::Professor)]
    #[test_case("student", Role::Student)]
    fn role_parses_wire_name(name: &str, expected: Role) {
        assert_eq!(name.parse::<Role>().unwrap(), expected);
        assert_eq!(expected.to_string(), name);
    }

    #[test_case("Admin"; "capitalized")]
    #[test_case(" admin"; "leading space")]
    #[test_case("teacher"; "unknown")]
    #[test_case(""; "empty")]
    fn role_rejects_other_strings(name: &str) {
        assert_eq!(
            name.parse::<Role>(),
            Err(ParseError::UnknownRole(name.to_string()))
        );
    }

    #[test]
    fn sub_role_round_trips_through_wire_name() {
        for sub_role in SubRole::ALL {
            assert_eq!(sub_role.as_str().parse::<SubRole>().unwrap(), sub_role);
        }
    }

    #[test]
    fn sub_roles_belong_to_their_role() {
        for sub_role in SubRole::ADMIN {
            assert_eq!(sub_role.role(), Role::Admin);
        }
        for sub_role in SubRole::PROFESSOR {
            assert_eq!(sub_role.role(), Role::Professor);
        }
        assert!(Role::Student.sub_roles().is_empty());
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&SubRole::HeadOfDepartment).unwrap();
        assert_eq!(json, "\"head_of_department\"");

        let role: Role = serde_json::from_str("\"professor\"").unwrap();
        assert_eq!(role, Role::Professor);
    }

    #[test]
    fn lenient_profile_drops_unknown_values() {
        let actor = Actor::from_profile(&Profile::new(Some("janitor"), Some("super_admin")));
        assert_eq!(actor.role, None);
        assert_eq!(actor.sub_role, Some(SubRole::SuperAdmin));
        assert!(!actor.is_authenticated());

        let actor = Actor::from_profile(&Profile::new(Some("admin"), Some("overlord")));
        assert_eq!(actor, Actor::new(Role::Admin, None));
    }

    #[test]
    fn lenient_profile_keeps_mismatched_sub_role() {
        let actor = Actor::from_profile(&Profile::new(Some("admin"), Some("guest_lecturer")));
        assert_eq!(actor.role, Some(Role::Admin));
        assert_eq!(actor.sub_role, Some(SubRole::GuestLecturer));
    }

    #[test]
    fn strict_profile_reports_each_failure() {
        assert_eq!(
            Actor::try_from_profile(&Profile::default()),
            Err(ParseError::MissingRole)
        );
        assert_eq!(
            Actor::try_from_profile(&Profile::new(Some("dean"), None)),
            Err(ParseError::UnknownRole("dean".to_string()))
        );
        assert_eq!(
            Actor::try_from_profile(&Profile::new(Some("admin"), Some("dean"))),
            Err(ParseError::UnknownSubRole("dean".to_string()))
        );
        assert_eq!(
            Actor::try_from_profile(&Profile::new(Some("student"), Some("finance_admin"))),
            Err(ParseError::SubRoleMismatch {
                role: Role::Student,
                sub_role: SubRole::FinanceAdmin,
            })
        );
    }

    #[test]
    fn strict_profile_accepts_valid_pairs() {
        let actor =
            Actor::try_from_profile(&Profile::new(Some("professor"), Some("senior_professor")))
                .unwrap();
        assert_eq!(actor, Actor::with_sub_role(SubRole::SeniorProfessor));

        let actor = Actor::try_from_profile(&Profile::new(Some("student"), None)).unwrap();
        assert_eq!(actor, Actor::student());
    }

    #[test]
    fn profile_deserializes_from_session_row() {
        let row = r#"{"id": "u-17", "full_name": "R. Okafor", "role": "admin", "sub_role": null}"#;
        let profile: Profile = serde_json::from_str(row).unwrap();
        assert_eq!(profile, Profile::new(Some("admin"), None));
    }

    #[test]
    fn actor_display() {
        assert_eq!(Actor::anonymous().to_string(), "anonymous");
        assert_eq!(Actor::student().to_string(), "student");
        assert_eq!(
            Actor::with_sub_role(SubRole::FinanceAdmin).to_string(),
            "admin/finance_admin"
        );
    }
}
