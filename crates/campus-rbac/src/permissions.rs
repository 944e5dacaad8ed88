//! Permission vocabulary.
//!
//! Resources and actions are opaque strings to the evaluator. This module
//! names the ones the campus application actually uses so callers and the
//! standard policy table do not repeat string literals.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Resources
// ============================================================================

pub const COURSES: &str = "courses";
pub const ENROLLMENTS: &str = "enrollments";
pub const DEPARTMENTS: &str = "departments";
pub const ANNOUNCEMENTS: &str = "announcements";
pub const ATTENDANCE: &str = "attendance";
pub const EXAMS: &str = "exams";
pub const RESULTS: &str = "results";
pub const FINANCE: &str = "finance";
pub const INVENTORY: &str = "inventory";
pub const TRANSPORT: &str = "transport";
pub const LEAVES: &str = "leaves";
pub const MESSAGES: &str = "messages";

/// Every protected collection the dashboards expose.
pub const KNOWN_RESOURCES: [&str; 12] = [
    COURSES,
    ENROLLMENTS,
    DEPARTMENTS,
    ANNOUNCEMENTS,
    ATTENDANCE,
    EXAMS,
    RESULTS,
    FINANCE,
    INVENTORY,
    TRANSPORT,
    LEAVES,
    MESSAGES,
];

// ============================================================================
// Actions
// ============================================================================

/// Returned when a string does not name a known [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action: {0:?}")]
pub struct UnknownAction(pub String);

/// Operation performed against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Approve,
    /// The most sensitive action. Mid-tier sub-roles that otherwise hold
    /// broad access are denied it.
    Delete,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Approve,
        Action::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Approve => "approve",
            Action::Delete => "delete",
        }
    }

    /// Returns whether this action destroys data.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Action::Delete)
    }

    /// Same as [`Action::is_destructive`] for a raw action string.
    ///
    /// Unknown strings are not considered destructive.
    pub fn is_destructive_name(action: &str) -> bool {
        action
            .parse::<Action>()
            .is_ok_and(|action| action.is_destructive())
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.as_str().to_string()
    }
}
