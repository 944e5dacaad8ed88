//! Role-gated routing.
//!
//! Each dashboard section is reserved for one role. Rules are checked in
//! order and the first rule whose pattern matches the path decides; a path
//! no rule matches is denied. Denied actors are redirected: anonymous ones
//! to the login page, authenticated ones to their own dashboard.

use campus_types::{Actor, Role};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enforcement::{EnforcementError, Result};

/// Login page anonymous actors are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// A single route access rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    /// Path pattern. `*` matches any run of characters, `?` exactly one.
    pub pattern: String,

    /// Reachable without a session.
    #[serde(default)]
    pub public: bool,

    /// Roles admitted by this rule. Empty means any recognized role.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl RouteRule {
    pub fn public(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            public: true,
            roles: Vec::new(),
        }
    }

    pub fn authenticated(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            public: false,
            roles: Vec::new(),
        }
    }

    pub fn for_roles(pattern: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            pattern: pattern.into(),
            public: false,
            roles: roles.into_iter().collect(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        glob_matches(&self.pattern, path)
    }

    /// Returns whether this rule admits `actor`, assuming the path matched.
    pub fn admits(&self, actor: &Actor) -> bool {
        if self.public {
            return true;
        }
        match actor.role {
            None => false,
            Some(role) => self.roles.is_empty() || self.roles.contains(&role),
        }
    }
}

/// Where a navigation attempt ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Allow,
    RedirectToLogin,
    RedirectToDashboard(&'static str),
}

impl RouteOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteOutcome::Allow)
    }

    /// Redirect target, if the route was denied.
    pub fn redirect(&self) -> Option<&'static str> {
        match *self {
            RouteOutcome::Allow => None,
            RouteOutcome::RedirectToLogin => Some(LOGIN_PATH),
            RouteOutcome::RedirectToDashboard(path) => Some(path),
        }
    }
}

/// Ordered set of route rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    rules: Vec<RouteRule>,
}

impl RouteGuard {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Routing rules of the campus dashboards.
    pub fn standard() -> Self {
        let mut rules = vec![
            RouteRule::public("/"),
            RouteRule::public(LOGIN_PATH),
            RouteRule::public("/signup"),
        ];

        for role in Role::ALL {
            let dashboard = role.dashboard_path();
            rules.push(RouteRule::for_roles(dashboard, [role]));
            rules.push(RouteRule::for_roles(format!("{dashboard}/*"), [role]));
        }

        for shared in ["/messages", "/announcements", "/chatbot", "/profile"] {
            rules.push(RouteRule::authenticated(shared));
            rules.push(RouteRule::authenticated(format!("{shared}/*")));
        }

        Self::new(rules)
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Decides where `actor` ends up when navigating to `path`.
    pub fn check(&self, actor: &Actor, path: &str) -> RouteOutcome {
        let matched = self.rules.iter().find(|rule| rule.matches(path));

        let outcome = match matched {
            Some(rule) if rule.admits(actor) => RouteOutcome::Allow,
            _ => match actor.role {
                None => RouteOutcome::RedirectToLogin,
                Some(role) => RouteOutcome::RedirectToDashboard(role.dashboard_path()),
            },
        };

        debug!(
            actor = %actor,
            path = %path,
            rule = ?matched.map(|r| r.pattern.as_str()),
            outcome = ?outcome,
            "Route checked"
        );

        outcome
    }

    /// Returns `Ok(())` if `actor` may open `path`, otherwise the redirect.
    pub fn enforce(&self, actor: &Actor, path: &str) -> Result<()> {
        match self.check(actor, path).redirect() {
            None => Ok(()),
            Some(redirect) => Err(EnforcementError::RouteDenied {
                path: path.to_string(),
                redirect: redirect.to_string(),
            }),
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::standard()
    }
}

/// Glob pattern matching supporting `*` and `?` wildcards.
///
/// `?` matches a single `char`. Runs in constant stack space; a `*` is
/// retried from its last position when a later literal fails.
fn glob_matches(pattern: &str, value: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let value: Vec<char> = value.chars().collect();

    let (mut p, mut v) = (0, 0);
    // Last `*` seen in the pattern, and the value position it resumes from.
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, v));
                p += 1;
            }
            Some('?') => {
                p += 1;
                v += 1;
            }
            Some(c) if *c == value[v] => {
                p += 1;
                v += 1;
            }
            _ => match backtrack {
                Some((star, resume)) => {
                    p = star + 1;
                    v = resume + 1;
                    backtrack = Some((star, resume + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}
