//! # campus-rbac: Role-Based Access Control for the campus dashboards
//!
//! Decides what an admin, professor or student may do:
//! - **Permission evaluation** over a data-driven decision table keyed by
//!   role, then sub-role
//! - **Enforcement** with audit logging for UI actions
//! - **Route guarding** for the role-specific dashboard sections
//! - **Hierarchy analysis** to check that senior sub-roles contain juniors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Actor (role, sub-role) + resource + action │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  PolicyTable                                 │
//! │  ├─ Select grant by role                     │
//! │  ├─ ...then by sub-role (admin, professor)   │
//! │  └─ No grant: deny                           │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  Decision                                    │
//! │  - Effect (Allow/Deny)                       │
//! │  - Matched rule name                         │
//! │  - Human-readable reason                     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Standard policy
//!
//! | Sub-role            | Resources                             | Actions         |
//! |---------------------|---------------------------------------|-----------------|
//! | super_admin         | all                                   | all             |
//! | academic_admin      | courses, enrollments, departments     | all             |
//! | department_admin    | courses, enrollments                  | all but delete  |
//! | finance_admin       | enrollments                           | view, approve   |
//! | head_of_department  | courses, enrollments, announcements   | all             |
//! | senior_professor    | courses, enrollments, announcements   | all but delete  |
//! | assistant_professor | courses                               | view, edit      |
//! | guest_lecturer      | courses                               | view            |
//! | (student)           | enrollments                           | view, create    |
//!
//! Actors without a recognized role, and admins or professors without a
//! sub-role, are denied everything.
//!
//! ## Examples
//!
//! ```
//! use campus_rbac::{has_permission, PermissionEnforcer, RouteGuard, RouteOutcome};
//! use campus_types::{Actor, Profile};
//!
//! let actor = Actor::from_profile(&Profile::new(Some("professor"), Some("guest_lecturer")));
//! assert!(has_permission(&actor, "courses", "view"));
//! assert!(!has_permission(&actor, "courses", "edit"));
//!
//! let enforcer = PermissionEnforcer::standard().without_audit();
//! let buttons = enforcer.permitted_actions(&actor, "courses", &["view", "edit", "delete"]);
//! assert_eq!(buttons, vec!["view"]);
//!
//! let guard = RouteGuard::standard();
//! assert_eq!(
//!     guard.check(&actor, "/admin/finance"),
//!     RouteOutcome::RedirectToDashboard("/professor")
//! );
//! ```

pub mod enforcement;
pub mod evaluator;
pub mod hierarchy;
pub mod permissions;
pub mod policy;
pub mod routes;

pub use enforcement::{EnforcementError, PermissionEnforcer};
pub use evaluator::{Decision, evaluate, has_permission, standard_table};
pub use permissions::Action;
pub use policy::{ActionScope, Effect, Grant, PolicyTable, ResourceScope, RoleRules};
pub use routes::{RouteGuard, RouteOutcome, RouteRule};
