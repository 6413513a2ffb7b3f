//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no remote dependencies and are easily testable.

mod integration;
mod prune_planner;
mod requirements;

pub use integration::{invoke_url, routes_through_alias, ALIAS_PLACEHOLDER};
pub use prune_planner::plan_prune;
pub use requirements::RequirementChecker;
