//! Bridge crossing solvers.
//!
//! Computes the minimum total time for a group of people to cross a narrow
//! bridge at night sharing a single torch, with at most two people on the
//! bridge at a time and pairs moving at the slower member's pace. Two solvers
//! operate over the same roster: a greedy heuristic that pairs everyone with
//! the fastest person, and a sort-based shielding strategy that never does
//! worse than the greedy one.

mod config;
mod greedy;
mod loader;
pub mod logging;
mod models;
mod report;
mod shielding;

pub use config::{ConfigError, Method, RunConfig};
pub use greedy::GreedySolver;
pub use loader::{load_roster, roster_from_str, LoadError};
pub use models::{CrossingEvent, CrossingPlan, Person, Roster};
pub use report::write_plan;
pub use shielding::ShieldingSolver;
