//! Periodization planner
//!
//! Turns a training assessment into a multi-phase program: phases with
//! intensity/volume targets and Bryant method protocols, per-muscle weekly
//! volume checked against MEV/MAV/MRV landmarks, and a week-by-week volume
//! curve with deloads. Everything is synchronous and pure; `session` holds
//! the only mutable state.

pub mod bryant;
pub mod config;
pub mod deload;
pub mod error;
pub mod landmarks;
pub mod models;
pub mod phases;
pub mod pipeline;
pub mod plan_validation;
pub mod progression;
pub mod session;
pub mod volume;
pub mod volume_validation;

#[cfg(test)]
mod test_utils;

pub use bryant::{BryantMethod, BryantMethodConfig, BryantParameters};
pub use config::PlannerConfig;
pub use deload::DeloadStrategy;
pub use error::{ConfigError, PlanningError};
pub use pipeline::{run_pipeline, PlanningInput, ProgramOutcome};
pub use session::PlanningSession;
