//! `rollcall-engine` — attendance rollup engine.
//!
//! Pure engine crate: receives exported attendance rows, returns de-duplicated,
//! time-aggregated participant summaries. No CLI or rendering dependencies.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod filter;
pub mod identity;
pub mod model;
pub mod script;
pub mod sort;

pub use config::RollupConfig;
pub use engine::run;
pub use error::RollupError;
pub use model::{AttendanceRecord, ParticipantSummary, RollupResult};
