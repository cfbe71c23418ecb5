//! Weekly timetable synthesizer.
//!
//! Given a catalog of subjects with required weekly lesson counts and a fixed
//! weekly grid (days × slots per day), a generational genetic algorithm
//! searches for the assignment of subjects and free periods to grid cells
//! that best satisfies the soft constraints: no long same-subject runs,
//! weekly quota adherence, and fatigue limits on consecutive lessons.
//!
//! The search is heuristic and time-bounded — it prefers better schedules
//! but never rejects one, so a run always produces an answer.
//!
//! # Modules
//!
//! - **`catalog`**: shared subject registry with a validated write path
//! - **`grid`**: the weekly grid shape
//! - **`engine`**: chromosome encoding, fitness scoring, genetic operators,
//!   and the evolution driver
//! - **`config`**: TOML-backed configuration sections

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;

pub use catalog::{CatalogSnapshot, SubjectCatalog};
pub use engine::{Chromosome, EvolutionEngine, EvolutionOutcome, Gene, Termination};
pub use error::{Result, TimegenError};
pub use grid::GridSpec;
