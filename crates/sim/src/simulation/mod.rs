//! Run configuration and the end-to-end mutation flow.
//!
//! - `MutationConfig` / `ReadSimConfig`: serde-backed, validated parameters.
//! - `MutationRun`: loads a reference, drives the sequence editor, and
//!   exports the mutated sequence and its report.

pub mod configs;
pub mod engine;

pub use configs::{MutationConfig, ReadSimConfig};
pub use engine::{MUTATED_SEQUENCE_FILE, MutationOutcome, MutationRun, REPORT_CSV_FILE};
