//! # Analysis Crate
//!
//! Evaluation of variant calls against a simulated truth set, and
//! low-confidence call flagging for two-caller merged VCFs.

pub mod analysis;
pub mod errors;
pub mod io;

pub use analysis::{compare, confidence};
pub use errors::CompareError;
