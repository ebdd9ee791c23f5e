//! # Simulation Crate
//!
//! The `sim` crate provides the coordinate-preserving sequence editor used to
//! generate ground-truth variants. It includes modules for sequence
//! representation, the editor itself (protection, spans, position mapping,
//! indels, reporting), reference loading, paired-end read sampling, and the
//! end-to-end mutation run.

pub mod base;
pub mod editor;
pub mod errors;
pub mod io;
pub mod prelude;
pub mod reads;
pub mod simulation;

pub use base::{Nucleotide, Symbol, WorkingSequence};
pub use editor::{MutationReport, SequenceEditor};
