//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing nucleotides,
//! working-sequence symbols, and the editable sequence itself.

mod nucleotide;
mod sequence;
mod symbol;

pub use nucleotide::Nucleotide;
pub use sequence::WorkingSequence;
pub use symbol::Symbol;
