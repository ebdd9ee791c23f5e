//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use varspike_sim::prelude::*;
//!
//! let mut editor = SequenceEditor::new("ACGTACGTACGT", Some(7));
//! editor.protect(2).perform_indels(3).restore();
//! let report = editor.report();
//! assert_eq!(report.count(ChangeKind::Snp), 2);
//! ```

pub use crate::base::{Nucleotide, Symbol, WorkingSequence};
pub use crate::editor::{
    ChangeKind, IndelIntent, MutationReport, Operation, ReportEntry, SequenceEditor,
};
pub use crate::errors::{self, EditWarning, InputError, SimError};
pub use crate::simulation::{MutationConfig, MutationRun, ReadSimConfig};
