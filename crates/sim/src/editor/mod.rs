//! Coordinate-preserving sequence editor.
//!
//! [`SequenceEditor`] injects substitutions and indels into a reference
//! sequence while keeping an exact account of how every edit maps back to
//! reference coordinates:
//!
//! - substitution sites are protected by sentinels until [`restore`] runs, so
//!   no deletion can destroy them;
//! - inserted content is tracked as [`Span`]s and never split or partially
//!   deleted by a later indel;
//! - a [`PositionMapping`] follows every deletion so working offsets can be
//!   resolved to reference coordinates at any time.
//!
//! The usual flow is `protect` → `perform_indels` → `restore` → `report`.
//! Every failure after construction degrades to a logged [`EditWarning`] and a
//! reduced or skipped edit; nothing in the editing path returns an error.
//!
//! [`restore`]: SequenceEditor::restore
//! [`EditWarning`]: crate::errors::EditWarning

mod indel;
mod mapping;
mod protection;
mod ranges;
mod report;
mod spans;

pub use indel::{IndelIntent, Operation};
pub use mapping::PositionMapping;
pub use protection::{ProtectionRecord, SnpRecord};
pub use report::{ChangeKind, MutationReport, ReportEntry, strip_span_markers};
pub use spans::{Span, SpanRegistry};

use crate::base::WorkingSequence;
use crate::errors::EditWarning;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::BTreeMap;

/// Upper bounds for randomly generated indel intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndelLimits {
    /// Longest random insertion, in bases.
    pub max_insertion: usize,
    /// Longest random deletion, in bases.
    pub max_deletion: usize,
}

impl Default for IndelLimits {
    fn default() -> Self {
        Self {
            max_insertion: 10,
            max_deletion: 10,
        }
    }
}

/// Editor owning one working sequence and all of its bookkeeping.
#[derive(Debug, Clone)]
pub struct SequenceEditor {
    /// The unedited input, used for report anchors.
    reference: WorkingSequence,
    sequence: WorkingSequence,
    spans: SpanRegistry,
    mapping: PositionMapping,
    protections: BTreeMap<usize, ProtectionRecord>,
    snp_records: Vec<SnpRecord>,
    operations: Vec<Operation>,
    warnings: Vec<EditWarning>,
    limits: IndelLimits,
    seed: Option<u64>,
    rng: Xoshiro256PlusPlus,
}

impl SequenceEditor {
    /// Create an editor over `reference`.
    ///
    /// With `seed == None` a seed is drawn from the thread RNG; either way the
    /// seed in use is available from [`seed`](Self::seed) so the run can be
    /// replayed.
    pub fn new(reference: &str, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("Sequence editor seeded with {seed}");
        let mut editor = Self::with_rng(reference, Xoshiro256PlusPlus::seed_from_u64(seed));
        editor.seed = Some(seed);
        editor
    }

    /// Create an editor drawing from an existing generator.
    pub fn with_rng(reference: &str, rng: Xoshiro256PlusPlus) -> Self {
        let reference = WorkingSequence::from_text(reference);
        Self {
            sequence: reference.clone(),
            mapping: PositionMapping::identity(reference.len()),
            reference,
            spans: SpanRegistry::new(),
            protections: BTreeMap::new(),
            snp_records: Vec::new(),
            operations: Vec::new(),
            warnings: Vec::new(),
            limits: IndelLimits::default(),
            seed: None,
            rng,
        }
    }

    /// Replace the bounds used by [`generate_intents`](Self::generate_intents).
    pub fn with_limits(mut self, limits: IndelLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn limits(&self) -> IndelLimits {
        self.limits
    }

    /// Seed of the editor's generator, when it was built from one.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The reference as loaded (case-normalized).
    #[inline]
    pub fn reference(&self) -> &WorkingSequence {
        &self.reference
    }

    /// The working sequence, sentinels included.
    #[inline]
    pub fn sequence(&self) -> &WorkingSequence {
        &self.sequence
    }

    #[inline]
    pub fn mapping(&self) -> &PositionMapping {
        &self.mapping
    }

    #[inline]
    pub fn spans(&self) -> &SpanRegistry {
        &self.spans
    }

    /// Applied indels, in application order.
    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Substitutions produced by [`restore`](Self::restore).
    #[inline]
    pub fn snp_records(&self) -> &[SnpRecord] {
        &self.snp_records
    }

    /// Protected sites keyed by reference coordinate.
    #[inline]
    pub fn protection_records(&self) -> &BTreeMap<usize, ProtectionRecord> {
        &self.protections
    }

    /// Non-fatal conditions raised so far, oldest first.
    #[inline]
    pub fn warnings(&self) -> &[EditWarning] {
        &self.warnings
    }

    fn warn(&mut self, warning: EditWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}
