//! Truth-set evaluation tools
//!
//! This module provides:
//! - VCF and truth-CSV readers
//! - Key-based set comparison of call sets (`POS_REF_ALT` identity)
//! - Precision / recall summaries
//! - Low-confidence flags for merged two-caller VCFs

pub mod compare;
pub mod confidence;

// Re-export commonly used items
pub use compare::{
    Comparison, ComparisonRow, ComparisonSummary, MatchStatus, VariantRecord, VariantSource,
    VariantType, compare_variants, read_truth_csv, read_vcf,
};
pub use confidence::{
    ConfidenceFlag, LowConfidenceCall, MergedCall, flag_low_confidence, read_merged_vcf,
};
