//! Call-set comparison
//!
//! Variants are identified by `"{POS}_{REF}_{ALT}"`. A call present in both
//! sets is a match; anything else is a mismatch attributed to the side it came
//! from. Only the first record per key is reported.

use crate::errors::CompareError;
use crate::io::open_reader;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Coarse variant class: equal-length alleles are SNPs, anything else an
/// indel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantType {
    #[serde(rename = "SNP")]
    Snp,
    #[serde(rename = "INDEL")]
    Indel,
}

impl VariantType {
    pub fn classify(reference: &str, alternate: &str) -> Self {
        if reference.len() == alternate.len() {
            Self::Snp
        } else {
            Self::Indel
        }
    }
}

/// One variant from either call set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    /// Contig name; absent for truth-set rows.
    pub chrom: Option<String>,
    pub position: usize,
    pub reference: String,
    pub alternate: String,
    pub variant_type: VariantType,
}

impl VariantRecord {
    pub fn new(chrom: Option<String>, position: usize, reference: &str, alternate: &str) -> Self {
        Self {
            chrom,
            position,
            reference: reference.to_string(),
            alternate: alternate.to_string(),
            variant_type: VariantType::classify(reference, alternate),
        }
    }

    /// Identity used for set comparison.
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.position, self.reference, self.alternate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "MATCH")]
    Match,
    #[serde(rename = "MISMATCH")]
    Mismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantSource {
    Both,
    #[serde(rename = "VCF_only")]
    VcfOnly,
    #[serde(rename = "CSV_only")]
    CsvOnly,
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "POS")]
    pub position: usize,
    #[serde(rename = "REF")]
    pub reference: String,
    #[serde(rename = "ALT")]
    pub alternate: String,
    #[serde(rename = "Type")]
    pub variant_type: VariantType,
    #[serde(rename = "Match_Status")]
    pub status: MatchStatus,
    #[serde(rename = "Source")]
    pub source: VariantSource,
}

impl ComparisonRow {
    fn from_record(record: &VariantRecord, status: MatchStatus, source: VariantSource) -> Self {
        Self {
            position: record.position,
            reference: record.reference.clone(),
            alternate: record.alternate.clone(),
            variant_type: record.variant_type,
            status,
            source,
        }
    }
}

/// Counts of distinct keys per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub matched: usize,
    pub vcf_only: usize,
    pub csv_only: usize,
}

impl ComparisonSummary {
    /// Fraction of calls that are in the truth set.
    pub fn precision(&self) -> f64 {
        ratio(self.matched, self.matched + self.vcf_only)
    }

    /// Fraction of the truth set that was called.
    pub fn recall(&self) -> f64 {
        ratio(self.matched, self.matched + self.csv_only)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Position-sorted comparison rows plus their summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
}

/// Parse VCF text, skipping `#` lines and rows with fewer than five fields.
///
/// Empty REF or ALT columns are kept, so trailing tabs are significant.
pub fn parse_vcf<R: BufRead>(reader: R) -> Result<Vec<VariantRecord>, CompareError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
        if fields.len() < 5 {
            continue;
        }
        let position: usize = fields[1].parse().map_err(|_| CompareError::Parse {
            line: idx + 1,
            message: format!("invalid POS '{}'", fields[1]),
        })?;
        records.push(VariantRecord::new(
            Some(fields[0].to_string()),
            position,
            fields[3],
            fields[4],
        ));
    }
    log::debug!("Parsed {} VCF records", records.len());
    Ok(records)
}

pub fn read_vcf(path: impl AsRef<Path>) -> Result<Vec<VariantRecord>, CompareError> {
    parse_vcf(open_reader(path)?)
}

#[derive(Debug, Deserialize)]
struct TruthRow {
    #[serde(rename = "POS")]
    position: usize,
    #[serde(rename = "REF", default)]
    reference: String,
    #[serde(rename = "ALT", default)]
    alternate: String,
}

/// Parse a truth-set CSV with `POS`, `REF` and `ALT` columns.
///
/// Other columns are ignored; empty alleles stay empty.
pub fn parse_truth_csv<R: Read>(reader: R) -> Result<Vec<VariantRecord>, CompareError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: TruthRow = row?;
        records.push(VariantRecord::new(
            None,
            row.position,
            &row.reference,
            &row.alternate,
        ));
    }
    log::debug!("Parsed {} truth records", records.len());
    Ok(records)
}

pub fn read_truth_csv(path: impl AsRef<Path>) -> Result<Vec<VariantRecord>, CompareError> {
    parse_truth_csv(BufReader::new(File::open(path)?))
}

/// First record per key, in input order.
fn first_per_key(records: &[VariantRecord]) -> Vec<(String, &VariantRecord)> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|record| {
            let key = record.key();
            seen.insert(key.clone()).then_some((key, record))
        })
        .collect()
}

/// Compare called variants against the truth set.
///
/// Rows are grouped as matches, then VCF-only, then truth-only, each in input
/// order, and finally stable-sorted by position.
pub fn compare_variants(calls: &[VariantRecord], truth: &[VariantRecord]) -> Comparison {
    let calls = first_per_key(calls);
    let truth = first_per_key(truth);
    let call_keys: HashSet<&str> = calls.iter().map(|(key, _)| key.as_str()).collect();
    let truth_keys: HashSet<&str> = truth.iter().map(|(key, _)| key.as_str()).collect();

    let mut rows = Vec::with_capacity(calls.len() + truth.len());
    let mut summary = ComparisonSummary::default();

    for (key, record) in &calls {
        if truth_keys.contains(key.as_str()) {
            rows.push(ComparisonRow::from_record(
                record,
                MatchStatus::Match,
                VariantSource::Both,
            ));
            summary.matched += 1;
        }
    }
    for (key, record) in &calls {
        if !truth_keys.contains(key.as_str()) {
            rows.push(ComparisonRow::from_record(
                record,
                MatchStatus::Mismatch,
                VariantSource::VcfOnly,
            ));
            summary.vcf_only += 1;
        }
    }
    for (key, record) in &truth {
        if !call_keys.contains(key.as_str()) {
            rows.push(ComparisonRow::from_record(
                record,
                MatchStatus::Mismatch,
                VariantSource::CsvOnly,
            ));
            summary.csv_only += 1;
        }
    }

    rows.sort_by_key(|row| row.position);
    log::info!(
        "Matched {}, VCF only {}, truth only {}",
        summary.matched,
        summary.vcf_only,
        summary.csv_only
    );
    Comparison { rows, summary }
}

impl Comparison {
    /// Write rows as CSV with a `POS,REF,ALT,Type,Match_Status,Source` header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), CompareError> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        if self.rows.is_empty() {
            writer.write_record(["POS", "REF", "ALT", "Type", "Match_Status", "Source"])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<(), CompareError> {
        self.write_csv(BufWriter::new(File::create(path)?))
    }
}
