//! Low-confidence calls in a two-sample merged VCF
//!
//! A merged VCF carries the same site as called by two tools, one sample
//! column each. A site is flagged when its quality is low, when either tool
//! reports a heterozygous genotype on a haploid genome, or when the two
//! genotypes disagree.

use crate::errors::CompareError;
use crate::io::open_reader;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// Sites with QUAL below this value are flagged.
pub const LOW_QUAL_THRESHOLD: f64 = 20.0;

/// Genotype treated as a spurious heterozygous call.
const HETEROZYGOUS_GT: &str = "0/1";

/// Reason a call is considered unreliable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceFlag {
    LowQual,
    FakeHeterozygous,
    ToolMismatch,
}

impl ConfidenceFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LowQual => "Low_QUAL",
            Self::FakeHeterozygous => "Fake_Heterozygous",
            Self::ToolMismatch => "Tool_Mismatch",
        }
    }
}

impl fmt::Display for ConfidenceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One site of a merged VCF with the genotype of each sample.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedCall {
    pub chrom: String,
    pub position: usize,
    pub reference: String,
    pub alternate: String,
    /// Missing or unparsable QUAL reads as 0.0.
    pub qual: f64,
    /// Genotype of the first sample (bcftools in the reference pipeline).
    pub first_gt: String,
    /// Genotype of the second sample (snippy in the reference pipeline).
    pub second_gt: String,
}

impl MergedCall {
    /// Every flag that applies to this site, in a fixed order.
    pub fn flags(&self) -> Vec<ConfidenceFlag> {
        let mut flags = Vec::new();
        if self.qual < LOW_QUAL_THRESHOLD {
            flags.push(ConfidenceFlag::LowQual);
        }
        if self.first_gt == HETEROZYGOUS_GT || self.second_gt == HETEROZYGOUS_GT {
            flags.push(ConfidenceFlag::FakeHeterozygous);
        }
        if self.first_gt != self.second_gt {
            flags.push(ConfidenceFlag::ToolMismatch);
        }
        flags
    }
}

/// A flagged site and the reasons it was flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct LowConfidenceCall {
    pub call: MergedCall,
    pub flags: Vec<ConfidenceFlag>,
}

impl LowConfidenceCall {
    /// Flags joined with `;`.
    pub fn reason(&self) -> String {
        self.flags
            .iter()
            .map(|flag| flag.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Parse a merged VCF.
///
/// Header lines are skipped, as are rows with fewer than eleven columns and
/// rows whose FORMAT has no `GT` key. A sample lacking the `GT` entry reads
/// as `.`.
pub fn parse_merged_vcf<R: BufRead>(reader: R) -> Result<Vec<MergedCall>, CompareError> {
    let mut calls = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
        if fields.len() < 11 {
            log::debug!("Skipping line {}: {} columns", idx + 1, fields.len());
            continue;
        }
        let Some(gt_index) = fields[8].split(':').position(|key| key == "GT") else {
            continue;
        };
        let position: usize = fields[1].parse().map_err(|_| CompareError::Parse {
            line: idx + 1,
            message: format!("invalid POS '{}'", fields[1]),
        })?;
        let genotype = |sample: &str| {
            sample
                .split(':')
                .nth(gt_index)
                .unwrap_or(".")
                .to_string()
        };
        calls.push(MergedCall {
            chrom: fields[0].to_string(),
            position,
            reference: fields[3].to_string(),
            alternate: fields[4].to_string(),
            qual: fields[5].parse().unwrap_or(0.0),
            first_gt: genotype(fields[9]),
            second_gt: genotype(fields[10]),
        });
    }
    log::debug!("Parsed {} merged calls", calls.len());
    Ok(calls)
}

/// Read a merged VCF, gzip-compressed when the name ends in `.gz`.
pub fn read_merged_vcf(path: impl AsRef<Path>) -> Result<Vec<MergedCall>, CompareError> {
    parse_merged_vcf(open_reader(path)?)
}

/// Keep the calls with at least one flag, in input order.
pub fn flag_low_confidence(calls: &[MergedCall]) -> Vec<LowConfidenceCall> {
    let flagged: Vec<LowConfidenceCall> = calls
        .iter()
        .filter_map(|call| {
            let flags = call.flags();
            (!flags.is_empty()).then(|| LowConfidenceCall {
                call: call.clone(),
                flags,
            })
        })
        .collect();
    log::info!("Found {} low-confidence calls of {}", flagged.len(), calls.len());
    flagged
}

/// Write flagged calls as CSV with a
/// `CHROM,POS,REF,ALT,QUAL,GT_bcf,GT_snippy,Reason` header.
///
/// Genotypes are prefixed with `'` so spreadsheet tools keep `0/1` as text.
pub fn write_low_confidence_csv<W: Write>(
    writer: W,
    flagged: &[LowConfidenceCall],
) -> Result<(), CompareError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([
        "CHROM", "POS", "REF", "ALT", "QUAL", "GT_bcf", "GT_snippy", "Reason",
    ])?;
    for entry in flagged {
        let call = &entry.call;
        writer.write_record([
            call.chrom.clone(),
            call.position.to_string(),
            call.reference.clone(),
            call.alternate.clone(),
            format!("{:?}", call.qual),
            format!("'{}", call.first_gt),
            format!("'{}", call.second_gt),
            entry.reason(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_low_confidence_csv(
    path: impl AsRef<Path>,
    flagged: &[LowConfidenceCall],
) -> Result<(), CompareError> {
    write_low_confidence_csv(BufWriter::new(File::create(path)?), flagged)
}
