use super::{Operation, SequenceEditor};
use crate::errors::ReportError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

/// Display width of the REF and ALT columns.
const ALLELE_WIDTH: usize = 50;

static SPAN_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<<<IN_\d+(?:_END)?_IN>>>").expect("span marker pattern is valid")
});

/// Remove every begin and end span marker from `text`.
///
/// Text without markers comes back unchanged, so applying this twice is the
/// same as applying it once.
pub fn strip_span_markers(text: &str) -> String {
    SPAN_MARKER.replace_all(text, "").into_owned()
}

/// Kind of change in a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    #[serde(rename = "SNP")]
    Snp,
    Insertion,
    Deletion,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snp => "SNP",
            Self::Insertion => "Insertion",
            Self::Deletion => "Deletion",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One VCF-style row.
///
/// SNP positions are 1-based; insertion and deletion positions are the raw
/// reference coordinate of the edit, anchored on the preceding base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(rename = "Operation")]
    pub kind: ChangeKind,
    #[serde(rename = "POS")]
    pub position: usize,
    #[serde(rename = "REF")]
    pub reference: String,
    #[serde(rename = "ALT")]
    pub alternate: String,
}

/// Position-sorted change report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReport {
    entries: Vec<ReportEntry>,
}

impl MutationReport {
    /// Sort `entries` by position, keeping insertion order among ties.
    pub fn new(mut entries: Vec<ReportEntry>) -> Self {
        entries.sort_by_key(|entry| entry.position);
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter()
    }

    /// Count of rows of the given kind.
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Write the rows as CSV with an `Operation,POS,REF,ALT` header.
    ///
    /// Alleles are written in full.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(["Operation", "POS", "REF", "ALT"])?;
        for entry in &self.entries {
            let position = entry.position.to_string();
            writer.write_record([
                entry.kind.as_str(),
                position.as_str(),
                entry.reference.as_str(),
                entry.alternate.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the CSV export to `path`.
    pub fn save_csv(&self, path: &Path) -> Result<(), ReportError> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))
    }
}

fn truncate_allele(allele: &str) -> String {
    if allele.chars().count() <= ALLELE_WIDTH {
        allele.to_string()
    } else {
        let head: String = allele.chars().take(ALLELE_WIDTH - 3).collect();
        format!("{head}...")
    }
}

impl fmt::Display for MutationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {:<10} {:<50} {:<50}", "Operation", "POS", "REF", "ALT")?;
        for entry in &self.entries {
            write!(
                f,
                "\n{:<12} {:<10} {:<50} {:<50}",
                entry.kind,
                entry.position,
                truncate_allele(&entry.reference),
                truncate_allele(&entry.alternate)
            )?;
        }
        Ok(())
    }
}

impl SequenceEditor {
    /// The working sequence as plain text.
    ///
    /// Inserted bases stay in place without markers. Sentinels are rendered
    /// as-is until [`restore`](Self::restore) has run.
    pub fn final_sequence(&self) -> String {
        self.sequence.to_string()
    }

    /// The working sequence with each span wrapped in its begin and end
    /// markers.
    pub fn marked_sequence(&self) -> String {
        let mut text = String::with_capacity(self.sequence.len());
        let mut cursor = 0;
        for span in self.spans.iter() {
            text.push_str(&self.sequence.render(cursor..span.start()));
            text.push_str(&format!("<<<IN_{}_IN>>>", span.id()));
            text.push_str(&self.sequence.render(span.range()));
            text.push_str(&format!("<<<IN_{}_END_IN>>>", span.id()));
            cursor = span.end();
        }
        text.push_str(&self.sequence.render(cursor..self.sequence.len()));
        text
    }

    /// Reference base immediately before `coordinate`, as text.
    fn anchor(&self, coordinate: usize) -> String {
        coordinate
            .checked_sub(1)
            .and_then(|prev| self.reference.get(prev))
            .map(|symbol| symbol.to_char().to_string())
            .unwrap_or_default()
    }

    /// Merge substitutions and indels into one position-sorted report.
    pub fn report(&self) -> MutationReport {
        let snps = self.snp_records.iter().map(|snp| ReportEntry {
            kind: ChangeKind::Snp,
            position: snp.coordinate + 1,
            reference: snp.reference.to_char().to_string(),
            alternate: snp.alternate.to_char().to_string(),
        });
        let indels = self.operations.iter().map(|op| {
            let anchor = self.anchor(op.coordinate());
            match op {
                Operation::Insert {
                    coordinate,
                    sequence,
                } => ReportEntry {
                    kind: ChangeKind::Insertion,
                    position: *coordinate,
                    alternate: format!("{anchor}{sequence}"),
                    reference: anchor,
                },
                Operation::Delete {
                    coordinate,
                    deleted,
                } => ReportEntry {
                    kind: ChangeKind::Deletion,
                    position: *coordinate,
                    reference: format!("{anchor}{deleted}"),
                    alternate: anchor,
                },
            }
        });
        MutationReport::new(snps.chain(indels).collect())
    }

    /// Build the report and write the final sequence to `sink`.
    pub fn generate_report<W: Write>(&self, mut sink: W) -> Result<MutationReport, ReportError> {
        sink.write_all(self.final_sequence().as_bytes())?;
        sink.flush()?;
        Ok(self.report())
    }
}
