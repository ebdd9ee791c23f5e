//! End-to-end mutation run.
//!
//! Loads a reference, protects substitution sites, applies indels, restores
//! the protected sites, and exports the mutated sequence and its report.

use crate::editor::{ChangeKind, MutationReport, SequenceEditor};
use crate::errors::{EditWarning, SimError};
use crate::io::read_reference;
use crate::simulation::MutationConfig;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// File name of the clean mutated sequence.
pub const MUTATED_SEQUENCE_FILE: &str = "simulated_mutated_genome.txt";
/// File name of the structured report export.
pub const REPORT_CSV_FILE: &str = "simulated_mutated_genome.csv";

/// Result of [`MutationRun::run`].
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    pub report: MutationReport,
    pub seed: Option<u64>,
    pub warnings: Vec<EditWarning>,
    pub sequence_path: PathBuf,
    pub csv_path: PathBuf,
}

/// A configured mutation run.
#[derive(Debug, Clone)]
pub struct MutationRun {
    config: MutationConfig,
}

impl MutationRun {
    pub fn new(config: MutationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MutationConfig {
        &self.config
    }

    /// Run the editing flow over `reference` and return the finished editor.
    pub fn mutate(&self, reference: &str) -> SequenceEditor {
        let mut editor =
            SequenceEditor::new(reference, self.config.seed).with_limits(self.config.limits());
        if let Some(seed) = editor.seed() {
            log::info!("Mutating {} bp with seed {seed}", reference.len());
        }
        editor
            .protect(self.config.snp_count)
            .perform_indels(self.config.indel_count)
            .restore();
        editor
    }

    /// Mutate the reference at `reference_path` and write both outputs into
    /// `outdir`.
    pub fn run(
        &self,
        reference_path: impl AsRef<Path>,
        outdir: impl AsRef<Path>,
    ) -> Result<MutationOutcome, SimError> {
        let reference = read_reference(reference_path)?;
        let editor = self.mutate(&reference);

        let outdir = outdir.as_ref();
        fs::create_dir_all(outdir)?;
        let sequence_path = outdir.join(MUTATED_SEQUENCE_FILE);
        let csv_path = outdir.join(REPORT_CSV_FILE);

        let report = editor.generate_report(BufWriter::new(File::create(&sequence_path)?))?;
        report.save_csv(&csv_path)?;

        log::info!(
            "Recorded {} SNPs, {} insertions, {} deletions",
            report.count(ChangeKind::Snp),
            report.count(ChangeKind::Insertion),
            report.count(ChangeKind::Deletion)
        );

        Ok(MutationOutcome {
            report,
            seed: editor.seed(),
            warnings: editor.warnings().to_vec(),
            sequence_path,
            csv_path,
        })
    }
}
