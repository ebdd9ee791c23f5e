use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use varspike_sim::simulation::{MutationConfig, ReadSimConfig};

use crate::defaults;

#[derive(Args, Debug)]
pub struct MutateArgs {
    /// Reference file (first line is a label, the rest is sequence)
    #[arg(short, long)]
    pub reference: PathBuf,

    /// Number of SNP sites [default: 300]
    #[arg(long)]
    pub snps: Option<usize>,

    /// Number of indel operations [default: 20]
    #[arg(long)]
    pub indels: Option<usize>,

    /// Longest random insertion [default: 10]
    #[arg(long)]
    pub max_insertion: Option<usize>,

    /// Longest random deletion [default: 10]
    #[arg(long)]
    pub max_deletion: Option<usize>,

    /// Random seed (default: random, logged for replay)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory
    #[arg(short, long, default_value = defaults::OUTDIR)]
    pub outdir: PathBuf,

    /// JSON configuration; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl MutateArgs {
    /// Configuration file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<MutationConfig> {
        let mut config = match &self.config {
            Some(path) => MutationConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => MutationConfig::default(),
        };
        if let Some(snps) = self.snps {
            config.snp_count = snps;
        }
        if let Some(indels) = self.indels {
            config.indel_count = indels;
        }
        if let Some(max) = self.max_insertion {
            config.max_insertion_length = max;
        }
        if let Some(max) = self.max_deletion {
            config.max_deletion_length = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate().context("Invalid mutation parameters")?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct ReadsArgs {
    /// Genome file (plain text or FASTA)
    #[arg(short, long)]
    pub genome: PathBuf,

    /// Output prefix; writes {prefix}_R1.fastq and {prefix}_R2.fastq
    #[arg(short, long)]
    pub prefix: PathBuf,

    /// Read length [default: 100]
    #[arg(long)]
    pub read_length: Option<usize>,

    /// Target coverage [default: 30]
    #[arg(long)]
    pub coverage: Option<f64>,

    /// Insert size [default: 300]
    #[arg(long)]
    pub insert_size: Option<usize>,

    /// Number of read pairs (default: derived from coverage)
    #[arg(long)]
    pub num_reads: Option<usize>,

    /// Quality character [default: I]
    #[arg(long)]
    pub quality: Option<char>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ReadsArgs {
    pub fn resolve_config(&self) -> Result<ReadSimConfig> {
        let mut config = match &self.config {
            Some(path) => ReadSimConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ReadSimConfig::default(),
        };
        if let Some(read_length) = self.read_length {
            config.read_length = read_length;
        }
        if let Some(coverage) = self.coverage {
            config.coverage = coverage;
        }
        if let Some(insert_size) = self.insert_size {
            config.insert_size = insert_size;
        }
        if self.num_reads.is_some() {
            config.num_reads = self.num_reads;
        }
        if let Some(quality) = self.quality {
            config.quality = quality;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate().context("Invalid read simulation parameters")?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Variant calls (VCF)
    #[arg(long)]
    pub vcf: PathBuf,

    /// Truth set (CSV written by `varspike mutate`)
    #[arg(long)]
    pub truth: PathBuf,

    /// Comparison output (CSV)
    #[arg(short, long, default_value = defaults::COMPARISON_FILE)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConfidenceArgs {
    /// Merged VCF with two sample columns, plain or gzip-compressed
    #[arg(long)]
    pub vcf: PathBuf,

    /// Flagged calls output (CSV)
    #[arg(short, long, default_value = defaults::CONFIDENCE_FILE)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Where to write the configuration
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Write a read simulation configuration instead of a mutation one
    #[arg(long)]
    pub reads: bool,
}
