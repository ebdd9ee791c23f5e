mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use args::{CompareArgs, ConfidenceArgs, ConfigArgs, MutateArgs, ReadsArgs};
use commands::{compare, confidence, config, mutate, reads};

/// Varspike: ground-truth variant simulation
///
/// Spikes SNPs and indels into a reference sequence, keeps an exact record of
/// every change in reference coordinates, and scores variant calls against it.
#[derive(Parser, Debug)]
#[command(name = "varspike")]
#[command(author, version, about = "Simulates ground-truth variants and scores calls against them", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mutate a reference and record the changes.
    ///
    /// Writes the mutated sequence with its report table, and a CSV truth set.
    Mutate(Box<MutateArgs>),

    /// Sample paired-end reads from a genome.
    Reads(Box<ReadsArgs>),

    /// Compare variant calls (VCF) against a truth set (CSV).
    Compare(CompareArgs),

    /// Flag low-confidence calls in a two-caller merged VCF.
    ///
    /// A call is flagged for low QUAL, a heterozygous genotype, or
    /// disagreement between the two callers.
    Confidence(ConfidenceArgs),

    /// Write a default configuration file.
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Mutate(args) => mutate::mutate_reference(&args)?,
        Commands::Reads(args) => reads::simulate_reads(&args)?,
        Commands::Compare(args) => compare::compare_calls(&args)?,
        Commands::Confidence(args) => confidence::flag_calls(&args)?,
        Commands::Config(args) => config::write_config(&args)?,
    }

    Ok(())
}
