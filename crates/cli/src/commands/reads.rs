use anyhow::{Context, Result};
use varspike_sim::reads::simulate_paired_reads;

use crate::args::ReadsArgs;
use crate::printing::{print_read_parameters, print_read_summary};

pub fn simulate_reads(args: &ReadsArgs) -> Result<()> {
    let config = args.resolve_config()?;
    print_read_parameters(&config);

    let files = simulate_paired_reads(&args.genome, &args.prefix, &config)
        .with_context(|| format!("Failed to simulate reads from {}", args.genome.display()))?;

    print_read_summary(&files);
    println!("\n✓ Read simulation complete!");
    Ok(())
}
