use anyhow::{Context, Result};
use varspike_sim::simulation::{MutationConfig, ReadSimConfig};

use crate::args::ConfigArgs;
use crate::printing::{print_mutation_parameters, print_read_parameters};

/// Write a default configuration that `--config` can load back.
pub fn write_config(args: &ConfigArgs) -> Result<()> {
    if args.reads {
        let config = ReadSimConfig::default();
        config
            .save(&args.output)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
        print_read_parameters(&config);
    } else {
        let config = MutationConfig::default();
        config
            .save(&args.output)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
        print_mutation_parameters(&config);
    }
    println!("\n✓ Configuration written to {}", args.output.display());
    Ok(())
}
