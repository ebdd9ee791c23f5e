use anyhow::{Context, Result};
use varspike_sim::simulation::MutationRun;

use crate::args::MutateArgs;
use crate::printing::{print_mutation_parameters, print_mutation_summary};

pub fn mutate_reference(args: &MutateArgs) -> Result<()> {
    let config = args.resolve_config()?;
    print_mutation_parameters(&config);

    let run = MutationRun::new(config)?;
    let outcome = run.run(&args.reference, &args.outdir).with_context(|| {
        format!(
            "Failed to mutate reference {}",
            args.reference.display()
        )
    })?;

    println!("\n{}", outcome.report);
    print_mutation_summary(&outcome);
    println!("\n✓ Mutation complete!");
    Ok(())
}
