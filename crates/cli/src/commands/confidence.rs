use anyhow::{Context, Result};
use varspike_analysis::analysis::{flag_low_confidence, read_merged_vcf};
use varspike_analysis::confidence::save_low_confidence_csv;

use crate::args::ConfidenceArgs;
use crate::printing::print_confidence_summary;

pub fn flag_calls(args: &ConfidenceArgs) -> Result<()> {
    let calls = read_merged_vcf(&args.vcf)
        .with_context(|| format!("Failed to read merged VCF {}", args.vcf.display()))?;

    let flagged = flag_low_confidence(&calls);
    save_low_confidence_csv(&args.output, &flagged)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_confidence_summary(calls.len(), &flagged);
    println!("\n💾 Results saved to {}", args.output.display());
    Ok(())
}
