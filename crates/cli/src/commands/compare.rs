use anyhow::{Context, Result};
use varspike_analysis::analysis::{compare_variants, read_truth_csv, read_vcf};

use crate::args::CompareArgs;
use crate::printing::print_comparison_summary;

pub fn compare_calls(args: &CompareArgs) -> Result<()> {
    let calls = read_vcf(&args.vcf)
        .with_context(|| format!("Failed to read VCF {}", args.vcf.display()))?;
    let truth = read_truth_csv(&args.truth)
        .with_context(|| format!("Failed to read truth set {}", args.truth.display()))?;
    log::info!(
        "Comparing {} calls against {} truth records",
        calls.len(),
        truth.len()
    );

    let comparison = compare_variants(&calls, &truth);
    comparison
        .save_csv(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_comparison_summary(&comparison.summary);
    println!("\n💾 Results saved to {}", args.output.display());
    Ok(())
}
