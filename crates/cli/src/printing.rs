use varspike_analysis::analysis::{ComparisonSummary, ConfidenceFlag, LowConfidenceCall};
use varspike_sim::editor::ChangeKind;
use varspike_sim::reads::ReadFiles;
use varspike_sim::simulation::{MutationConfig, MutationOutcome, ReadSimConfig};

pub fn print_mutation_parameters(config: &MutationConfig) {
    println!("\n📋 Mutation Configuration");
    println!("  • SNP Sites: {} [--snps]", config.snp_count);
    println!("  • Indel Operations: {} [--indels]", config.indel_count);
    println!(
        "  • Max Insertion: {} bp [--max-insertion]",
        config.max_insertion_length
    );
    println!(
        "  • Max Deletion: {} bp [--max-deletion]",
        config.max_deletion_length
    );
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
}

pub fn print_mutation_summary(outcome: &MutationOutcome) {
    let report = &outcome.report;
    println!("\n🧬 Recorded Variants");
    println!("  • SNPs: {}", report.count(ChangeKind::Snp));
    println!("  • Insertions: {}", report.count(ChangeKind::Insertion));
    println!("  • Deletions: {}", report.count(ChangeKind::Deletion));
    if let Some(seed) = outcome.seed {
        println!("  • Seed Used: {seed}");
    }
    if !outcome.warnings.is_empty() {
        println!("\n⚠️  Warnings");
        for warning in &outcome.warnings {
            println!("  • {warning}");
        }
    }
    println!("\n💾 Output");
    println!("  • Sequence: {}", outcome.sequence_path.display());
    println!("  • Report: {}", outcome.csv_path.display());
}

pub fn print_read_parameters(config: &ReadSimConfig) {
    println!("\n📋 Read Simulation Configuration");
    println!("  • Read Length: {} bp [--read-length]", config.read_length);
    match config.num_reads {
        Some(n) => println!("  • Read Pairs: {n} [--num-reads]"),
        None => println!("  • Coverage: {}x [--coverage]", config.coverage),
    }
    println!("  • Insert Size: {} bp [--insert-size]", config.insert_size);
    println!("  • Quality: {} [--quality]", config.quality);
}

pub fn print_read_summary(files: &ReadFiles) {
    println!("\n💾 Output");
    println!("  • Read Pairs: {}", files.pairs);
    println!("  • R1: {}", files.r1.display());
    println!("  • R2: {}", files.r2.display());
}

pub fn print_comparison_summary(summary: &ComparisonSummary) {
    println!("\n📊 Comparison Summary");
    println!("  • Matched: {}", summary.matched);
    println!("  • VCF Only: {}", summary.vcf_only);
    println!("  • CSV Only: {}", summary.csv_only);
    println!("  • Precision: {:.4}", summary.precision());
    println!("  • Recall: {:.4}", summary.recall());
}

pub fn print_confidence_summary(total: usize, flagged: &[LowConfidenceCall]) {
    println!("\n🔍 Low-Confidence Calls");
    println!("  • Calls Checked: {total}");
    println!("  • Flagged: {}", flagged.len());
    for flag in [
        ConfidenceFlag::LowQual,
        ConfidenceFlag::FakeHeterozygous,
        ConfidenceFlag::ToolMismatch,
    ] {
        let count = flagged.iter().filter(|f| f.flags.contains(&flag)).count();
        println!("  • {flag}: {count}");
    }
}
