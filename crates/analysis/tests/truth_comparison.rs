use std::fmt::Write as _;
use tempfile::tempdir;
use varspike_analysis::analysis::{VariantSource, compare_variants, read_truth_csv, read_vcf};
use varspike_sim::prelude::*;

fn mutated_report(seed: u64) -> MutationReport {
    let reference = "ACGTTGCAAGCT".repeat(40);
    let mut editor = SequenceEditor::new(&reference, Some(seed));
    editor.protect(15).perform_indels(8).restore();
    editor.report()
}

fn report_as_vcf(report: &MutationReport, skip: usize) -> String {
    let mut vcf = String::from("##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\n");
    for entry in report.iter().skip(skip) {
        writeln!(
            vcf,
            "ref\t{}\t.\t{}\t{}",
            entry.position, entry.reference, entry.alternate
        )
        .unwrap();
    }
    vcf
}

#[test]
fn perfect_calls_match_the_truth_set() {
    let dir = tempdir().unwrap();
    let report = mutated_report(3);
    let truth_path = dir.path().join("truth.csv");
    report.save_csv(&truth_path).unwrap();
    let vcf_path = dir.path().join("calls.vcf");
    std::fs::write(&vcf_path, report_as_vcf(&report, 0)).unwrap();

    let truth = read_truth_csv(&truth_path).unwrap();
    let calls = read_vcf(&vcf_path).unwrap();
    assert_eq!(truth.len(), report.len());

    let comparison = compare_variants(&calls, &truth);
    assert_eq!(comparison.summary.vcf_only, 0);
    assert_eq!(comparison.summary.csv_only, 0);
    assert_eq!(comparison.summary.precision(), 1.0);
    assert_eq!(comparison.summary.recall(), 1.0);
    assert!(comparison.rows.iter().all(|r| r.source == VariantSource::Both));
}

#[test]
fn missed_calls_are_truth_only() {
    let dir = tempdir().unwrap();
    let report = mutated_report(4);
    let truth_path = dir.path().join("truth.csv");
    report.save_csv(&truth_path).unwrap();
    let vcf_path = dir.path().join("calls.vcf");
    std::fs::write(&vcf_path, report_as_vcf(&report, 2)).unwrap();

    let comparison = compare_variants(
        &read_vcf(&vcf_path).unwrap(),
        &read_truth_csv(&truth_path).unwrap(),
    );
    assert_eq!(comparison.summary.vcf_only, 0);
    assert_eq!(comparison.summary.csv_only, 2);
    assert_eq!(comparison.summary.precision(), 1.0);
    assert!(comparison.summary.recall() < 1.0);

    let out = dir.path().join("comparison.csv");
    comparison.save_csv(&out).unwrap();
    let text = std::fs::read_to_string(out).unwrap();
    assert_eq!(text.lines().count(), comparison.rows.len() + 1);
    assert_eq!(text.matches("CSV_only").count(), 2);
}
