use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use varspike_sim::base::Nucleotide;
use varspike_sim::editor::{SequenceEditor, strip_span_markers};

fn reference(len: usize) -> String {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    (0..len)
        .map(|_| Nucleotide::ALL[rng.random_range(0..4)].to_char())
        .collect()
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor_full_run");

    for &len in &[1_000usize, 10_000, 100_000] {
        let reference = reference(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &reference, |b, reference| {
            b.iter(|| {
                let mut editor = SequenceEditor::new(black_box(reference), Some(7));
                editor.protect(300).perform_indels(20).restore();
                black_box(editor.report())
            })
        });
    }

    group.finish();
}

fn bench_safe_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_ranges");

    let mut editor = SequenceEditor::new(&reference(50_000), Some(3));
    editor.protect(500).perform_indels(200);

    group.bench_function("deletion_ranges", |b| {
        b.iter(|| black_box(editor.safe_deletion_ranges()))
    });
    group.bench_function("insertion_offsets", |b| {
        b.iter(|| black_box(editor.safe_insertion_offsets()))
    });
    group.bench_function("offset_to_reference_coordinate", |b| {
        b.iter(|| black_box(editor.offset_to_reference_coordinate(black_box(25_000))))
    });

    group.finish();
}

fn bench_strip_markers(c: &mut Criterion) {
    let mut editor = SequenceEditor::new(&reference(20_000), Some(5));
    editor.perform_indels(500);
    let marked = editor.marked_sequence();

    c.bench_function("strip_span_markers", |b| {
        b.iter(|| black_box(strip_span_markers(black_box(&marked))))
    });
}

criterion_group!(benches, bench_full_run, bench_safe_ranges, bench_strip_markers);
criterion_main!(benches);
