//! Paired-end short-read sampling.
//!
//! Pairs are drawn uniformly from a genome with a fixed insert size: R1 reads
//! forward from the pair start, R2 is the reverse complement of the window
//! `insert_size` bases downstream. Reads carry a constant quality string and
//! are written as FASTQ.

use crate::base::Nucleotide;
use crate::errors::SimError;
use crate::io::read_genome;
use crate::simulation::ReadSimConfig;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One FASTQ entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub sequence: String,
    pub quality: String,
}

impl FastqRecord {
    fn new(id: String, sequence: String, quality: char) -> Self {
        let quality = quality.to_string().repeat(sequence.chars().count());
        Self {
            id,
            sequence,
            quality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadPair {
    pub r1: FastqRecord,
    pub r2: FastqRecord,
}

/// Reverse complement; anything outside `ACGT` becomes `N`.
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .chars()
        .rev()
        .map(|c| {
            u8::try_from(c)
                .ok()
                .and_then(Nucleotide::from_ascii)
                .map(|base| base.complement().to_char())
                .unwrap_or('N')
        })
        .collect()
}

/// Sample read pairs from `genome`.
///
/// Returns no pairs when the genome is not longer than one insert plus one
/// read.
pub fn sample_read_pairs<R: Rng>(
    genome: &str,
    config: &ReadSimConfig,
    rng: &mut R,
) -> Vec<ReadPair> {
    let bases: Vec<char> = genome.chars().collect();
    let genome_len = bases.len();
    let read_length = config.read_length;
    let count = config.pair_count(genome_len);

    let max_start = genome_len.saturating_sub(config.insert_size.saturating_add(read_length));
    if max_start == 0 {
        log::warn!(
            "Genome of {genome_len} bp is too short for insert size {} and read length {read_length}",
            config.insert_size
        );
        return Vec::new();
    }

    (1..=count)
        .map(|n| {
            let start = rng.random_range(0..=max_start);
            let r1: String = bases[start..start + read_length].iter().collect();
            let mate_start = start + config.insert_size;
            let mate: String = bases[mate_start..mate_start + read_length].iter().collect();
            ReadPair {
                r1: FastqRecord::new(format!("read_{n}/1"), r1, config.quality),
                r2: FastqRecord::new(
                    format!("read_{n}/2"),
                    reverse_complement(&mate),
                    config.quality,
                ),
            }
        })
        .collect()
}

/// Write `records` as FASTQ and return how many were written.
///
/// A record whose quality length differs from its sequence length is skipped
/// with a warning.
pub fn write_fastq<'a, W, I>(writer: W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a FastqRecord>,
{
    let mut writer = BufWriter::new(writer);
    let mut written = 0;
    for record in records {
        if record.sequence.chars().count() != record.quality.chars().count() {
            log::warn!(
                "{} sequence length and quality length do not match, skipped",
                record.id
            );
            continue;
        }
        writeln!(writer, "@{}\n{}\n+\n{}", record.id, record.sequence, record.quality)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Paths and size of a simulated read set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFiles {
    pub r1: PathBuf,
    pub r2: PathBuf,
    pub pairs: usize,
}

fn mate_path(prefix: &Path, mate: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("_{mate}.fastq"));
    PathBuf::from(name)
}

/// Read a genome file and write `{prefix}_R1.fastq` and `{prefix}_R2.fastq`.
pub fn simulate_paired_reads(
    genome_path: impl AsRef<Path>,
    prefix: impl AsRef<Path>,
    config: &ReadSimConfig,
) -> Result<ReadFiles, SimError> {
    config.validate()?;
    let genome = read_genome(genome_path)?;

    let mut rng = if let Some(seed) = config.seed {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    } else {
        Xoshiro256PlusPlus::from_seed(rand::rng().random())
    };
    let pairs = sample_read_pairs(&genome, config, &mut rng);

    let prefix = prefix.as_ref();
    let r1 = mate_path(prefix, "R1");
    let r2 = mate_path(prefix, "R2");
    write_fastq(File::create(&r1)?, pairs.iter().map(|p| &p.r1))?;
    write_fastq(File::create(&r2)?, pairs.iter().map(|p| &p.r2))?;
    log::info!(
        "Saved {} read pairs to {} and {}",
        pairs.len(),
        r1.display(),
        r2.display()
    );

    Ok(ReadFiles {
        r1,
        r2,
        pairs: pairs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(len: usize) -> String {
        "ACGTTGCA".repeat(len / 8 + 1)[..len].to_string()
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("AACGT"), "ACGTT");
        assert_eq!(reverse_complement("ANX"), "NNT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn test_sample_pairs_geometry() {
        let genome = genome(1000);
        let config = ReadSimConfig {
            read_length: 50,
            insert_size: 200,
            num_reads: Some(25),
            ..Default::default()
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let pairs = sample_read_pairs(&genome, &config, &mut rng);
        assert_eq!(pairs.len(), 25);

        for (i, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.r1.id, format!("read_{}/1", i + 1));
            assert_eq!(pair.r2.id, format!("read_{}/2", i + 1));
            assert_eq!(pair.r1.sequence.len(), 50);
            assert_eq!(pair.r1.quality, "I".repeat(50));

            let start = genome.find(&pair.r1.sequence).unwrap();
            // The sequence is periodic, so check the mate against any match.
            let mate = reverse_complement(&pair.r2.sequence);
            let expected = &genome[start + 200..start + 250];
            assert_eq!(mate, expected);
        }
    }

    #[test]
    fn test_coverage_derived_count() {
        let genome = genome(2000);
        let config = ReadSimConfig {
            read_length: 100,
            coverage: 10.0,
            insert_size: 300,
            ..Default::default()
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        // 2000 * 10 / 200
        assert_eq!(sample_read_pairs(&genome, &config, &mut rng).len(), 100);
    }

    #[test]
    fn test_short_genome_yields_nothing() {
        let genome = genome(400);
        let config = ReadSimConfig::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert!(sample_read_pairs(&genome, &config, &mut rng).is_empty());
    }

    #[test]
    fn test_huge_insert_size_yields_nothing() {
        let genome = genome(1000);
        let config = ReadSimConfig {
            insert_size: usize::MAX,
            num_reads: Some(3),
            ..Default::default()
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert!(sample_read_pairs(&genome, &config, &mut rng).is_empty());
    }

    #[test]
    fn test_non_ascii_genome_is_sampled_by_character() {
        let genome = format!("é{}", genome(399));
        let config = ReadSimConfig {
            read_length: 10,
            insert_size: 20,
            num_reads: Some(50),
            ..Default::default()
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        for pair in sample_read_pairs(&genome, &config, &mut rng) {
            assert_eq!(pair.r1.sequence.chars().count(), 10);
            assert_eq!(pair.r1.quality.len(), 10);
            assert_eq!(pair.r2.sequence.len(), 10);
        }
    }

    #[test]
    fn test_write_fastq_skips_mismatched_quality() {
        let good = FastqRecord::new("read_1/1".into(), "ACGT".into(), 'I');
        let bad = FastqRecord {
            id: "read_2/1".into(),
            sequence: "ACGT".into(),
            quality: "II".into(),
        };
        let mut buf = Vec::new();
        let written = write_fastq(&mut buf, [&good, &bad]).unwrap();
        assert_eq!(written, 1);
        assert_eq!(String::from_utf8(buf).unwrap(), "@read_1/1\nACGT\n+\nIIII\n");
    }

    #[test]
    fn test_mate_path() {
        assert_eq!(
            mate_path(Path::new("out/sample"), "R1"),
            PathBuf::from("out/sample_R1.fastq")
        );
    }
}
