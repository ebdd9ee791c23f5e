use super::{IndelLimits, SequenceEditor};
use crate::base::{Nucleotide, Symbol};
use crate::errors::EditWarning;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// An applied indel, logged in application order.
///
/// `coordinate` is the reference coordinate resolved before the edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Insert { coordinate: usize, sequence: String },
    Delete { coordinate: usize, deleted: String },
}

impl Operation {
    #[inline]
    pub fn coordinate(&self) -> usize {
        match self {
            Self::Insert { coordinate, .. } | Self::Delete { coordinate, .. } => *coordinate,
        }
    }

    /// Inserted or deleted bases.
    #[inline]
    pub fn bases(&self) -> &str {
        match self {
            Self::Insert { sequence, .. } => sequence,
            Self::Delete { deleted, .. } => deleted,
        }
    }

    /// Number of symbols inserted or deleted.
    #[inline]
    pub fn len(&self) -> usize {
        self.bases().chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bases().is_empty()
    }
}

/// A pre-generated indel, drawn without looking at the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndelIntent {
    Insert(String),
    Delete(usize),
}

impl SequenceEditor {
    /// Insert `bases` at a uniformly random admissible offset.
    ///
    /// Returns the reference coordinate of the insertion point.
    pub fn insert_random(&mut self, bases: &str) -> usize {
        let offsets = self.safe_insertion_offsets();
        let offset = offsets[self.rng.random_range(0..offsets.len())];
        self.insert_at(offset, bases)
    }

    /// Insert `bases` before working offset `offset`.
    ///
    /// An offset past the end is clamped to the end; an offset inside
    /// inserted content moves left to that span's start. The coordinate is
    /// resolved before splicing and the position mapping is left untouched.
    pub fn insert_at(&mut self, offset: usize, bases: &str) -> usize {
        let mut offset = offset.min(self.sequence.len());
        if let Some(span) = self.spans.covering(offset)
            && span.start() < offset
        {
            offset = span.start();
        }
        let coordinate = self.offset_to_reference_coordinate(offset);
        if bases.is_empty() {
            return coordinate;
        }

        let symbols: Vec<Symbol> = bases.chars().map(Symbol::from_char).collect();
        let text: String = symbols.iter().map(|s| s.to_char()).collect();
        if let Err(err) = self.sequence.splice_in(offset, symbols) {
            log::warn!("Insertion skipped: {err}");
            return coordinate;
        }
        let id = self.spans.open(offset, &text);
        log::debug!("Inserted {text} (span {id}) at offset {offset}, coordinate {coordinate}");

        self.operations.push(Operation::Insert {
            coordinate,
            sequence: text,
        });
        coordinate
    }

    /// Delete up to `length` bases from a uniformly random safe window.
    ///
    /// Requests beyond the current capacity are clamped with a warning; with
    /// no capacity nothing happens and `None` is returned. A window never
    /// crosses from one safe range into the next: it is clipped at the end of
    /// the range it starts in.
    pub fn delete_random(&mut self, length: usize) -> Option<usize> {
        let (ranges, length) = self.clamp_deletion(length)?;
        let capacity: usize = ranges.iter().map(|range| range.len()).sum();
        let flat_start = self.rng.random_range(0..=capacity - length);
        self.apply_deletion(&ranges, flat_start, length)
    }

    /// Delete up to `length` bases starting at `flat_start` within the
    /// concatenated safe ranges.
    ///
    /// Capacity handling matches [`delete_random`](Self::delete_random);
    /// `flat_start` is clamped so the window fits the flattened capacity.
    pub fn delete_at(&mut self, flat_start: usize, length: usize) -> Option<usize> {
        let (ranges, length) = self.clamp_deletion(length)?;
        let capacity: usize = ranges.iter().map(|range| range.len()).sum();
        self.apply_deletion(&ranges, flat_start.min(capacity - length), length)
    }

    /// Current safe ranges plus the length that can actually be deleted.
    fn clamp_deletion(&mut self, requested: usize) -> Option<(Vec<Range<usize>>, usize)> {
        if requested == 0 {
            return None;
        }
        let ranges = self.safe_deletion_ranges();
        let available: usize = ranges.iter().map(|range| range.len()).sum();
        if available == 0 {
            self.warn(EditWarning::NoCapacity { requested });
            return None;
        }
        if available < requested {
            self.warn(EditWarning::Capacity {
                requested,
                available,
            });
            return Some((ranges, available));
        }
        Some((ranges, requested))
    }

    fn apply_deletion(
        &mut self,
        ranges: &[Range<usize>],
        flat_start: usize,
        length: usize,
    ) -> Option<usize> {
        let mut seen = 0;
        let window = ranges.iter().find_map(|range| {
            if flat_start < seen + range.len() {
                let start = range.start + (flat_start - seen);
                Some(start..(start + length).min(range.end))
            } else {
                seen += range.len();
                None
            }
        })?;

        let coordinate = self.offset_to_reference_coordinate(window.start);
        let first = self.offset_to_mapping_index(window.start);
        let last = self.offset_to_mapping_index(window.end);

        let removed = match self.sequence.excise(window.clone()) {
            Ok(removed) => removed,
            Err(err) => {
                log::warn!("Deletion skipped: {err}");
                return None;
            }
        };
        self.mapping.remove(first..last);
        self.spans.excise(window.clone());

        let deleted = removed.to_string();
        log::debug!(
            "Deleted {deleted} at offsets {}..{}, coordinate {coordinate}",
            window.start,
            window.end
        );
        self.operations.push(Operation::Delete {
            coordinate,
            deleted,
        });
        Some(coordinate)
    }

    /// Draw `count` independent indel intents.
    ///
    /// Each is an insertion or a deletion with equal probability; insertions
    /// are random bases of length `1..=max_insertion`, deletions have length
    /// `1..=max_deletion`.
    pub fn generate_intents(&mut self, count: usize) -> Vec<IndelIntent> {
        let IndelLimits {
            max_insertion,
            max_deletion,
        } = self.limits;
        (0..count)
            .map(|_| {
                if self.rng.random_bool(0.5) {
                    let length = self.rng.random_range(1..=max_insertion.max(1));
                    let bases: String = (0..length)
                        .map(|_| {
                            Nucleotide::ALL[self.rng.random_range(0..Nucleotide::ALL.len())]
                                .to_char()
                        })
                        .collect();
                    IndelIntent::Insert(bases)
                } else {
                    IndelIntent::Delete(self.rng.random_range(1..=max_deletion.max(1)))
                }
            })
            .collect()
    }

    /// Apply one intent against the current state.
    pub fn apply_intent(&mut self, intent: &IndelIntent) -> Option<usize> {
        match intent {
            IndelIntent::Insert(bases) => Some(self.insert_random(bases)),
            IndelIntent::Delete(length) => self.delete_random(*length),
        }
    }

    /// Apply `intents` last-generated first.
    pub fn apply_intents(&mut self, intents: &[IndelIntent]) {
        for intent in intents.iter().rev() {
            self.apply_intent(intent);
        }
    }

    /// Generate `count` intents, then apply them in reverse order.
    pub fn perform_indels(&mut self, count: usize) -> &mut Self {
        let intents = self.generate_intents(count);
        self.apply_intents(&intents);
        log::info!(
            "Applied {} of {count} indels ({} warnings)",
            self.operations.len(),
            self.warnings.len()
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_keeps_mapping() {
        let mut editor = SequenceEditor::new("ACGT", Some(1));
        let coordinate = editor.insert_at(2, "tt");
        assert_eq!(coordinate, 2);
        assert_eq!(editor.sequence().to_string(), "ACTTGT");
        assert_eq!(editor.mapping().len(), 4);
        assert_eq!(
            editor.operations(),
            &[Operation::Insert {
                coordinate: 2,
                sequence: "TT".to_string(),
            }]
        );
    }

    #[test]
    fn test_insert_at_inside_span_moves_left() {
        let mut editor = SequenceEditor::new("ACGT", Some(1));
        editor.insert_at(1, "GGGG"); // span [1, 5)
        let coordinate = editor.insert_at(3, "C");
        assert_eq!(coordinate, 1);
        assert_eq!(editor.sequence().to_string(), "ACGGGGCGT");
        let ranges: Vec<Range<usize>> = editor.spans().iter().map(|s| s.range()).collect();
        assert_eq!(ranges, vec![1..2, 2..6]);
    }

    #[test]
    fn test_insert_at_end_uses_fallback() {
        let mut editor = SequenceEditor::new("ACGT", Some(1));
        assert_eq!(editor.insert_at(100, "A"), 4);
        assert_eq!(editor.sequence().to_string(), "ACGTA");
    }

    #[test]
    fn test_non_ascii_insert_covers_only_its_symbols() {
        let mut editor = SequenceEditor::new("ACGTACGT", Some(1));
        assert_eq!(editor.insert_at(2, "é"), 2);
        assert_eq!(editor.sequence().len(), 9);
        assert_eq!(editor.spans().total_covered(), 1);
        let real = editor.sequence().len() - editor.spans().total_covered();
        assert_eq!(real, editor.mapping().len());
        assert_eq!(editor.operations()[0].len(), 1);
        assert_eq!(editor.safe_deletion_ranges(), vec![0..2, 3..9]);
        assert_eq!(editor.offset_to_reference_coordinate(3), 2);

        // A deletion right after the insert removes real bases only
        assert_eq!(editor.delete_at(2, 2), Some(2));
        assert_eq!(editor.final_sequence(), "ACéACGT");
        assert_eq!(editor.mapping().as_slice(), &[0, 1, 4, 5, 6, 7]);
    }

    #[test]
    fn test_empty_insert_is_noop() {
        let mut editor = SequenceEditor::new("ACGT", Some(1));
        assert_eq!(editor.insert_at(2, ""), 2);
        assert!(editor.operations().is_empty());
        assert!(editor.spans().is_empty());
    }

    #[test]
    fn test_delete_at_removes_real_symbols() {
        let mut editor = SequenceEditor::new("ACGTACGTAC", Some(1));
        assert_eq!(editor.delete_at(3, 4), Some(3));
        assert_eq!(editor.sequence().to_string(), "ACGTAC");
        assert_eq!(editor.mapping().as_slice(), &[0, 1, 2, 7, 8, 9]);
        assert_eq!(
            editor.operations(),
            &[Operation::Delete {
                coordinate: 3,
                deleted: "TACG".to_string(),
            }]
        );
    }

    #[test]
    fn test_delete_is_clipped_at_range_end() {
        let mut editor = SequenceEditor::new("AAAAAAAAAA", Some(1));
        editor.protect_offsets(&[4]);
        // Safe ranges [0, 4) and [5, 10); a window starting at 2 stops at 4.
        assert_eq!(editor.delete_at(2, 5), Some(2));
        assert_eq!(editor.operations()[0].len(), 2);
        assert_eq!(editor.mapping().len(), 8);
        assert_eq!(editor.sequence().to_string(), "AA@AAAAA");
    }

    #[test]
    fn test_delete_skips_over_spans() {
        let mut editor = SequenceEditor::new("ACGT", Some(1));
        editor.insert_at(2, "TTT"); // "AC" + span + "GT"
        // Flat offset 2 is the first base after the span.
        assert_eq!(editor.delete_at(2, 2), Some(2));
        assert_eq!(editor.sequence().to_string(), "ACTTT");
        assert_eq!(editor.spans().len(), 1);
        assert_eq!(editor.mapping().as_slice(), &[0, 1]);
    }

    #[test]
    fn test_zero_length_delete_is_noop() {
        let mut editor = SequenceEditor::new("ACGT", Some(1));
        assert_eq!(editor.delete_random(0), None);
        assert!(editor.operations().is_empty());
        assert!(editor.warnings().is_empty());
    }

    #[test]
    fn test_capacity_clamp_warns() {
        let mut editor = SequenceEditor::new("ACG", Some(1));
        assert_eq!(editor.delete_random(5), Some(0));
        assert_eq!(editor.sequence().to_string(), "");
        assert_eq!(
            editor.warnings(),
            &[EditWarning::Capacity {
                requested: 5,
                available: 3,
            }]
        );
    }

    #[test]
    fn test_no_capacity_warns_and_skips() {
        let mut editor = SequenceEditor::new("AC", Some(1));
        editor.protect_offsets(&[0, 1]);
        assert_eq!(editor.delete_random(1), None);
        assert_eq!(editor.sequence().to_string(), "@%");
        assert!(editor.operations().is_empty());
        assert_eq!(editor.warnings(), &[EditWarning::NoCapacity { requested: 1 }]);
    }

    #[test]
    fn test_generate_intents_respects_limits() {
        let mut editor = SequenceEditor::new("ACGT", Some(42)).with_limits(IndelLimits {
            max_insertion: 3,
            max_deletion: 2,
        });
        let intents = editor.generate_intents(200);
        assert_eq!(intents.len(), 200);
        let mut inserts = 0;
        for intent in &intents {
            match intent {
                IndelIntent::Insert(bases) => {
                    inserts += 1;
                    assert!((1..=3).contains(&bases.len()));
                    assert!(bases.bytes().all(|b| b"ACGT".contains(&b)));
                }
                IndelIntent::Delete(length) => assert!((1..=2).contains(length)),
            }
        }
        assert!(inserts > 50 && inserts < 150);
        // Generation alone never edits the sequence
        assert_eq!(editor.sequence().to_string(), "ACGT");
    }

    #[test]
    fn test_perform_indels_logs_operations() {
        let mut editor = SequenceEditor::new(&"ACGT".repeat(100), Some(8));
        editor.protect(40);
        editor.perform_indels(20);
        assert!(!editor.operations().is_empty());
        assert!(editor.operations().len() <= 20);
        // Sentinels survive every deletion
        assert_eq!(editor.sentinel_offsets().len(), 40);
    }
}
