use super::SequenceEditor;
use crate::base::Symbol;
use std::ops::Range;

impl SequenceEditor {
    /// Working offsets where an insertion may be spliced, ascending.
    ///
    /// Covers `0..=len` minus span interiors; span boundaries stay admissible
    /// so insertions may abut existing inserted content.
    pub fn safe_insertion_offsets(&self) -> Vec<usize> {
        (0..=self.sequence.len())
            .filter(|&offset| !self.spans.is_interior(offset))
            .collect()
    }

    /// Maximal half-open ranges free of both inserted content and sentinels.
    pub fn safe_deletion_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut open: Option<usize> = None;
        for (offset, symbol) in self.sequence.iter().enumerate() {
            let blocked = symbol.is_sentinel() || self.spans.is_covered(offset);
            match (blocked, open) {
                (false, None) => open = Some(offset),
                (true, Some(start)) => {
                    ranges.push(start..offset);
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            ranges.push(start..self.sequence.len());
        }
        ranges
    }

    /// Total length of [`safe_deletion_ranges`](Self::safe_deletion_ranges).
    pub fn deletion_capacity(&self) -> usize {
        self.safe_deletion_ranges().iter().map(|range| range.len()).sum()
    }

    /// Number of real (non-inserted) offsets strictly before `offset`.
    #[inline]
    pub fn offset_to_mapping_index(&self, offset: usize) -> usize {
        offset - self.spans.covered_before(offset)
    }

    /// Reference coordinate of the real symbol at or after `offset`.
    ///
    /// Past the end of all real content the mapping index itself is returned.
    /// That value is not guaranteed to be a true reference coordinate once
    /// deletions have shortened the mapping.
    pub fn offset_to_reference_coordinate(&self, offset: usize) -> usize {
        let index = self.offset_to_mapping_index(offset);
        self.mapping.get(index).unwrap_or(index)
    }

    /// Offsets currently holding a sentinel.
    pub fn sentinel_offsets(&self) -> Vec<usize> {
        self.sequence
            .iter()
            .enumerate()
            .filter(|(_, symbol)| matches!(symbol, Symbol::Sentinel(_)))
            .map(|(offset, _)| offset)
            .collect()
    }
}
