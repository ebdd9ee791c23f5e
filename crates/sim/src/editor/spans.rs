use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Range;

/// One insertion's region of the working sequence.
///
/// `start` is a working offset and moves when content to its left is spliced
/// in or excised; `id` and `sequence` never change. Lengths count symbols
/// (characters), never UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    id: usize,
    start: usize,
    len: usize,
    sequence: String,
}

impl Span {
    /// Monotonic, unique insertion number.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Working offset of the first inserted base.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Working offset one past the last inserted base.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The inserted bases.
    #[inline]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Sorted, non-overlapping intervals of inserted content.
///
/// Spans never nest and never overlap; they may abut. The list is kept sorted
/// by `start` and updated incrementally on every splice and excision, so
/// coverage queries are a binary search instead of a rescan of the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRegistry {
    spans: Vec<Span>,
    next_id: usize,
}

impl SpanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Live spans in working-offset order.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn iter(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter()
    }

    /// Total number of working offsets covered by spans.
    pub fn total_covered(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }

    /// Register content spliced in at `offset` and return its id.
    ///
    /// Spans starting at or after `offset` are shifted right by the inserted
    /// length. `offset` must not fall strictly inside an existing span.
    pub fn open(&mut self, offset: usize, sequence: &str) -> usize {
        debug_assert!(!self.is_interior(offset), "insertion inside span at {offset}");
        let id = self.next_id;
        self.next_id += 1;

        let shift = sequence.chars().count();
        let at = self.spans.partition_point(|s| s.start < offset);
        for span in &mut self.spans[at..] {
            span.start += shift;
        }
        self.spans.insert(
            at,
            Span {
                id,
                start: offset,
                len: shift,
                sequence: sequence.to_string(),
            },
        );
        id
    }

    /// Account for `range` being excised from the working sequence.
    ///
    /// Spans wholly inside `range` are dropped; spans after it shift left.
    /// Partial overlap is not supported: deletions are confined to
    /// span-free ranges.
    pub fn excise(&mut self, range: Range<usize>) {
        let removed = range.len();
        if removed == 0 {
            return;
        }
        debug_assert!(
            self.spans.iter().all(|s| s.end() <= range.start
                || s.start >= range.end
                || (s.start >= range.start && s.end() <= range.end)),
            "excision {range:?} partially overlaps a span"
        );
        self.spans
            .retain(|s| !(s.start >= range.start && s.end() <= range.end));
        for span in &mut self.spans {
            if span.start >= range.end {
                span.start -= removed;
            }
        }
    }

    /// The span covering `offset`, if any.
    pub fn covering(&self, offset: usize) -> Option<&Span> {
        let idx = self.spans.partition_point(|s| s.start <= offset);
        idx.checked_sub(1)
            .map(|i| &self.spans[i])
            .filter(|s| offset < s.end())
    }

    /// Whether `offset` belongs to inserted content.
    #[inline]
    pub fn is_covered(&self, offset: usize) -> bool {
        self.covering(offset).is_some()
    }

    /// Whether `offset` lies strictly inside a span, i.e. inserting there
    /// would split inserted content. Span boundaries are not interior.
    pub fn is_interior(&self, offset: usize) -> bool {
        self.covering(offset).is_some_and(|s| s.start < offset)
    }

    /// Count of covered offsets strictly before `offset`.
    pub fn covered_before(&self, offset: usize) -> usize {
        self.spans
            .iter()
            .take_while(|s| s.start < offset)
            .map(|s| s.end().min(offset) - s.start)
            .sum()
    }

    /// Every covered working offset.
    pub fn covered_offsets(&self) -> BTreeSet<usize> {
        self.spans.iter().flat_map(Span::range).collect()
    }
}
