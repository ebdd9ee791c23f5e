use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Ordered table from "i-th surviving real symbol" to its reference
/// coordinate.
///
/// Entries are strictly increasing. Insertions never touch the table; a
/// deletion removes exactly the coordinates of the real symbols it deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMapping(Vec<usize>);

impl PositionMapping {
    /// Identity mapping for a reference of `len` bases.
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reference coordinate of the `index`-th surviving real symbol.
    #[inline]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Whether `coordinate` still has a surviving symbol.
    pub fn contains(&self, coordinate: usize) -> bool {
        self.0.binary_search(&coordinate).is_ok()
    }

    /// Drop the entries at `indices` and return the removed coordinates.
    ///
    /// The range is clamped to the table.
    pub fn remove(&mut self, indices: Range<usize>) -> Vec<usize> {
        let end = indices.end.min(self.0.len());
        let start = indices.start.min(end);
        self.0.drain(start..end).collect()
    }
}
