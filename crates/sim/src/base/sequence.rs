use super::Symbol;
use crate::errors::OutOfBounds;
use std::fmt;
use std::ops::Range;

/// Mutable sequence of [`Symbol`]s edited in place by the sequence editor.
///
/// Offsets into a `WorkingSequence` are "working offsets": they shift as
/// content is spliced in or excised. Mapping them back to the reference is the
/// editor's job, not this type's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkingSequence(Vec<Symbol>);

impl WorkingSequence {
    /// Parse raw text, normalizing case. Every character becomes one symbol.
    pub fn from_text(text: &str) -> Self {
        Self(text.chars().map(Symbol::from_char).collect())
    }

    /// Return the length of the sequence in symbols.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no symbols.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Symbol` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied()
    }

    /// Set the symbol at `index`.
    ///
    /// Returns `OutOfBounds` if `index` is greater than or equal to the
    /// sequence length.
    #[inline]
    pub fn set(&mut self, index: usize, symbol: Symbol) -> Result<(), OutOfBounds> {
        let len = self.len();
        self.0
            .get_mut(index)
            .map(|slot| *slot = symbol)
            .ok_or(OutOfBounds { index, len })
    }

    /// Splice `symbols` in before `offset`, shifting everything at or after it.
    ///
    /// `offset` may equal `len()` (append).
    pub fn splice_in<I>(&mut self, offset: usize, symbols: I) -> Result<(), OutOfBounds>
    where
        I: IntoIterator<Item = Symbol>,
    {
        if offset > self.len() {
            return Err(OutOfBounds {
                index: offset,
                len: self.len(),
            });
        }
        self.0.splice(offset..offset, symbols);
        Ok(())
    }

    /// Remove `range` and return the removed symbols.
    pub fn excise(&mut self, range: Range<usize>) -> Result<WorkingSequence, OutOfBounds> {
        if range.start > range.end || range.end > self.len() {
            return Err(OutOfBounds {
                index: range.end,
                len: self.len(),
            });
        }
        Ok(Self(self.0.drain(range).collect()))
    }

    /// Render `range` as text.
    pub fn render(&self, range: Range<usize>) -> String {
        self.0[range].iter().map(|s| s.to_char()).collect()
    }

    /// Iterate over the symbols.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for WorkingSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl From<&str> for WorkingSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
