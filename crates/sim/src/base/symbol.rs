use core::fmt;

use super::Nucleotide;

/// One position of a working sequence.
///
/// Input characters outside the canonical alphabet (e.g. `N`, or any
/// non-ASCII character) are kept verbatim as `Other` so the mutated output
/// preserves them; they can never be protected. One character is one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A canonical base.
    Base(Nucleotide),
    /// A non-canonical character, ASCII letters stored uppercase.
    Other(char),
    /// A protected site awaiting substitution. Holds the original base.
    Sentinel(Nucleotide),
}

impl Symbol {
    /// Classify an input character. Lowercase ASCII is normalized to
    /// uppercase.
    #[inline]
    pub fn from_char(c: char) -> Self {
        let base = u8::try_from(c).ok().and_then(Nucleotide::from_ascii);
        match base {
            Some(base) => Self::Base(base),
            None => Self::Other(c.to_ascii_uppercase()),
        }
    }

    /// The character this symbol renders as.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Self::Base(base) => base.to_char(),
            Self::Other(c) => c,
            Self::Sentinel(base) => base.sentinel() as char,
        }
    }

    #[inline]
    pub fn is_sentinel(self) -> bool {
        matches!(self, Self::Sentinel(_))
    }

    /// The canonical base held by this symbol, if any.
    #[inline]
    pub fn base(self) -> Option<Nucleotide> {
        match self {
            Self::Base(base) => Some(base),
            _ => None,
        }
    }
}

impl From<Nucleotide> for Symbol {
    fn from(base: Nucleotide) -> Self {
        Self::Base(base)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_from_char() {
        assert_eq!(Symbol::from_char('a'), Symbol::Base(Nucleotide::A));
        assert_eq!(Symbol::from_char('G'), Symbol::Base(Nucleotide::G));
        assert_eq!(Symbol::from_char('n'), Symbol::Other('N'));
        assert_eq!(Symbol::from_char('é'), Symbol::Other('é'));
    }

    #[test]
    fn test_symbol_rendering() {
        assert_eq!(Symbol::Base(Nucleotide::C).to_char(), 'C');
        assert_eq!(Symbol::Other('N').to_char(), 'N');
        assert_eq!(Symbol::Other('é').to_char(), 'é');
        assert_eq!(Symbol::Sentinel(Nucleotide::T).to_char(), '#');
    }

    #[test]
    fn test_symbol_base() {
        assert_eq!(Symbol::Base(Nucleotide::T).base(), Some(Nucleotide::T));
        assert_eq!(Symbol::Sentinel(Nucleotide::T).base(), None);
        assert_eq!(Symbol::Other('N').base(), None);
        assert!(Symbol::Sentinel(Nucleotide::A).is_sentinel());
    }
}
