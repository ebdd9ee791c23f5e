use core::fmt;

use serde::{Deserialize, Serialize};

/// A canonical DNA nucleotide base.
///
/// Stored as a single byte. Each base also owns a protection sentinel: a
/// placeholder byte that stands in for the base while its site is reserved
/// for a substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// Bases in the order used when drawing random inserted content and
    /// alternate candidates.
    pub const ALL: [Nucleotide; 4] = [Self::A, Self::T, Self::G, Self::C];

    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`) and also
    /// accepts lowercase bytes. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// The sentinel byte rendered in place of a protected base.
    #[inline(always)]
    pub const fn sentinel(self) -> u8 {
        match self {
            Self::A => b'@',
            Self::T => b'#',
            Self::G => b'.',
            Self::C => b'%',
        }
    }

    /// The three bases a protected site of this base may resolve to.
    ///
    /// Never contains `self`.
    pub const fn alternatives(self) -> [Nucleotide; 3] {
        match self {
            Self::A => [Self::T, Self::G, Self::C],
            Self::T => [Self::A, Self::G, Self::C],
            Self::G => [Self::A, Self::T, Self::C],
            Self::C => [Self::A, Self::T, Self::G],
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_from_ascii() {
        // Uppercase
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'C'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'T'), Some(Nucleotide::T));

        // Lowercase
        assert_eq!(Nucleotide::from_ascii(b'a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b't'), Some(Nucleotide::T));

        // Invalid
        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::from_ascii(b'@'), None);
        assert_eq!(Nucleotide::from_ascii(b' '), None);
    }

    #[test]
    fn test_nucleotide_complement() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);
    }

    #[test]
    fn test_sentinels_are_distinct() {
        let sentinels: Vec<u8> = Nucleotide::ALL.iter().map(|b| b.sentinel()).collect();
        assert_eq!(sentinels, vec![b'@', b'#', b'.', b'%']);
        for base in Nucleotide::ALL {
            // A sentinel must never parse as a base.
            assert_eq!(Nucleotide::from_ascii(base.sentinel()), None);
        }
    }

    #[test]
    fn test_alternatives_exclude_self() {
        for base in Nucleotide::ALL {
            let alts = base.alternatives();
            assert!(!alts.contains(&base));
            for other in Nucleotide::ALL.iter().filter(|&&b| b != base) {
                assert!(alts.contains(other));
            }
        }
    }

    #[test]
    fn test_nucleotide_size() {
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
