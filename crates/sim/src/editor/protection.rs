use super::SequenceEditor;
use crate::base::{Nucleotide, Symbol};
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

/// A substitution-protected reference site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionRecord {
    pub coordinate: usize,
    pub original: Nucleotide,
}

impl ProtectionRecord {
    /// Byte shown in the working sequence while the site is protected.
    #[inline]
    pub fn sentinel(&self) -> u8 {
        self.original.sentinel()
    }

    /// Bases the site may be substituted with.
    #[inline]
    pub fn alternatives(&self) -> [Nucleotide; 3] {
        self.original.alternatives()
    }
}

/// A substitution resolved during restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnpRecord {
    /// 0-based reference coordinate.
    pub coordinate: usize,
    pub reference: Nucleotide,
    pub alternate: Nucleotide,
}

impl SequenceEditor {
    /// Protect `count` distinct sites chosen uniformly at random.
    ///
    /// `count` is clamped to the sequence length. Sites holding a
    /// non-canonical byte are skipped without a record. Meant to be called
    /// before any indel, while working offsets equal reference coordinates.
    pub fn protect(&mut self, count: usize) -> &mut Self {
        let len = self.sequence.len();
        let count = count.min(len);
        let offsets = index::sample(&mut self.rng, len, count).into_vec();
        self.protect_offsets(&offsets)
    }

    /// Protect the sites at the given working offsets.
    ///
    /// Offsets that are out of range, inside inserted content, already
    /// protected, or not a canonical base are skipped.
    pub fn protect_offsets(&mut self, offsets: &[usize]) -> &mut Self {
        if !self.operations.is_empty() {
            log::debug!("Protecting sites after {} indels", self.operations.len());
        }
        let mut protected = 0;
        for &offset in offsets {
            if self.spans.is_covered(offset) {
                continue;
            }
            let Some(base) = self.sequence.get(offset).and_then(Symbol::base) else {
                continue;
            };
            let coordinate = self.offset_to_reference_coordinate(offset);
            if self.sequence.set(offset, Symbol::Sentinel(base)).is_err() {
                continue;
            }
            self.protections.insert(
                coordinate,
                ProtectionRecord {
                    coordinate,
                    original: base,
                },
            );
            protected += 1;
        }
        log::debug!("Protected {protected} of {} requested sites", offsets.len());
        self
    }

    /// Resolve every sentinel to a random alternate base.
    ///
    /// Inserted content is skipped; each remaining offset advances the real
    /// symbol counter that indexes the position mapping. A substitution is
    /// recorded only when its resolved coordinate still has a protection
    /// record. Calling this again is a no-op.
    pub fn restore(&mut self) -> &mut Self {
        let mut real_index = 0;
        for offset in 0..self.sequence.len() {
            if self.spans.is_covered(offset) {
                continue;
            }
            let index = real_index;
            real_index += 1;

            let Some(Symbol::Sentinel(original)) = self.sequence.get(offset) else {
                continue;
            };
            let alternatives = original.alternatives();
            let alternate = alternatives[self.rng.random_range(0..alternatives.len())];
            if self.sequence.set(offset, Symbol::Base(alternate)).is_err() {
                continue;
            }

            let coordinate = self.mapping.get(index).unwrap_or(index);
            if self
                .protections
                .get(&coordinate)
                .is_some_and(|record| record.original == original)
            {
                self.snp_records.push(SnpRecord {
                    coordinate,
                    reference: original,
                    alternate,
                });
            }
        }
        log::debug!("Restored {} protected sites", self.snp_records.len());
        self
    }
}
