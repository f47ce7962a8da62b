use std::fmt;
use std::fmt::{Display, Formatter};

use crate::quip_char::{letter_at, QuipChar, ALPHABET_SIZE};

/// `Legend` is the substitution key: a partial bijection from the 26 cypher
/// letters to plain letters.
///
/// Uses array-based storage instead of a `HashMap` since cypher letters are
/// limited to 'a'-'z'; slot `i` holds the plain letter for cypher letter
/// `'a' + i`, or `None` while that letter is still unsolved.
///
/// Invariant (checked by [`Legend::incorporate`], the only bulk mutator):
/// no two cypher letters map to the same plain letter, and a set cypher
/// letter maps to exactly one plain letter. Case is never stored — lookups
/// reapply the case of the queried character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    /// Slot storage: index 0-25 for cypher 'a'-'z', values are lowercase
    /// plain letters.
    slots: [Option<char>; ALPHABET_SIZE],
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            slots: [None; ALPHABET_SIZE],
        }
    }
}

impl Display for Legend {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .iter()
            .map(|(cypher, plain)| format!("{cypher}→{plain}"))
            .collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

impl Legend {
    /// Create a legend seeded with a single hint pair.
    ///
    /// Non-letter arguments are ignored (the CLI validates hints before they
    /// get here); the result is then an empty legend.
    #[must_use]
    pub fn with_hint(cypher: char, plain: char) -> Self {
        let mut legend = Self::default();
        legend.set(cypher, plain);
        legend
    }

    /// Unconditionally map `cypher` to `plain`, overwriting any previous
    /// mapping for that slot. Used at seed time only; speculative extension
    /// during search goes through [`Legend::incorporate`].
    pub fn set(&mut self, cypher: char, plain: char) {
        if cypher.is_letter() && plain.is_letter() {
            self.slots[cypher.letter_index()] = Some(plain.to_ascii_lowercase());
        }
    }

    /// Clear the mapping for one cypher letter.
    pub fn remove(&mut self, cypher: char) {
        if cypher.is_letter() {
            self.slots[cypher.letter_index()] = None;
        }
    }

    /// The plain letter for `cypher`, with the queried character's case
    /// reapplied, or `None` if the slot is unset (or `cypher` is not a
    /// letter).
    #[must_use]
    pub fn plain_for(&self, cypher: char) -> Option<char> {
        if !cypher.is_letter() {
            return None;
        }
        self.slots[cypher.letter_index()].map(|plain| plain.matching_case(cypher))
    }

    /// Reverse lookup: the cypher letter mapping to `plain`, case-preserving.
    ///
    /// Linear scan of the 26 slots; first match wins. By the bijection
    /// invariant there is at most one match, so the tie-break never matters.
    #[must_use]
    pub fn cypher_for(&self, plain: char) -> Option<char> {
        if !plain.is_letter() {
            return None;
        }
        let target = plain.to_ascii_lowercase();
        self.slots
            .iter()
            .position(|slot| *slot == Some(target))
            .and_then(letter_at)
            .map(|cypher| cypher.matching_case(plain))
    }

    /// Number of cypher letters currently mapped.
    #[must_use]
    pub fn mapped_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Attempt to extend the legend with every letter pair implied by
    /// aligning `cyphertext` with `plaintext` (case-insensitively).
    ///
    /// All-or-nothing: the pairs are first validated against the current
    /// mappings *and against each other* on a scratch copy; only if every
    /// pair is acceptable does the legend change. A pair is rejected when it
    /// would remap an already-set cypher letter, or assign a plain letter
    /// already claimed by a different cypher letter. On failure the legend
    /// is observably untouched, which is what lets callers clone-and-retry
    /// during the search.
    pub fn incorporate(&mut self, cyphertext: &str, plaintext: &str) -> bool {
        if cyphertext.chars().count() != plaintext.chars().count() {
            return false;
        }
        let mut staged = self.slots;
        for (cc, pc) in cyphertext.chars().zip(plaintext.chars()) {
            if !cc.is_letter() || !pc.is_letter() {
                return false;
            }
            let plain = pc.to_ascii_lowercase();
            match staged[cc.letter_index()] {
                Some(existing) if existing == plain => {} // already mapped identically
                Some(_) => return false,                  // would remap a set cypher letter
                None => {
                    // the plain letter must not already be claimed
                    if staged.iter().any(|slot| *slot == Some(plain)) {
                        return false;
                    }
                    staged[cc.letter_index()] = Some(plain);
                }
            }
        }
        self.slots = staged;
        true
    }

    /// Decode `text` through the legend: every letter must be mapped or the
    /// whole decode fails with `None`. Case is preserved and non-letter
    /// characters (spaces, punctuation) pass through unchanged.
    #[must_use]
    pub fn decode(&self, text: &str) -> Option<String> {
        text.chars()
            .map(|c| {
                if c.is_letter() {
                    self.plain_for(c)
                } else {
                    Some(c)
                }
            })
            .collect()
    }

    /// Iterate over the set mappings as lowercase (cypher, plain) pairs.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.map(|plain| {
                let cypher = letter_at(i).unwrap_or_else(|| {
                    unreachable!("slot index {i} must be within the alphabet")
                });
                (cypher, plain)
            })
        })
    }
}
