#[cfg(test)]
use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Small helpers on `char` used throughout the solver.
///
/// The whole crate works over the 26-letter ASCII alphabet (multi-language
/// alphabets are out of scope), so "letter" always means ASCII alphabetic.
pub(crate) trait QuipChar {
    /// Slot index for this letter in a 26-entry table ('a'/'A' -> 0, ...,
    /// 'z'/'Z' -> 25). Must only be called on letters.
    fn letter_index(&self) -> usize;

    /// Whether this character participates in the cipher at all.
    fn is_letter(&self) -> bool;

    /// This character with the case of `like` reapplied. Case is a display
    /// property in this crate; the legend stores only lowercase mappings.
    fn matching_case(&self, like: char) -> char;
}

impl QuipChar for char {
    fn letter_index(&self) -> usize {
        debug_assert!(self.is_ascii_alphabetic(), "letter_index on non-letter '{}'", self);
        (self.to_ascii_lowercase() as u8 - b'a') as usize
    }

    fn is_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }

    fn matching_case(&self, like: char) -> char {
        if like.is_ascii_uppercase() {
            self.to_ascii_uppercase()
        } else {
            self.to_ascii_lowercase()
        }
    }
}

/// Inverse of `letter_index`: the lowercase letter stored at `index`.
///
/// Returns `None` for indexes past the alphabet; callers that index with
/// `letter_index` results never hit that case.
pub(crate) fn letter_at(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|&i| (i as usize) < ALPHABET_SIZE)
        .map(|i| (b'a' + i) as char)
}
