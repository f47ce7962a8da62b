use crate::legend::Legend;

/// Canonical pattern of a word: each character is replaced by the letter
/// ranked by the position of that character's *first* occurrence, scanning
/// left to right.
///
/// ```
/// use quipsolve::cypher_word::word_pattern;
///
/// assert_eq!(word_pattern("see"), "abb");
/// assert_eq!(word_pattern("rabbit"), "abccef");
/// ```
///
/// Two equal-length words decode to each other under *some* substitution iff
/// their patterns are equal, which makes this a cheap necessary filter before
/// any legend-based check. Patterns are computed over lowercased text so
/// `"Bob"` and `"bob"` agree.
///
/// Words are assumed purely alphabetic with at most 26 distinct letters
/// (anything longer is out of scope); the encoding stays deterministic
/// beyond that but is not meaningful.
#[must_use]
pub fn word_pattern(word: &str) -> String {
    let letters: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    letters
        .iter()
        .map(|c| {
            let first = letters.iter().position(|o| o == c).unwrap_or(0);
            char::from_u32('a' as u32 + u32::try_from(first).unwrap_or(0)).unwrap_or('\u{fffd}')
        })
        .collect()
}

/// One cypher word from the phrase: immutable raw text plus its canonical
/// pattern, derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CypherWord {
    text: String,
    pattern: String,
}

impl CypherWord {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            pattern: word_pattern(text),
        }
    }

    /// The raw cypher text of this word.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The canonical pattern (always the same length as the text).
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True iff `candidate` has the same nonzero length and the same
    /// canonical pattern as this cypher word. A zero-length word matches
    /// nothing ("no pattern" rather than an error).
    #[must_use]
    pub fn matches_pattern(&self, candidate: &str) -> bool {
        !self.is_empty()
            && self.len() == candidate.chars().count()
            && self.pattern == word_pattern(candidate)
    }

    /// Wildcard-permissive check: true iff the patterns match and no
    /// position already mapped by `legend` contradicts `candidate`.
    /// Unmapped positions are accepted — this looks only for an outright
    /// contradiction, not full coverage.
    #[must_use]
    pub fn can_match(&self, candidate: &str, legend: &Legend) -> bool {
        if !self.matches_pattern(candidate) {
            return false;
        }
        self.text
            .chars()
            .zip(candidate.chars())
            .all(|(cc, pc)| match legend.plain_for(cc) {
                Some(mapped) => mapped.eq_ignore_ascii_case(&pc),
                None => true,
            })
    }

    /// Strict check: true iff the patterns match and *every* position is
    /// mapped by `legend` and agrees with `candidate` — a complete,
    /// confirmed decoding. `does_match` implies `can_match`, never the
    /// reverse.
    #[must_use]
    pub fn does_match(&self, candidate: &str, legend: &Legend) -> bool {
        if !self.matches_pattern(candidate) {
            return false;
        }
        self.text
            .chars()
            .zip(candidate.chars())
            .all(|(cc, pc)| match legend.plain_for(cc) {
                Some(mapped) => mapped.eq_ignore_ascii_case(&pc),
                None => false,
            })
    }

    /// Fully decode this one word through `legend`, or `None` if any letter
    /// is still unmapped (or the word is empty).
    #[must_use]
    pub fn decode(&self, legend: &Legend) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        legend.decode(&self.text)
    }
}
