use std::collections::HashSet;

use crate::cypher_word::CypherWord;
use crate::legend::Legend;

/// One piece of the puzzle: a unique cypher word from the phrase together
/// with the set of dictionary words that could plausibly decode to it.
///
/// The candidate set is populated once per solve (pattern-gated via
/// [`PuzzlePiece::try_add`]) and is read-only during the recursive search —
/// the search *tests* candidates against a legend, it never removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzlePiece {
    cypherword: CypherWord,
    possibles: HashSet<String>,
}

impl PuzzlePiece {
    #[must_use]
    pub fn new(cyphertext: &str) -> Self {
        Self {
            cypherword: CypherWord::new(cyphertext),
            possibles: HashSet::new(),
        }
    }

    #[must_use]
    pub fn cypherword(&self) -> &CypherWord {
        &self.cypherword
    }

    /// Length of the underlying cypher word.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.cypherword.len()
    }

    /// Number of candidates currently held.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.possibles.len()
    }

    /// Offer a plaintext word to this piece: it is kept iff its canonical
    /// pattern matches the cypher word's. Candidates are stored lowercase;
    /// re-offering a kept word is a no-op that still reports acceptance.
    pub fn try_add(&mut self, plaintext: &str) -> bool {
        if self.cypherword.matches_pattern(plaintext) {
            self.possibles.insert(plaintext.to_lowercase());
            true
        } else {
            false
        }
    }

    /// How many candidates survive a `can_match` test against `legend`.
    ///
    /// This is the constraint-tightness metric the search driver sorts on;
    /// it never prunes the candidate set.
    #[must_use]
    pub fn count_compatible(&self, legend: &Legend) -> usize {
        self.possibles
            .iter()
            .filter(|p| self.cypherword.can_match(p, legend))
            .count()
    }

    /// Empty the candidate set (used when re-running a solve).
    pub fn clear_candidates(&mut self) {
        self.possibles.clear();
    }

    /// Iterate the candidate words (order is unspecified).
    pub fn possibles(&self) -> impl Iterator<Item = &str> + '_ {
        self.possibles.iter().map(String::as_str)
    }
}
