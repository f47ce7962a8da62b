//! The word-block attack: recursive backtracking over whole words.
//!
//! A [`Puzzle`] splits the cyphertext into unique words, gives each word a
//! [`PuzzlePiece`] holding its pattern-compatible dictionary candidates, and
//! then searches word by word: clone the legend, incorporate one candidate
//! pairing, recurse into the next piece. A branch dies the moment a pairing
//! contradicts the legend's bijection; a branch that survives every piece
//! and fully decodes the original phrase contributes one solution.
//!
//! The search deliberately visits *every* candidate at every depth and
//! collects *every* full decoding. When the hint under-constrains the
//! puzzle, the solutions list legitimately contains more than one entry, and
//! the caller decides which to present (typically the first).
//!
//! # Examples
//!
//! ```
//! use quipsolve::hint::Hint;
//! use quipsolve::solver::{Puzzle, SolveStatus};
//!
//! let hint: Hint = "a=c".parse()?;
//! let mut puzzle = Puzzle::new("abc", hint);
//!
//! let words = vec!["cat", "car", "dog"];
//! let result = puzzle.attempt_word_block_attack(&words, None);
//!
//! assert_eq!(result.status, SolveStatus::SearchExhausted);
//! assert_eq!(result.solutions.len(), 2); // "cat" and "car" both fit
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::hint::Hint;
use crate::legend::Legend;
use crate::puzzle_piece::PuzzlePiece;

/// Status of a solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// The search tree was explored completely (the solutions list holds
    /// every decoding that exists for this word list, possibly none).
    SearchExhausted,

    /// The search stopped because the time budget expired. Contains the
    /// elapsed time; solutions found before the deadline are kept.
    TimedOut { elapsed: Duration },
}

/// Outcome of one word-block attack (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Every fully decoded phrase discovered, in discovery order.
    pub solutions: Vec<String>,
    /// Whether the search ran to completion or hit the budget.
    pub status: SolveStatus,
}

/// Simple helper to enforce an optional wall-clock time limit.
///
/// The backtracking tree is exponential in the worst case and there is no
/// memoization, so callers working with real dictionaries can cap a run;
/// `None` means unbounded (the tree is still finite).
struct TimeBudget {
    start: Instant,
    limit: Option<Duration>,
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

/// Signal that unwinds the recursion when the budget runs out.
struct BudgetExpired;

/// Borrowed, read-only state shared by every branch of the search. Each
/// branch owns its private [`Legend`] clone instead — sibling branches never
/// see each other's speculative mappings.
struct SearchCtx<'a> {
    pieces: &'a [PuzzlePiece],
    cyphertext: &'a str,
    budget: &'a TimeBudget,
}

/// One cryptoquip solve: the phrase, the seeded legend, one piece per
/// distinct word, and the solutions accumulated by the attack.
#[derive(Debug, Clone)]
pub struct Puzzle {
    cyphertext: String,
    hint: Hint,
    legend: Legend,
    pieces: Vec<PuzzlePiece>,
    solutions: Vec<String>,
}

impl Puzzle {
    /// Set up a puzzle: split the phrase into whitespace-delimited tokens,
    /// strip punctuation from the token edges, collapse duplicates, and
    /// seed the legend with the hint pair.
    ///
    /// A phrase with no alphabetic tokens (including the empty phrase)
    /// yields a puzzle with zero pieces, which solves to zero solutions
    /// rather than failing.
    #[must_use]
    pub fn new(cyphertext: &str, hint: Hint) -> Self {
        let mut pieces: Vec<PuzzlePiece> = Vec::new();
        for token in cyphertext.split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_ascii_alphabetic());
            if word.is_empty() {
                continue;
            }
            if !pieces.iter().any(|p| p.cypherword().text() == word) {
                pieces.push(PuzzlePiece::new(word));
            }
        }
        Self {
            cyphertext: cyphertext.to_string(),
            hint,
            legend: Legend::with_hint(hint.cypher, hint.plain),
            pieces,
            solutions: Vec::new(),
        }
    }

    /// The original cyphertext phrase.
    #[must_use]
    pub fn cyphertext(&self) -> &str {
        &self.cyphertext
    }

    /// The seed hint this puzzle was created with.
    #[must_use]
    pub fn hint(&self) -> Hint {
        self.hint
    }

    /// One piece per distinct cypher word, in attack order after a solve.
    #[must_use]
    pub fn pieces(&self) -> &[PuzzlePiece] {
        &self.pieces
    }

    /// Solutions accumulated by the most recent attack.
    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Run the word-block attack against `words`.
    ///
    /// 1. Clear out any state from a previous run.
    /// 2. Offer every dictionary word to every piece (pattern filter); a
    ///    word lands in each piece whose pattern it shares.
    /// 3. Sort pieces ascending by legend-compatible candidate count, so
    ///    the tightest-constrained word is attacked first (ties keep their
    ///    relative order).
    /// 4. Recurse piece by piece, cloning and extending the legend, and
    ///    collect every complete decoding of the phrase.
    ///
    /// `time_budget` caps the search wall-clock time; `None` runs the tree
    /// to exhaustion.
    pub fn attempt_word_block_attack(
        &mut self,
        words: &[&str],
        time_budget: Option<Duration>,
    ) -> SolveResult {
        debug!("Clearing out previous attack state");
        self.solutions.clear();
        for piece in &mut self.pieces {
            piece.clear_candidates();
        }

        let t_filter = Instant::now();
        for &word in words {
            for piece in &mut self.pieces {
                piece.try_add(word);
            }
        }

        // Tightest-constraint-first ordering; sort_by_key is stable so tied
        // pieces keep their setup order.
        let root = self.legend.clone();
        self.pieces.sort_by_key(|piece| piece.count_compatible(&root));

        info!(
            "Filtered {} words into {} pieces in {:.3}s",
            words.len(),
            self.pieces.len(),
            t_filter.elapsed().as_secs_f64()
        );
        for piece in &self.pieces {
            debug!(
                "  ... {} :: {} possibles ({} legend-compatible)",
                piece.cypherword().text(),
                piece.match_count(),
                piece.count_compatible(&root)
            );
        }

        let budget = TimeBudget::new(time_budget);
        let status = if self.pieces.is_empty() {
            SolveStatus::SearchExhausted
        } else {
            let ctx = SearchCtx {
                pieces: &self.pieces,
                cyphertext: &self.cyphertext,
                budget: &budget,
            };
            match search(&ctx, 0, &root, &mut self.solutions) {
                Ok(()) => SolveStatus::SearchExhausted,
                Err(BudgetExpired) => SolveStatus::TimedOut { elapsed: budget.elapsed() },
            }
        };

        info!(
            "{} solution(s) took {:.3}s",
            self.solutions.len(),
            budget.elapsed().as_secs_f64()
        );

        SolveResult { solutions: self.solutions.clone(), status }
    }
}

/// Recursive core of the word-block attack, working on the `index`th piece.
///
/// For every candidate the current legend does not contradict: at the last
/// piece, clone-extend the legend with the pairing and decode the *entire
/// original phrase*; otherwise recurse with the extended clone. Every
/// negative outcome (pattern mismatch, incorporation conflict, incomplete
/// decode) just prunes the branch.
fn search(
    ctx: &SearchCtx<'_>,
    index: usize,
    legend: &Legend,
    solutions: &mut Vec<String>,
) -> Result<(), BudgetExpired> {
    debug_assert!(index < ctx.pieces.len(), "piece index out of range");

    if ctx.budget.expired() {
        return Err(BudgetExpired);
    }

    let piece = &ctx.pieces[index];
    let cypherword = piece.cypherword();
    debug!(
        "working on word {index} [{}] - {} possible matches",
        cypherword.text(),
        piece.match_count()
    );

    let last = index + 1 == ctx.pieces.len();
    for candidate in piece.possibles() {
        if !cypherword.can_match(candidate, legend) {
            continue;
        }
        let mut extended = legend.clone();
        if !extended.incorporate(cypherword.text(), candidate) {
            continue;
        }
        if last {
            if let Some(decoded) = extended.decode(ctx.cyphertext) {
                debug!("found a full decoding: {decoded}");
                solutions.push(decoded);
            }
        } else {
            search(ctx, index + 1, &extended, solutions)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(s: &str) -> Hint {
        s.parse().unwrap()
    }

    #[test]
    fn test_setup_dedupes_words() {
        let puzzle = Puzzle::new("abc abc def abc", hint("a=c"));
        assert_eq!(puzzle.pieces().len(), 2);
    }

    #[test]
    fn test_setup_strips_edge_punctuation() {
        let puzzle = Puzzle::new("abc, def!", hint("a=c"));
        let words: Vec<&str> = puzzle.pieces().iter().map(|p| p.cypherword().text()).collect();
        assert_eq!(words, vec!["abc", "def"]);
    }

    #[test]
    fn test_empty_phrase_yields_zero_pieces_and_solutions() {
        let mut puzzle = Puzzle::new("", hint("a=c"));
        assert!(puzzle.pieces().is_empty());

        let result = puzzle.attempt_word_block_attack(&["cat", "dog"], None);
        assert!(result.solutions.is_empty());
        assert_eq!(result.status, SolveStatus::SearchExhausted);
    }

    #[test]
    fn test_single_word_solve() {
        let mut puzzle = Puzzle::new("ncc", hint("c=e"));
        let result = puzzle.attempt_word_block_attack(&["see", "too", "sea"], None);

        // "too" fails the c=e hint; "sea" fails the pattern
        assert_eq!(result.solutions, vec!["see".to_string()]);
    }

    #[test]
    fn test_all_full_decodings_are_collected() {
        // The hint doesn't separate "cat" from "car", so both decodings
        // must be reported.
        let mut puzzle = Puzzle::new("abc", hint("a=c"));
        let result = puzzle.attempt_word_block_attack(&["cat", "car", "dog"], None);

        let mut found = result.solutions.clone();
        found.sort();
        assert_eq!(found, vec!["car".to_string(), "cat".to_string()]);
    }

    #[test]
    fn test_conflicting_words_prune_branches() {
        // "ab" and "cb" share the letter 'b'; only candidate pairs that
        // agree on its decoding can survive together.
        let mut puzzle = Puzzle::new("ab cb", hint("a=t"));
        let words = vec!["to", "ta", "go", "ga"];
        let result = puzzle.attempt_word_block_attack(&words, None);

        let mut found = result.solutions.clone();
        found.sort();
        // 'b' must decode identically in both words: b=o gives "to go",
        // b=a gives "ta ga". Mixed pairs like "to ga" are pruned.
        assert_eq!(found, vec!["ta ga".to_string(), "to go".to_string()]);
    }

    #[test]
    fn test_bijection_prunes_two_cyphers_one_plain() {
        // 'a' and 'b' are different cypher letters, so they cannot both
        // decode to 'o': the one-word candidates collapse to a single
        // consistent assignment.
        let mut puzzle = Puzzle::new("a b", hint("a=i"));
        let result = puzzle.attempt_word_block_attack(&["i", "o", "a"], None);

        let mut found = result.solutions.clone();
        found.sort();
        // a=i fixed by hint; b may be any remaining single-letter word
        assert_eq!(found, vec!["i a".to_string(), "i o".to_string()]);
    }

    #[test]
    fn test_decode_preserves_structure_and_case() {
        let mut puzzle = Puzzle::new("Ncc, ncc!", hint("c=e"));
        let result = puzzle.attempt_word_block_attack(&["see"], None);

        assert_eq!(result.solutions, vec!["See, see!".to_string()]);
    }

    #[test]
    fn test_rerun_clears_previous_state() {
        let mut puzzle = Puzzle::new("ncc", hint("c=e"));
        let first = puzzle.attempt_word_block_attack(&["see"], None);
        assert_eq!(first.solutions.len(), 1);

        // Second run against a word list with no fitting words must not
        // leak candidates or solutions from the first run.
        let second = puzzle.attempt_word_block_attack(&["dog"], None);
        assert!(second.solutions.is_empty());
        assert!(puzzle.solutions().is_empty());
    }

    #[test]
    fn test_determinism_of_membership() {
        let words = vec!["cat", "car", "can", "dog", "don"];
        let mut reference: Vec<String> = Vec::new();
        for run in 0..3 {
            let mut puzzle = Puzzle::new("abc abd", hint("a=c"));
            let mut found = puzzle.attempt_word_block_attack(&words, None).solutions;
            found.sort();
            if run == 0 {
                reference = found;
            } else {
                assert_eq!(found, reference);
            }
        }
    }

    #[test]
    fn test_zero_budget_times_out() {
        let mut puzzle = Puzzle::new("abc abd acd", hint("a=c"));
        let words = vec!["cat", "car", "can", "cob", "cod", "con", "cup", "cut"];
        let result = puzzle.attempt_word_block_attack(&words, Some(Duration::ZERO));

        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
    }

    #[test]
    fn test_solutions_satisfy_does_match() {
        // Every reported solution must be a complete decoding: rebuild the
        // legend from the solution itself and re-verify each word strictly.
        let mut puzzle = Puzzle::new("ab cb", hint("a=t"));
        let words = vec!["to", "ta", "go", "ga"];
        let result = puzzle.attempt_word_block_attack(&words, None);
        assert!(!result.solutions.is_empty());

        for solution in &result.solutions {
            let mut legend = Legend::default();
            let word_pairs = puzzle
                .cyphertext()
                .split_whitespace()
                .zip(solution.split_whitespace());
            for (cypher_word, plain_word) in word_pairs {
                assert!(legend.incorporate(cypher_word, plain_word));
            }
            for piece in puzzle.pieces() {
                let decoded = piece.cypherword().decode(&legend).unwrap();
                assert!(piece.cypherword().does_match(&decoded, &legend));
            }
        }
    }
}
