//! `word_list` — Module to load and preprocess the dictionary for quipsolve
//!
//! The dictionary is a plain newline-separated word file, loaded once at
//! startup and handed to the puzzle as a read-only pool of plaintext
//! candidates. Order does not affect correctness of the solve, only (weakly)
//! tie-breaking, so we normalize to a deterministic order here.
//!
//! The parsing logic:
//! - One word per line; surrounding whitespace is trimmed.
//! - Empty lines are skipped silently.
//! - Lines containing anything other than ASCII letters are skipped — the
//!   pattern matcher is only defined over alphabetic words.
//! - All words are normalized to lowercase.
//! - The final list is deduplicated and sorted by length first, then
//!   alphabetically.
//!
//! The public API provides:
//! - `parse_from_str(...)` — works on any in-memory string.
//! - `load_from_path(...)` — convenience method to read from a file path.

/// Struct representing a processed, ready-to-use word list.
///
/// The `words` vector contains all valid words (filtered, normalized,
/// deduplicated), already sorted by (length, alphabetical).
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of lowercase words.
    /// Example: `["an", "for", "see", "reach", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string, one word per line.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims each.
    /// 2. Skips empty lines and lines with non-alphabetic characters.
    /// 3. Converts each word to lowercase.
    /// 4. Deduplicates the list (case-insensitive because we lowercase early).
    /// 5. Sorts by length, then alphabetically.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || !line.chars().all(|c| c.is_ascii_alphabetic()) {
                    None
                } else {
                    Some(line.to_lowercase())
                }
            })
            .collect();

        // Sort alphabetically first, because `dedup()` only removes
        // *adjacent* duplicates.
        words.sort();
        words.dedup();

        // Final order: by length, then alphabetically within a length.
        words.sort_by(|a, b| match a.len().cmp(&b.len()) {
            std::cmp::Ordering::Equal => a.cmp(b),
            other => other,
        });

        WordList { words }
    }

    /// Read a word file from disk and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}
