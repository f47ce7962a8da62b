//! Error types for puzzle setup with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (Q001-Q002) for documentation lookup:
//!
//! - Q001: `InvalidHintChar` (Hint character outside a-z/A-Z)
//! - Q002: `InvalidHintFormat` (Hint string not in `cypher=plain` form)
//!
//! Only *setup* problems are errors. The solver's own negative outcomes —
//! pattern mismatch, key conflict, incomplete decode, empty input — are
//! ordinary `bool`/`Option` results that prune a search branch; they never
//! surface as `PuzzleError`.

use std::io;

/// Custom error type for puzzle setup operations
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Invalid hint character '{invalid_char}' (only letters a-z allowed)")]
    InvalidHintChar { invalid_char: char },

    #[error("Invalid hint \"{input}\" (expected cypher=plain, e.g. \"b=t\")")]
    InvalidHintFormat { input: String },
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InvalidHintChar { .. } => "Q001",
            PuzzleError::InvalidHintFormat { .. } => "Q002",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::InvalidHintChar { .. } => {
                Some("Both sides of the hint must be single ASCII letters (case is ignored)")
            }
            PuzzleError::InvalidHintFormat { .. } => {
                Some("Write the hint as a single pair like 'b=t': cypher letter, '=', plain letter")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = PuzzleError::InvalidHintChar { invalid_char: '7' };
        assert_eq!(err.code(), "Q001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("Q001"));
        assert!(detailed.contains('7'));
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        let errors: Vec<PuzzleError> = vec![
            PuzzleError::InvalidHintChar { invalid_char: '!' },
            PuzzleError::InvalidHintFormat { input: "bt".to_string() },
        ];

        for err in errors {
            let code = err.code();
            assert!(code.starts_with('Q'), "Error code '{}' should start with 'Q'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = PuzzleError::InvalidHintFormat { input: "b->t".to_string() };
        let detailed = err.display_detailed();

        assert!(detailed.contains(err.code()));
        assert!(detailed.contains(&err.to_string()));
        if let Some(help) = err.help() {
            assert!(detailed.contains(help));
        }
    }

    #[test]
    fn test_io_error_bridge() {
        let err = PuzzleError::InvalidHintChar { invalid_char: '!' };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains('!'));
    }
}
