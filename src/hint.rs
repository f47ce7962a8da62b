use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::PuzzleError;
use crate::quip_char::QuipChar;

/// The user-supplied seed for a solve: one cypher letter and the plain
/// letter it is known to decode to. Stored lowercase; case is irrelevant to
/// the key and only reapplied at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub cypher: char,
    pub plain: char,
}

impl Hint {
    /// Build a hint pair, rejecting anything outside a-z/A-Z.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::InvalidHintChar` if either character is not an
    /// ASCII letter.
    pub fn new(cypher: char, plain: char) -> Result<Self, PuzzleError> {
        for c in [cypher, plain] {
            if !c.is_letter() {
                return Err(PuzzleError::InvalidHintChar { invalid_char: c });
            }
        }
        Ok(Self {
            cypher: cypher.to_ascii_lowercase(),
            plain: plain.to_ascii_lowercase(),
        })
    }
}

impl FromStr for Hint {
    type Err = PuzzleError;

    /// Parse the CLI form `cypher=plain`, e.g. `"b=t"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(cypher), Some('='), Some(plain), None) => Hint::new(cypher, plain),
            _ => Err(PuzzleError::InvalidHintFormat { input: s.to_string() }),
        }
    }
}

impl Display for Hint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.cypher, self.plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_case() {
        let hint = Hint::new('B', 'T').unwrap();
        assert_eq!(hint.cypher, 'b');
        assert_eq!(hint.plain, 't');
    }

    #[test]
    fn test_new_rejects_non_letters() {
        assert!(matches!(
            Hint::new('1', 't'),
            Err(PuzzleError::InvalidHintChar { invalid_char: '1' })
        ));
        assert!(matches!(
            Hint::new('b', '!'),
            Err(PuzzleError::InvalidHintChar { invalid_char: '!' })
        ));
    }

    #[test]
    fn test_from_str() {
        let hint: Hint = "b=t".parse().unwrap();
        assert_eq!(hint, Hint::new('b', 't').unwrap());

        let spaced: Hint = " B=T ".parse().unwrap();
        assert_eq!(spaced, hint);
    }

    #[test]
    fn test_from_str_rejects_bad_shapes() {
        for bad in ["", "b", "bt", "b=", "=t", "b->t", "ab=t", "b=tt"] {
            assert!(
                matches!(bad.parse::<Hint>(), Err(PuzzleError::InvalidHintFormat { .. })),
                "expected format error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        let hint: Hint = "b=t".parse().unwrap();
        assert_eq!(hint.to_string().parse::<Hint>().unwrap(), hint);
    }
}
