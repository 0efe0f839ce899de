//! Fixed-shape token pattern matching
//!
//! A pattern is an ordered list of [TokenKind] values. It matches when the token sequence is
//! at least as long as the pattern and each leading token has the kind at the same position.
//! Matching stops at the first mismatch, and a sequence shorter than the pattern simply does
//! not match.

use crate::mdlite::token::{Token, TokenKind};

/// Check whether `tokens` starts with the shape described by `pattern`.
pub fn matches(pattern: &[TokenKind], tokens: &[Token]) -> bool {
    let mut remaining = tokens.iter();
    pattern
        .iter()
        .all(|kind| remaining.next().is_some_and(|token| token.kind() == *kind))
}

/// Check whether `tokens` starts with any of the given patterns.
pub fn matches_any(patterns: &[&[TokenKind]], tokens: &[Token]) -> bool {
    patterns.iter().any(|pattern| matches(pattern, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlite::lexing::tokenize;
    use crate::mdlite::token::TokenKind::*;

    #[test]
    fn test_matches_exact_prefix() {
        let tokens = tokenize("*x*");
        assert!(matches(&[Star, Text, Star], &tokens));
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        let tokens = tokenize("*x* and more");
        assert!(matches(&[Star, Text], &tokens));
    }

    #[test]
    fn test_mismatch_fails() {
        let tokens = tokenize("*x_");
        assert!(!matches(&[Star, Text, Star], &tokens));
    }

    #[test]
    fn test_short_sequence_does_not_match() {
        let tokens = vec![Token::Star];
        assert!(!matches(&[Star, Text, Star], &tokens));
        assert!(!matches(&[Star], &[]));
    }

    #[test]
    fn test_empty_pattern_always_matches() {
        assert!(matches(&[], &[]));
        assert!(matches(&[], &tokenize("abc")));
    }

    #[test]
    fn test_matches_any() {
        let bold: &[&[TokenKind]] = &[
            &[Underscore, Underscore, Text, Underscore, Underscore],
            &[Star, Star, Text, Star, Star],
        ];
        assert!(matches_any(bold, &tokenize("**x**")));
        assert!(matches_any(bold, &tokenize("__x__")));
        assert!(!matches_any(bold, &tokenize("**x__")));
    }
}
