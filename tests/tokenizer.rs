//! Tokenizer tests
//!
//! Exact token sequences for small inputs, plus property tests for the guarantees the parser
//! relies on: scanning is total and deterministic, always ends in a single EndOfFile, and text
//! runs never swallow a symbol character.

use mdlite::mdlite::lexing::{tokenize, tokenize_with_spans};
use mdlite::mdlite::token::Token;
use proptest::prelude::*;
use rstest::rstest;

fn text(content: &str) -> Token {
    Token::Text(content.to_string())
}

#[rstest]
#[case("*", vec![Token::Star, Token::EndOfFile])]
#[case("_", vec![Token::Underscore, Token::EndOfFile])]
#[case("\n", vec![Token::Newline, Token::EndOfFile])]
#[case("_\n_", vec![Token::Underscore, Token::Newline, Token::Underscore, Token::EndOfFile])]
#[case("_Hello*", vec![Token::Underscore, text("Hello"), Token::Star, Token::EndOfFile])]
#[case("**a b**", vec![Token::Star, Token::Star, text("a b"), Token::Star, Token::Star, Token::EndOfFile])]
#[case("x\n\ny", vec![text("x"), Token::Newline, Token::Newline, text("y"), Token::EndOfFile])]
fn test_token_sequences(#[case] source: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokenize(source), expected);
}

#[test]
fn test_simple_example_snapshot() {
    insta::assert_debug_snapshot!(tokenize("_Hi_ *x*"), @r###"
    [
        Underscore,
        Text(
            "Hi",
        ),
        Underscore,
        Text(
            " ",
        ),
        Star,
        Text(
            "x",
        ),
        Star,
        EndOfFile,
    ]
    "###);
}

#[test]
fn test_spans_cover_source_in_order() {
    let source = "__Foo__ and *bar*.\n\nAnother paragraph.";
    let tokens = tokenize_with_spans(source);

    let mut offset = 0;
    for (_, span) in &tokens {
        assert_eq!(span.start, offset);
        offset = span.end;
    }
    assert_eq!(offset, source.len());
}

proptest! {
    #[test]
    fn prop_symbol_free_input_is_single_text_run(input in "[^*_\n]{0,40}") {
        let tokens = tokenize(&input);
        if input.is_empty() {
            prop_assert_eq!(tokens, vec![Token::EndOfFile]);
        } else {
            prop_assert_eq!(tokens, vec![Token::Text(input.clone()), Token::EndOfFile]);
        }
    }

    #[test]
    fn prop_tokenize_is_deterministic(input in "[a-c *_\n]{0,40}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    #[test]
    fn prop_exactly_one_trailing_end_of_file(input in "[a-c *_\n]{0,40}") {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.last(), Some(&Token::EndOfFile));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_end_of_file()).count(), 1);
    }

    #[test]
    fn prop_text_runs_are_non_empty_and_symbol_free(input in "[a-c *_\n]{0,40}") {
        for token in tokenize(&input) {
            if let Token::Text(content) = token {
                prop_assert!(!content.is_empty());
                prop_assert!(!content.contains(['*', '_', '\n']));
            }
        }
    }

    #[test]
    fn prop_tokens_reassemble_source(input in "[a-c *_\n]{0,40}") {
        let rebuilt: String = tokenize(&input)
            .iter()
            .map(|token| match token {
                Token::Star => "*".to_string(),
                Token::Underscore => "_".to_string(),
                Token::Newline => "\n".to_string(),
                Token::Text(content) => content.clone(),
                Token::EndOfFile => String::new(),
            })
            .collect();
        prop_assert_eq!(rebuilt, input);
    }
}
