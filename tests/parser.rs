//! Parser tests
//!
//! End-to-end parses checked with the fluent AST assertions, and the syntax errors the grammar
//! is expected to raise.

use mdlite::mdlite::ast::{Document, Paragraph, Sentence};
use mdlite::mdlite::lexing::tokenize;
use mdlite::mdlite::parsing::combinators::TokenParser;
use mdlite::mdlite::parsing::grammar::{DocumentParser, SentenceParser};
use mdlite::mdlite::parsing::{parse, parse_tokens, ParseError};
use mdlite::mdlite::testing::assert_ast;
use mdlite::mdlite::token::Token;
use rstest::rstest;

#[test]
fn test_single_text_paragraph() {
    let doc = parse("hello world").unwrap();
    assert_eq!(
        doc,
        Document::new(vec![Paragraph::new(vec![Sentence::text("hello world")])])
    );
}

#[test]
fn test_two_paragraphs() {
    let doc = parse("hello\n\nworld").unwrap();
    assert_ast(&doc)
        .paragraph_count(2)
        .paragraph(0, |p| {
            p.sentence_count(1).text(0, "hello");
        })
        .paragraph(1, |p| {
            p.sentence_count(1).text(0, "world");
        });
}

#[test]
fn test_mixed_styles() {
    let doc = parse("__Foo__ and *bar*.").unwrap();
    assert_ast(&doc).paragraph_count(1).paragraph(0, |p| {
        p.sentence_count(4)
            .bold(0, "Foo")
            .text(1, " and ")
            .emphasised(2, "bar")
            .text(3, ".");
    });
}

#[test]
fn test_trailing_single_newline_is_accepted() {
    let doc = parse("one\n\ntwo\n").unwrap();
    assert_ast(&doc).paragraph_count(2).paragraph(1, |p| {
        p.text(0, "two");
    });
}

#[test]
fn test_values_are_verbatim() {
    let doc = parse("  padded  *  spaced  *").unwrap();
    assert_ast(&doc).paragraph(0, |p| {
        p.text(0, "  padded  ").emphasised(1, "  spaced  ");
    });
}

#[rstest]
#[case("**hello**", Sentence::bold("hello"), 5)]
#[case("__hello__", Sentence::bold("hello"), 5)]
#[case("*hello*", Sentence::emphasised("hello"), 3)]
#[case("_hello_", Sentence::emphasised("hello"), 3)]
#[case("hello**", Sentence::text("hello"), 1)]
fn test_sentence_priority(#[case] source: &str, #[case] expected: Sentence, #[case] consumed: usize) {
    let parsed = SentenceParser::new().try_parse(&tokenize(source), 0).unwrap();
    assert_eq!(parsed.node, expected);
    assert_eq!(parsed.consumed, consumed);
}

#[rstest]
#[case("_x*")]
#[case("*x_")]
#[case("**x__")]
#[case("__x**")]
fn test_mismatched_delimiters_are_syntax_errors(#[case] source: &str) {
    assert!(matches!(parse(source), Err(ParseError::Syntax { .. })));
}

#[rstest]
#[case("", 0, Token::EndOfFile)]
#[case("\n\nabc", 0, Token::Newline)]
#[case("a\n\n\nb", 3, Token::Newline)]
#[case("a\n\n", 3, Token::EndOfFile)]
#[case("a\n\n\n", 3, Token::Newline)]
#[case("ok\n\n*", 3, Token::Star)]
fn test_syntax_error_position(#[case] source: &str, #[case] index: usize, #[case] token: Token) {
    match parse(source) {
        Err(ParseError::Syntax {
            index: actual_index,
            token: actual_token,
            ..
        }) => {
            assert_eq!(actual_index, index, "index for {:?}", source);
            assert_eq!(actual_token, token, "token for {:?}", source);
        }
        other => panic!("expected syntax error for {:?}, got {:?}", source, other),
    }
}

#[test]
fn test_nested_styles_are_not_supported() {
    assert!(parse("**bold *and* emphasis**").is_err());
}

#[test]
fn test_successful_parse_consumes_every_token() {
    for source in ["a", "a\n", "a\n\nb", "**a** _b_ c\n\nd\n"] {
        let tokens = tokenize(source);
        let parsed = DocumentParser::new().try_parse(&tokens, 0).unwrap();
        assert_eq!(parsed.consumed, tokens.len(), "source {:?}", source);
        assert_eq!(parse_tokens(&tokens), Ok(parsed.node));
    }
}
