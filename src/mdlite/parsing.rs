//! Parser
//!
//!     Parsing turns the token sequence into a [Document]. The engine is a tree of pure
//!     functions from "token buffer + cursor" to "maybe (node, tokens consumed)":
//!
//!         1. [pattern] matches fixed-shape delimiter runs against a token prefix.
//!         2. [combinators] provides the two generic building blocks, Many and First.
//!         3. [grammar] composes them with the leaf parsers into the concrete grammar.
//!
//!     Inside the engine, "no match" is an ordinary `None`. Only this module's entry points
//!     turn it into an error: a successful parse has to account for every token, including the
//!     final EndOfFile, and anything else is a [ParseError::Syntax] naming the first token the
//!     grammar could not place.

pub mod combinators;
pub mod grammar;
pub mod pattern;

use crate::mdlite::ast::Document;
use crate::mdlite::lexing::tokenize_with_spans;
use crate::mdlite::token::Token;
use combinators::TokenParser;
use grammar::DocumentParser;
use std::fmt;
use std::ops::Range;

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The grammar could not account for the token at `index`
    Syntax {
        index: usize,
        token: Token,
        /// Byte range in the source, when the tokens came from one
        span: Option<Range<usize>>,
    },
}

impl ParseError {
    /// Index of the offending token
    pub fn index(&self) -> usize {
        match self {
            ParseError::Syntax { index, .. } => *index,
        }
    }

    fn with_spans(self, spans: &[Range<usize>]) -> Self {
        match self {
            ParseError::Syntax { index, token, .. } => ParseError::Syntax {
                index,
                token,
                span: spans.get(index).cloned(),
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { index, token, span } => {
                write!(f, "Syntax error at token {} ({})", index, token)?;
                if let Some(span) = span {
                    write!(f, " [bytes {}..{}]", span.start, span.end)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a token sequence into a document.
///
/// The sequence is expected to come from the lexer and end with EndOfFile. Every token must be
/// consumed. A sequence the grammar cannot start on at all reports index 0.
pub fn parse_tokens(tokens: &[Token]) -> Result<Document, ParseError> {
    let (document, consumed) = match DocumentParser::new().try_parse(tokens, 0) {
        Some(parsed) => (Some(parsed.node), parsed.consumed),
        None => (None, 0),
    };

    match document {
        Some(document) if consumed == tokens.len() => {
            tracing::debug!(
                paragraphs = document.paragraphs.len(),
                consumed,
                "parsed document"
            );
            Ok(document)
        }
        _ => {
            tracing::debug!(index = consumed, total = tokens.len(), "syntax error");
            Err(ParseError::Syntax {
                index: consumed,
                token: tokens.get(consumed).cloned().unwrap_or(Token::EndOfFile),
                span: None,
            })
        }
    }
}

/// Tokenize and parse source text.
///
/// Syntax errors carry the byte range of the offending token.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let (tokens, spans): (Vec<Token>, Vec<Range<usize>>) =
        tokenize_with_spans(source).into_iter().unzip();
    parse_tokens(&tokens).map_err(|error| error.with_spans(&spans))
}
