//! Lexer
//!
//!     Scanning turns the source string into a flat, ordered token sequence. The rules are
//!     tried in a fixed priority order: `_`, `*`, `\n`, then the longest run of anything else.
//!     Logos does the actual scanning; the symbol tokens and the text regex are disjoint, so
//!     logos' longest-match rule and the priority order agree.
//!
//!     The sequence always ends with exactly one EndOfFile token. Its span is the empty range at
//!     the end of the source, which lets syntax errors point at "end of input".
//!
//!     Tokenizing never fails for user input. A character logos cannot place would mean the
//!     token grammar itself is broken, and that is reported loudly as a panic carrying a
//!     [LexError] rather than surfaced as a recoverable error.

use crate::mdlite::token::Token;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// A broken tokenizer invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Input that none of the scanning rules accepted
    UnrecognizedInput { span: Range<usize> },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedInput { span } => write!(
                f,
                "Tokenizer fault: no rule matched input at bytes {}..{}",
                span.start, span.end
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Scan the source, reporting rather than panicking on a rule gap.
pub fn scan(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(_) => {
                return Err(LexError::UnrecognizedInput {
                    span: lexer.span(),
                })
            }
        }
    }

    let end = source.len();
    tokens.push((Token::EndOfFile, end..end));
    Ok(tokens)
}

/// Tokenize source code with location information.
///
/// Every token is paired with the byte range it covers. The trailing EndOfFile covers the
/// empty range `len..len`.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    match scan(source) {
        Ok(tokens) => {
            tracing::debug!(
                input_len = source.len(),
                token_count = tokens.len(),
                "tokenized source"
            );
            tokens
        }
        Err(fault) => panic!("{}", fault),
    }
}

/// Tokenize source code, dropping locations.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}
