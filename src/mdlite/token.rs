//! Core token types shared by the lexer and the parser.
//!
//!     The token grammar is total: every character of the source is either one of the three
//!     symbol characters (`_`, `*`, `\n`) or part of a maximal run of other characters. Logos
//!     produces everything except the final EndOfFile marker, which the lexer appends exactly
//!     once. See [lexing](crate::mdlite::lexing).
//!
//! Token Kinds
//!
//!     Parsers rarely care about a token's payload, only about its shape. [TokenKind] is the
//!     payload-free view of a [Token] and is what the pattern matcher compares against, so a
//!     delimiter pattern is just a list of kinds.

use logos::Logos;
use std::fmt;

/// All tokens produced by the mdlite lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    #[token("_")]
    Underscore,

    #[token("*")]
    Star,

    #[token("\n")]
    Newline,

    /// A non-empty run containing none of `*`, `_`, `\n`
    #[regex(r"[^*_\n]+", |lex| lex.slice().to_owned())]
    Text(String),

    /// Synthetic: appended by the lexer, never matched from source
    EndOfFile,
}

/// Payload-free classification of a [Token].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Underscore,
    Star,
    Newline,
    Text,
    EndOfFile,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Underscore => TokenKind::Underscore,
            Token::Star => TokenKind::Star,
            Token::Newline => TokenKind::Newline,
            Token::Text(_) => TokenKind::Text,
            Token::EndOfFile => TokenKind::EndOfFile,
        }
    }

    /// The text payload, if this is a text run
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Text(content) => Some(content),
            _ => None,
        }
    }

    /// Check if this token is one of the inline delimiter symbols
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::Underscore | Token::Star)
    }

    pub fn is_end_of_file(&self) -> bool {
        matches!(self, Token::EndOfFile)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Underscore => write!(f, "Underscore"),
            Token::Star => write!(f, "Star"),
            Token::Newline => write!(f, "Newline"),
            Token::Text(content) => write!(f, "Text({:?})", content),
            Token::EndOfFile => write!(f, "EndOfFile"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Underscore => "Underscore",
            TokenKind::Star => "Star",
            TokenKind::Newline => "Newline",
            TokenKind::Text => "Text",
            TokenKind::EndOfFile => "EndOfFile",
        };
        f.write_str(name)
    }
}
