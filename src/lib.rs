//! # mdlite
//!
//! A parser and renderer for a small markup dialect: plain text, `*emphasis*` / `_emphasis_`,
//! `**bold**` / `__bold__`, and paragraphs separated by a blank line.
//!
//! File Layout
//!
//! src/mdlite
//!   ├── token        Token shapes produced by the tokenizer
//!   ├── lexing       Source string to token sequence
//!   ├── parsing      Pattern matcher, combinators and the concrete grammar
//!   ├── ast          The immutable document tree
//!   ├── generator    Visitor trait and the tree walk that drives it
//!   ├── formats      Console renderer and the serialization formats
//!   ├── config       Layered configuration
//!   └── processor    One call from source to formatted output
//!
//! The contract between stages is small on purpose: the lexer hands an owned token sequence to
//! the parser, the parser hands back a [Document](mdlite::ast::Document), and everything after
//! that only reads the tree.

pub mod mdlite;

pub use mdlite::ast::{Bold, Document, Emphasised, Paragraph, Sentence, Text};
pub use mdlite::generator::{generate, Visitor};
pub use mdlite::lexing::tokenize;
pub use mdlite::parsing::{parse, ParseError};
pub use mdlite::token::Token;
