//! Grammar
//!
//!     The concrete grammar, as a fixed composition of combinators over leaf parsers:
//!
//!         document            = many(paragraph)                       at least one
//!         paragraph           = first(sentence_and_eof, sentence_and_newline)
//!         sentence_and_eof    = many(sentence) (<newline> <eof> | <eof>)
//!         sentence_and_newline= many(sentence) <newline> <newline>
//!         sentence            = first(emphasised, bold, text)
//!         bold                = <_><_><text><_><_> | <*><*><text><*><*>
//!         emphasised          = <_><text><_> | <*><text><*>
//!         text                = <text>
//!
//!     Both paragraph forms need at least one sentence, so a paragraph never comes out empty.
//!
//! Ordering
//!
//!     Sentence alternatives are tried emphasised, bold, text. For `**x**` the emphasised
//!     pattern fails on its second token (a star, not text) and control falls through to bold.
//!
//!     Paragraph alternatives are tried EOF-terminated first, so the final paragraph of a
//!     document, which has no trailing blank line, is recognized.
//!
//!     A paragraph boundary consumes exactly two newlines. A third newline is left for the next
//!     paragraph attempt, which has no sentences and fails, so `a\n\n\nb` is a syntax error.

use super::combinators::{window, First, Many, Parsed, TokenParser};
use super::pattern;
use crate::mdlite::ast::{Document, Paragraph, Sentence};
use crate::mdlite::token::TokenKind::{EndOfFile, Newline, Star, Text as TextKind, Underscore};
use crate::mdlite::token::{Token, TokenKind};

const BOLD_PATTERNS: &[&[TokenKind]] = &[
    &[Underscore, Underscore, TextKind, Underscore, Underscore],
    &[Star, Star, TextKind, Star, Star],
];

const EMPHASISED_PATTERNS: &[&[TokenKind]] = &[
    &[Underscore, TextKind, Underscore],
    &[Star, TextKind, Star],
];

const PARAGRAPH_BREAK: &[TokenKind] = &[Newline, Newline];
const NEWLINE_THEN_EOF: &[TokenKind] = &[Newline, EndOfFile];
const EOF: &[TokenKind] = &[EndOfFile];

/// A single text run
pub struct TextParser;

impl TokenParser for TextParser {
    type Output = Sentence;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Sentence>> {
        let content = tokens.get(cursor)?.text()?;
        Some(Parsed::new(Sentence::text(content), 1))
    }
}

/// `**text**` or `__text__`
pub struct BoldParser;

impl TokenParser for BoldParser {
    type Output = Sentence;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Sentence>> {
        let remaining = window(tokens, cursor);
        if !pattern::matches_any(BOLD_PATTERNS, remaining) {
            return None;
        }
        let content = remaining[2].text()?;
        Some(Parsed::new(Sentence::bold(content), 5))
    }
}

/// `*text*` or `_text_`
pub struct EmphasisedParser;

impl TokenParser for EmphasisedParser {
    type Output = Sentence;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Sentence>> {
        let remaining = window(tokens, cursor);
        if !pattern::matches_any(EMPHASISED_PATTERNS, remaining) {
            return None;
        }
        let content = remaining[1].text()?;
        Some(Parsed::new(Sentence::emphasised(content), 3))
    }
}

/// One inline span: emphasised, bold or plain text, in that order
pub struct SentenceParser {
    alternatives: First<Sentence>,
}

impl SentenceParser {
    pub fn new() -> Self {
        let alternatives: Vec<Box<dyn TokenParser<Output = Sentence>>> = vec![
            Box::new(EmphasisedParser),
            Box::new(BoldParser),
            Box::new(TextParser),
        ];
        SentenceParser {
            alternatives: First::new(alternatives),
        }
    }
}

impl Default for SentenceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser for SentenceParser {
    type Output = Sentence;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Sentence>> {
        self.alternatives.try_parse(tokens, cursor)
    }
}

/// Collect sentences at `cursor`, failing when there are none.
fn sentences(
    many: &Many<SentenceParser>,
    tokens: &[Token],
    cursor: usize,
) -> Option<Parsed<Vec<Sentence>>> {
    let parsed = many.repeat(tokens, cursor);
    if parsed.node.is_empty() {
        None
    } else {
        Some(parsed)
    }
}

/// Sentences followed by a blank line (two newlines)
pub struct SentenceAndNewLineParser {
    sentences: Many<SentenceParser>,
}

impl SentenceAndNewLineParser {
    pub fn new() -> Self {
        SentenceAndNewLineParser {
            sentences: Many::new(SentenceParser::new()),
        }
    }
}

impl Default for SentenceAndNewLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser for SentenceAndNewLineParser {
    type Output = Paragraph;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Paragraph>> {
        let parsed = sentences(&self.sentences, tokens, cursor)?;
        let after = cursor + parsed.consumed;

        if !pattern::matches(PARAGRAPH_BREAK, window(tokens, after)) {
            tracing::trace!(
                cursor,
                sentences = parsed.node.len(),
                "discarding paragraph attempt: no blank line after sentences"
            );
            return None;
        }

        Some(Parsed::new(
            Paragraph::new(parsed.node),
            parsed.consumed + PARAGRAPH_BREAK.len(),
        ))
    }
}

/// Sentences that run to the end of input, with at most one newline before it
pub struct SentenceAndEofParser {
    sentences: Many<SentenceParser>,
}

impl SentenceAndEofParser {
    pub fn new() -> Self {
        SentenceAndEofParser {
            sentences: Many::new(SentenceParser::new()),
        }
    }
}

impl Default for SentenceAndEofParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser for SentenceAndEofParser {
    type Output = Paragraph;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Paragraph>> {
        let parsed = sentences(&self.sentences, tokens, cursor)?;
        let remaining = window(tokens, cursor + parsed.consumed);

        let terminator = if pattern::matches(NEWLINE_THEN_EOF, remaining) {
            NEWLINE_THEN_EOF.len()
        } else if pattern::matches(EOF, remaining) {
            EOF.len()
        } else {
            return None;
        };

        Some(Parsed::new(
            Paragraph::new(parsed.node),
            parsed.consumed + terminator,
        ))
    }
}

/// A paragraph, trying the end-of-input form first
pub struct ParagraphParser {
    alternatives: First<Paragraph>,
}

impl ParagraphParser {
    pub fn new() -> Self {
        let alternatives: Vec<Box<dyn TokenParser<Output = Paragraph>>> = vec![
            Box::new(SentenceAndEofParser::new()),
            Box::new(SentenceAndNewLineParser::new()),
        ];
        ParagraphParser {
            alternatives: First::new(alternatives),
        }
    }
}

impl Default for ParagraphParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser for ParagraphParser {
    type Output = Paragraph;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Paragraph>> {
        self.alternatives.try_parse(tokens, cursor)
    }
}

/// One or more paragraphs
pub struct DocumentParser {
    paragraphs: Many<ParagraphParser>,
}

impl DocumentParser {
    pub fn new() -> Self {
        DocumentParser {
            paragraphs: Many::new(ParagraphParser::new()),
        }
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenParser for DocumentParser {
    type Output = Document;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Document>> {
        let parsed = self.paragraphs.repeat(tokens, cursor);
        if parsed.node.is_empty() {
            return None;
        }
        Some(parsed.map(Document::new))
    }
}
