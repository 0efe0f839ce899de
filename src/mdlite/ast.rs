//! AST
//!
//!     The document tree produced by the parser. Nodes are built bottom-up during parsing and
//!     never mutated afterwards; consumers only read them.
//!
//!     Document
//!       └── Paragraph (one or more)
//!             └── Sentence (one or more): Text | Bold | Emphasised
//!
//!     "Sentence" is the grammar's historical name for one inline span within a paragraph. It
//!     is a closed sum type, so adding a new inline variant is a compile error in every
//!     exhaustive match over it, the generator's dispatch included.
//!
//!     How many tokens a node was built from is parsing bookkeeping and is deliberately absent
//!     here. See [Parsed](crate::mdlite::parsing::combinators::Parsed).

use serde::{Deserialize, Serialize};

/// Plain text span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Span delimited by `**` or `__`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bold {
    pub value: String,
}

/// Span delimited by `*` or `_`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emphasised {
    pub value: String,
}

/// One inline span of a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentence {
    Text(Text),
    Bold(Bold),
    Emphasised(Emphasised),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
}

/// The root node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
        }
    }
}

impl Bold {
    pub fn new(value: impl Into<String>) -> Self {
        Bold {
            value: value.into(),
        }
    }
}

impl Emphasised {
    pub fn new(value: impl Into<String>) -> Self {
        Emphasised {
            value: value.into(),
        }
    }
}

impl Sentence {
    pub fn text(value: impl Into<String>) -> Self {
        Sentence::Text(Text::new(value))
    }

    pub fn bold(value: impl Into<String>) -> Self {
        Sentence::Bold(Bold::new(value))
    }

    pub fn emphasised(value: impl Into<String>) -> Self {
        Sentence::Emphasised(Emphasised::new(value))
    }

    /// The verbatim text payload, whatever the styling
    pub fn value(&self) -> &str {
        match self {
            Sentence::Text(text) => &text.value,
            Sentence::Bold(bold) => &bold.value,
            Sentence::Emphasised(emphasised) => &emphasised.value,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Sentence::Text(_) => "Text",
            Sentence::Bold(_) => "Bold",
            Sentence::Emphasised(_) => "Emphasised",
        }
    }
}

impl Paragraph {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Paragraph { sentences }
    }

    /// Concatenated sentence values with styling dropped
    pub fn plain_text(&self) -> String {
        self.sentences.iter().map(Sentence::value).collect()
    }
}

impl Document {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Document { paragraphs }
    }
}
