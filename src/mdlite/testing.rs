//! Testing utilities for AST assertions
//!
//! A fluent API for checking a parsed document's shape and content in one expression, instead
//! of hand-written matches over nested vectors.
//!
//! ```rust-example
//! use mdlite::mdlite::testing::assert_ast;
//!
//! let doc = parse("__Foo__ and *bar*.\n\nAnother paragraph.")?;
//!
//! assert_ast(&doc)
//!     .paragraph_count(2)
//!     .paragraph(0, |p| {
//!         p.sentence_count(4)
//!             .bold(0, "Foo")
//!             .text(1, " and ")
//!             .emphasised(2, "bar")
//!             .text(3, ".");
//!     })
//!     .paragraph(1, |p| {
//!         p.text(0, "Another paragraph.");
//!     });
//! ```
//!
//! Failure messages carry a context path such as `document:paragraphs[0]:sentences[2]`.

use crate::mdlite::ast::{Document, Paragraph, Sentence};

/// Start a fluent assertion chain on a document
pub fn assert_ast(document: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion {
        document,
        context: "document".to_string(),
    }
}

pub struct DocumentAssertion<'a> {
    document: &'a Document,
    context: String,
}

impl<'a> DocumentAssertion<'a> {
    pub fn paragraph_count(self, expected: usize) -> Self {
        let actual = self.document.paragraphs.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} paragraphs, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn paragraph<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ParagraphAssertion<'a>),
    {
        let paragraph = self.document.paragraphs.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Paragraph index {} out of bounds (document has {} paragraphs)",
                self.context,
                index,
                self.document.paragraphs.len()
            )
        });
        assertion(ParagraphAssertion {
            paragraph,
            context: format!("{}:paragraphs[{}]", self.context, index),
        });
        self
    }
}

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    pub fn sentence_count(self, expected: usize) -> Self {
        let actual = self.paragraph.sentences.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} sentences, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Styling-free text of the whole paragraph
    pub fn plain_text(self, expected: &str) -> Self {
        let actual = self.paragraph.plain_text();
        assert_eq!(
            actual, expected,
            "{}: Expected plain text {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn text(self, index: usize, expected: &str) -> Self {
        self.sentence(index, "Text", expected)
    }

    pub fn bold(self, index: usize, expected: &str) -> Self {
        self.sentence(index, "Bold", expected)
    }

    pub fn emphasised(self, index: usize, expected: &str) -> Self {
        self.sentence(index, "Emphasised", expected)
    }

    fn sentence(self, index: usize, kind: &str, expected: &str) -> Self {
        let sentence: &Sentence = self.paragraph.sentences.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Sentence index {} out of bounds (paragraph has {} sentences)",
                self.context,
                index,
                self.paragraph.sentences.len()
            )
        });
        assert_eq!(
            sentence.kind_name(),
            kind,
            "{}:sentences[{}]: Expected {}, found {:?}",
            self.context,
            index,
            kind,
            sentence
        );
        assert_eq!(
            sentence.value(),
            expected,
            "{}:sentences[{}]: Expected value {:?}, found {:?}",
            self.context,
            index,
            expected,
            sentence.value()
        );
        self
    }
}
