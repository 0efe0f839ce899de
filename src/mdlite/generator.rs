//! Generator
//!
//!     Walks a [Document] in a fixed order and calls the matching [Visitor] hook at each step:
//!
//!         enter_document
//!           enter_paragraph
//!             visit_text | visit_bold | visit_emphasised   (per sentence, in order)
//!           exit_paragraph
//!           ...
//!         exit_document
//!
//!     Every hook has an empty default, so a visitor implements only the hooks it cares about and
//!     a visitor implementing none of them is perfectly legal.

use crate::mdlite::ast::{Bold, Document, Emphasised, Paragraph, Sentence, Text};

/// Visitor trait for traversing the AST
///
/// Default implementations are empty, so you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct WordCounter(usize);
///
/// impl Visitor for WordCounter {
///     fn visit_text(&mut self, text: &Text) {
///         self.0 += text.value.split_whitespace().count();
///     }
/// }
///
/// let mut counter = WordCounter(0);
/// generate(&document, &mut counter);
/// ```
pub trait Visitor {
    fn enter_document(&mut self, _document: &Document) {}
    fn exit_document(&mut self, _document: &Document) {}

    fn enter_paragraph(&mut self, _paragraph: &Paragraph) {}
    fn exit_paragraph(&mut self, _paragraph: &Paragraph) {}

    // Sentences
    fn visit_text(&mut self, _text: &Text) {}
    fn visit_bold(&mut self, _bold: &Bold) {}
    fn visit_emphasised(&mut self, _emphasised: &Emphasised) {}
}

/// Walk the document, driving the visitor's hooks in document order.
pub fn generate(document: &Document, visitor: &mut dyn Visitor) {
    visitor.enter_document(document);
    for paragraph in &document.paragraphs {
        visit_paragraph(paragraph, visitor);
    }
    visitor.exit_document(document);
}

fn visit_paragraph(paragraph: &Paragraph, visitor: &mut dyn Visitor) {
    visitor.enter_paragraph(paragraph);
    for sentence in &paragraph.sentences {
        match sentence {
            Sentence::Text(text) => visitor.visit_text(text),
            Sentence::Bold(bold) => visitor.visit_bold(bold),
            Sentence::Emphasised(emphasised) => visitor.visit_emphasised(emphasised),
        }
    }
    visitor.exit_paragraph(paragraph);
}

impl Document {
    /// Accept a visitor for traversing this document
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        generate(self, visitor);
    }
}
