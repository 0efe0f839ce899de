//! Treeviz formatter
//!
//! One line per node, nesting shown with box-drawing connectors, which makes the shape of a
//! parse easy to scan:
//!
//!   ⧉ Document (2 paragraphs)
//!   ├─ ¶ Foobar
//!   │  ├─ 𝐁 Foo
//!   │  └─ 𝐼 bar
//!   └─ ¶ Another paragraph.
//!      └─ ◦ Another paragraph.
//!
//! Icons
//!     Document: ⧉
//!     Paragraph: ¶
//!     Text: ◦
//!     Bold: 𝐁
//!     Emphasised: 𝐼
//!
//! Labels are truncated to 30 characters.

use super::registry::{FormatError, Formatter};
use crate::mdlite::ast::{Bold, Document, Emphasised, Paragraph, Text};
use crate::mdlite::generator::{generate, Visitor};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn connector(index: usize, count: usize) -> &'static str {
    if index + 1 == count {
        "└─"
    } else {
        "├─"
    }
}

#[derive(Default)]
struct TreevizVisitor {
    output: String,
    paragraph_count: usize,
    paragraph_index: usize,
    sentence_count: usize,
    sentence_index: usize,
}

impl TreevizVisitor {
    /// Prefix for sentence lines under the current paragraph
    fn sentence_prefix(&self) -> &'static str {
        if self.paragraph_index + 1 == self.paragraph_count {
            "   "
        } else {
            "│  "
        }
    }

    fn push_sentence(&mut self, icon: &str, value: &str) {
        let line = format!(
            "{}{} {} {}\n",
            self.sentence_prefix(),
            connector(self.sentence_index, self.sentence_count),
            icon,
            truncate(value, MAX_LABEL_CHARS)
        );
        self.output.push_str(&line);
        self.sentence_index += 1;
    }
}

impl Visitor for TreevizVisitor {
    fn enter_document(&mut self, document: &Document) {
        self.paragraph_count = document.paragraphs.len();
        let noun = if self.paragraph_count == 1 {
            "paragraph"
        } else {
            "paragraphs"
        };
        self.output
            .push_str(&format!("⧉ Document ({} {})\n", self.paragraph_count, noun));
    }

    fn enter_paragraph(&mut self, paragraph: &Paragraph) {
        self.sentence_count = paragraph.sentences.len();
        self.sentence_index = 0;
        self.output.push_str(&format!(
            "{} ¶ {}\n",
            connector(self.paragraph_index, self.paragraph_count),
            truncate(&paragraph.plain_text(), MAX_LABEL_CHARS)
        ));
    }

    fn exit_paragraph(&mut self, _paragraph: &Paragraph) {
        self.paragraph_index += 1;
    }

    fn visit_text(&mut self, text: &Text) {
        self.push_sentence("◦", &text.value);
    }

    fn visit_bold(&mut self, bold: &Bold) {
        self.push_sentence("𝐁", &bold.value);
    }

    fn visit_emphasised(&mut self, emphasised: &Emphasised) {
        self.push_sentence("𝐼", &emphasised.value);
    }
}

/// Format a document as a treeviz string
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut visitor = TreevizVisitor::default();
    generate(doc, &mut visitor);
    visitor.output
}

/// Registry adapter for treeviz output
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlite::ast::Sentence;

    #[test]
    fn test_single_paragraph() {
        let doc = Document::new(vec![Paragraph::new(vec![Sentence::text("hello")])]);
        assert_eq!(
            to_treeviz_str(&doc),
            "⧉ Document (1 paragraph)\n└─ ¶ hello\n   └─ ◦ hello\n"
        );
    }

    #[test]
    fn test_truncates_long_labels() {
        let long = "a".repeat(40);
        let doc = Document::new(vec![Paragraph::new(vec![Sentence::text(long.clone())])]);
        let output = to_treeviz_str(&doc);
        assert!(output.contains(&format!("◦ {}...", "a".repeat(30))));
        assert!(!output.contains(&long));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
