//! Console renderer
//!
//! Renders a document as terminal text with ANSI SGR styling. Bold spans are wrapped in
//! `ESC[1m` .. `ESC[0m`, emphasised spans in reverse video `ESC[7m` .. `ESC[0m` (both
//! configurable, see [ConsoleConfig]).
//!
//! Paragraph layout: a blank line before every paragraph except the first, and a newline after
//! every paragraph, the last one included. So `hello` / `world` renders as `"hello\n\nworld\n"`.

use super::registry::{FormatError, Formatter};
use crate::mdlite::ast::{Bold, Document, Emphasised, Paragraph, Text};
use crate::mdlite::config::{ConsoleConfig, TextStyle};
use crate::mdlite::generator::{generate, Visitor};
use crossterm::style::{Attribute, SetAttribute};

/// A stateful visitor accumulating styled output.
///
/// No document-level hooks are implemented; the generator skips them.
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    output: String,
    first_paragraph: bool,
    styles: ConsoleConfig,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::with_styles(ConsoleConfig::default())
    }

    pub fn with_styles(styles: ConsoleConfig) -> Self {
        ConsoleRenderer {
            output: String::new(),
            first_paragraph: true,
            styles,
        }
    }

    /// Output rendered so far
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn push_styled(&mut self, style: TextStyle, value: &str) {
        self.output.push_str(&format!(
            "{}{}{}",
            SetAttribute(style.attribute()),
            value,
            SetAttribute(Attribute::Reset)
        ));
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for ConsoleRenderer {
    fn enter_paragraph(&mut self, _paragraph: &Paragraph) {
        if !self.first_paragraph {
            self.output.push('\n');
        }
    }

    fn exit_paragraph(&mut self, _paragraph: &Paragraph) {
        self.output.push('\n');
        self.first_paragraph = false;
    }

    fn visit_text(&mut self, text: &Text) {
        self.output.push_str(&text.value);
    }

    fn visit_bold(&mut self, bold: &Bold) {
        self.push_styled(self.styles.bold, &bold.value);
    }

    fn visit_emphasised(&mut self, emphasised: &Emphasised) {
        self.push_styled(self.styles.emphasis, &emphasised.value);
    }
}

/// Render a document with the default styles
pub fn render(document: &Document) -> String {
    let mut renderer = ConsoleRenderer::new();
    generate(document, &mut renderer);
    renderer.into_output()
}

/// Registry adapter for the console renderer
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormatter {
    styles: ConsoleConfig,
}

impl ConsoleFormatter {
    pub fn new(styles: ConsoleConfig) -> Self {
        ConsoleFormatter { styles }
    }
}

impl Formatter for ConsoleFormatter {
    fn name(&self) -> &str {
        "console"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut renderer = ConsoleRenderer::with_styles(self.styles);
        generate(doc, &mut renderer);
        Ok(renderer.into_output())
    }

    fn description(&self) -> &str {
        "Terminal text with ANSI bold and reverse-video styling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlite::ast::Sentence;

    fn single(sentences: Vec<Sentence>) -> Document {
        Document::new(vec![Paragraph::new(sentences)])
    }

    #[test]
    fn test_plain_text() {
        let doc = single(vec![Sentence::text("hello world")]);
        assert_eq!(render(&doc), "hello world\n");
    }

    #[test]
    fn test_paragraph_breaks() {
        let doc = Document::new(vec![
            Paragraph::new(vec![Sentence::text("hello")]),
            Paragraph::new(vec![Sentence::text("world")]),
        ]);
        assert_eq!(render(&doc), "hello\n\nworld\n");
    }

    #[test]
    fn test_bold_text() {
        let doc = single(vec![Sentence::bold("hello"), Sentence::text(" world")]);
        assert_eq!(render(&doc), "\x1b[1mhello\x1b[0m world\n");
    }

    #[test]
    fn test_emphasised_text() {
        let doc = single(vec![Sentence::text("hello "), Sentence::emphasised("world")]);
        assert_eq!(render(&doc), "hello \x1b[7mworld\x1b[0m\n");
    }

    #[test]
    fn test_custom_styles() {
        let doc = single(vec![Sentence::emphasised("x")]);
        let formatter = ConsoleFormatter::new(ConsoleConfig {
            bold: TextStyle::Bold,
            emphasis: TextStyle::Underlined,
        });
        assert_eq!(formatter.serialize(&doc).unwrap(), "\x1b[4mx\x1b[0m\n");
    }

    #[test]
    fn test_renderer_state_is_per_instance() {
        let doc = single(vec![Sentence::text("a")]);
        assert_eq!(render(&doc), "a\n");
        assert_eq!(render(&doc), "a\n");
    }
}
