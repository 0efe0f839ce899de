//! Structured serialization of the AST
//!
//! JSON and YAML renditions of the document, straight from the serde derives on the AST.
//! Sentences are externally tagged: `{"Bold": {"value": "Foo"}}`.

use super::registry::{FormatError, Formatter};
use crate::mdlite::ast::Document;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON of the document tree"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML of the document tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlite::ast::{Paragraph, Sentence};

    fn sample_doc() -> Document {
        Document::new(vec![Paragraph::new(vec![
            Sentence::bold("Foo"),
            Sentence::text(" bar"),
        ])])
    }

    #[test]
    fn test_json_round_trips() {
        let json = JsonFormatter.serialize(&sample_doc()).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_doc());
    }

    #[test]
    fn test_json_shape() {
        let json = JsonFormatter.serialize(&sample_doc()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["paragraphs"][0]["sentences"][0]["Bold"]["value"],
            "Foo"
        );
    }

    #[test]
    fn test_yaml_round_trips() {
        let yaml = YamlFormatter.serialize(&sample_doc()).unwrap();
        let back: Document = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, sample_doc());
    }
}
