//! Processing API
//!
//! One call from markup source to formatted output: tokenize, parse, then serialize with a
//! named format from the [FormatRegistry].
//!
//! ```rust,ignore
//! use mdlite::mdlite::config::load_defaults;
//! use mdlite::mdlite::processor::Processor;
//!
//! let processor = Processor::new(&load_defaults()?);
//! let output = processor.process("**hello** world", "console")?;
//! ```

use crate::mdlite::config::MdliteConfig;
use crate::mdlite::formats::{FormatError, FormatRegistry};
use crate::mdlite::parsing::{parse, ParseError};
use std::fmt;

/// Errors from either stage of processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    Parse(ParseError),
    Format(FormatError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Parse(e) => write!(f, "{}", e),
            ProcessingError::Format(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Parse(e) => Some(e),
            ProcessingError::Format(e) => Some(e),
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(e: ParseError) -> Self {
        ProcessingError::Parse(e)
    }
}

impl From<FormatError> for ProcessingError {
    fn from(e: FormatError) -> Self {
        ProcessingError::Format(e)
    }
}

/// Parses sources and formats them through a configured registry
pub struct Processor {
    registry: FormatRegistry,
}

impl Processor {
    pub fn new(config: &MdliteConfig) -> Self {
        Processor {
            registry: FormatRegistry::with_config(config),
        }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Parse `source` and serialize it in `format`.
    ///
    /// The format is checked before parsing so an unknown name is reported even for
    /// unparseable input.
    pub fn process(&self, source: &str, format: &str) -> Result<String, ProcessingError> {
        if !self.registry.has(format) {
            return Err(FormatError::FormatNotFound(format.to_string()).into());
        }
        let document = parse(source)?;
        Ok(self.registry.serialize(&document, format)?)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Processor {
            registry: FormatRegistry::with_defaults(),
        }
    }
}

/// Process with a one-off processor built from `config`
pub fn process(
    source: &str,
    format: &str,
    config: &MdliteConfig,
) -> Result<String, ProcessingError> {
    Processor::new(config).process(source, format)
}
