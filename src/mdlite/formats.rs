//! Output formats
//!
//! Every format consumes a parsed [Document](crate::mdlite::ast::Document). The console renderer
//! and treeviz walk it through the generator's visitor hooks; json and yaml serialize it directly.

pub mod console;
pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use console::{render, ConsoleFormatter, ConsoleRenderer};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
