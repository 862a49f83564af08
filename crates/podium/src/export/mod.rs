//! Output formats for query results.
//!
//! - **Text**: one value per line
//! - **JSON**: a single JSON array

mod format;
mod json;
mod text;

pub use format::{ExportFormat, OutputFormat};
pub use json::JsonExporter;
pub use text::TextExporter;
