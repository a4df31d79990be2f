pub mod analyze;

pub use analyze::{analyze_document, analyze_file, analyze_upload};
