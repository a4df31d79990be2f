pub mod types;
pub mod classification;

pub use types::KdumpCheckError;
pub use classification::ErrorClassification;
