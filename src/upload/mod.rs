pub mod staging;

pub use staging::StagedUpload;
