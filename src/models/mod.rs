pub mod report;
pub mod extraction;
pub mod verdict;

pub use report::*;
pub use extraction::*;
pub use verdict::*;
