pub mod xml;

pub use xml::{parse_report, ROOT_ELEMENT};
