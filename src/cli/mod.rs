pub mod commands;
pub mod serve;
pub mod analyze;

pub use commands::{Cli, Commands};
