pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod reporting;
pub mod upload;
