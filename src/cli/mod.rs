//! CLI command implementations

pub mod args;
pub mod call;

pub use args::Cli;
