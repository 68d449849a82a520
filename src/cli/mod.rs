//! CLI module
//!
//! Command-line interface for schema inference.
//!
//! # Commands
//!
//! - `schema` - Print the inferred schema
//! - `document` - Print a named schema document with an example
//! - `example` - Print a minimal example value

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
