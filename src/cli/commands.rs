//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer OpenAPI schemas from example JSON/YAML payloads
#[derive(Parser, Debug)]
#[command(name = "derek")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Inference config file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the inferred schema
    Schema {
        /// Input file (JSON, or YAML by extension); stdin when absent or "-"
        input: Option<PathBuf>,

        /// Merge strategy: permissive, restricted or inner_join
        #[arg(short, long)]
        strategy: Option<String>,
    },

    /// Print a named schema document with an example attached
    Document {
        /// Input file (JSON, or YAML by extension); stdin when absent or "-"
        input: Option<PathBuf>,

        /// Merge strategy: permissive, restricted or inner_join
        #[arg(short, long)]
        strategy: Option<String>,

        /// Schema format: oas2 or oas3
        #[arg(short, long)]
        format: Option<String>,

        /// Document name
        #[arg(short, long)]
        name: Option<String>,

        /// Leave out the generated example
        #[arg(long)]
        no_example: bool,
    },

    /// Print a minimal example value with the same structure as the input
    Example {
        /// Input file (JSON, or YAML by extension); stdin when absent or "-"
        input: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
    /// YAML
    Yaml,
}
