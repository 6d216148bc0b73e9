//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use schemata_core::Format;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Schemata CLI - inspect JSON-Schema-like API documents
///
/// Renders normalized schemas, follows `$ref` chains and synthesizes
/// representative examples for documentation.
#[derive(Parser, Debug)]
#[command(
    name = "schemata",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SCHEMATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the normalized document
    Render(RenderArgs),

    /// Print synthesized examples for definitions
    Example(ExampleArgs),

    /// Resolve a JSON pointer and print the key and value it reaches
    Deref(DerefArgs),

    /// Print the document's self link
    Href(HrefArgs),

    /// List every `$ref` in the document and whether it resolves
    Refs(RefsArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the example command
#[derive(Parser, Debug)]
pub struct ExampleArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Definition ids to synthesize; all definitions when omitted
    #[arg(value_name = "DEFINITION")]
    pub definitions: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the deref command
#[derive(Parser, Debug)]
pub struct DerefArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Pointer to resolve, e.g. `#/definitions/app`
    #[arg(value_name = "POINTER")]
    pub pointer: String,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the href command
#[derive(Parser, Debug)]
pub struct HrefArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the refs command
#[derive(Parser, Debug)]
pub struct RefsArgs {
    /// Path to the schema document (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON output
    #[default]
    Json,
    /// YAML output
    Yaml,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::Yaml => Format::Yaml,
        }
    }
}
