//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wrench_fs::OutputFormat;

/// Wrench - Resolve layered deployment configuration
#[derive(Parser, Debug)]
#[command(name = "wrench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where configuration is read from
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// Group identifier, e.g. com.example.app
    #[arg(short, long, global = true, env = "WRENCH_GROUP")]
    pub group: Option<String>,

    /// Resource root directory; repeat to search several roots in order
    #[arg(
        short,
        long = "resources",
        global = true,
        env = "WRENCH_RESOURCES",
        value_delimiter = ',',
        default_value = "."
    )]
    pub resources: Vec<PathBuf>,

    /// Directory to start the upward search for secrets.properties
    #[arg(long, global = true, env = "WRENCH_SECRETS_DIR")]
    pub secrets_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve target contexts
    ///
    /// Examples:
    ///   wrench -g com.example.app resolve                 # All contexts as JSON
    ///   wrench -g com.example.app resolve -t t1 -f yaml   # One context as YAML
    ///   wrench -g com.example.app resolve -o out.toml     # Format from extension
    Resolve {
        /// Only resolve this target
        #[arg(short, long)]
        target: Option<String>,

        /// Output format (json, yaml, toml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List declared targets
    Targets,

    /// Print the effective flat properties
    Properties {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved system subtree
    Tree {
        /// Output format (json, yaml, toml)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Shorten a four-segment version to its compact code
    ShortenVersion {
        /// Version such as 10.1.2.3
        version: String,
    },
}
