//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "yamltag")]
#[command(about = "Inspect YAML implicit tag resolution", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Schema to resolve with (failsafe, json, core, extended)
    #[arg(short, long, global = true, env = "YAMLTAG_SCHEMA")]
    pub schema: Option<String>,

    /// Schema configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable the fallback of unmatched plain scalars to !!str
    #[arg(long, global = true)]
    pub no_fallback: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the tag (and value) of plain scalars
    Resolve {
        /// Scalar texts to resolve
        #[arg(required = true)]
        values: Vec<String>,

        /// Treat the values as quoted scalars
        #[arg(short, long)]
        quoted: bool,

        /// Only report tags, skip decoding values
        #[arg(long)]
        no_value: bool,
    },

    /// List the schema's registered tag aliases
    Tags,

    /// Expand a short tag to its long form
    Expand {
        tag: String,
    },

    /// Shorten a long tag to its short form
    Shorten {
        tag: String,
    },
}
