//! CLI argument definitions for the Sundry binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Dot-path queries over JSON documents, plus text and pagination helpers
#[derive(Parser, Debug)]
#[command(name = "sundry")]
#[command(about = "Sundry: dot-path tools for JSON documents")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human", env = "SUNDRY_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the value at a dot path
    Get(GetArgs),
    /// Write a value at a dot path and print the updated document
    Set(SetArgs),
    /// Remove one or more dot paths and print the updated document
    Forget(ForgetArgs),
    /// Flatten a document into dotted keys, or rebuild one from them
    Dot(DotArgs),
    /// List every leaf value of a document
    Flatten(InputArgs),
    /// Turn a title into a URL slug
    Slug(SlugArgs),
    /// Generate a random alphanumeric token
    Random(RandomArgs),
    /// Compute pagination for a record count
    Pages(PagesArgs),
}

/// Where to read the JSON document from
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// JSON file to read; standard input when omitted
    #[arg(short, long, env = "SUNDRY_FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dot path to read; empty for the whole document
    pub path: String,

    /// Value printed when the path is missing, parsed as JSON if possible
    #[arg(short, long)]
    pub default: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dot path to write
    pub path: String,

    /// Value to store, parsed as JSON if possible and kept as text otherwise
    pub value: String,

    /// Only write when nothing is stored at the path yet
    #[arg(long)]
    pub if_missing: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the forget command
#[derive(clap::Args, Debug)]
pub struct ForgetArgs {
    /// Dot paths to remove
    #[arg(required = true)]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the dot command
#[derive(clap::Args, Debug)]
pub struct DotArgs {
    /// Prefix prepended to every flattened key
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Rebuild a nested document from a flat one instead
    #[arg(long, conflicts_with = "prefix")]
    pub undot: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the slug command
#[derive(clap::Args, Debug)]
pub struct SlugArgs {
    /// Text to slugify
    pub title: String,

    /// Word separator
    #[arg(short, long, default_value = "-")]
    pub separator: String,
}

/// Arguments for the random command
#[derive(clap::Args, Debug)]
pub struct RandomArgs {
    /// Token length
    #[arg(default_value_t = 16)]
    pub length: usize,

    /// Use the shuffle-based generator instead of the OS random source
    #[arg(long)]
    pub quick: bool,
}

/// Arguments for the pages command
#[derive(clap::Args, Debug)]
pub struct PagesArgs {
    /// Total number of records
    pub total_records: u64,

    /// Records per page
    #[arg(short = 's', long, default_value_t = 10)]
    pub page_size: u64,

    /// Current page
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
}
