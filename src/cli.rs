//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Taxogen category page generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (where the config file lives)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to site root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Category collection directory path (relative to site root)
    #[arg(long)]
    pub categories: Option<PathBuf>,

    /// Config file name (default: taxogen.toml)
    #[arg(short = 'C', long, default_value = "taxogen.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Wipe the category collection directory and regenerate one page per tag
    Regen {
        /// Sort tags lexicographically instead of keeping first-seen order
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sorted: Option<bool>,

        /// Name generated files with the slug instead of the raw tag
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        slug_filenames: Option<bool>,

        /// Extra tags to generate pages for, in addition to scanned ones
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Print the collected tag set, one per line
    Tags {
        /// Sort tags lexicographically instead of keeping first-seen order
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sorted: Option<bool>,
    },

    /// Apply a registered template filter to a string
    Filter {
        /// Filter name (e.g. escape_path, unescape_path)
        name: String,

        /// Input string to transform
        input: String,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_regen(&self) -> bool {
        matches!(self.command, Commands::Regen { .. })
    }
    pub const fn is_tags(&self) -> bool {
        matches!(self.command, Commands::Tags { .. })
    }
    pub const fn is_filter(&self) -> bool {
        matches!(self.command, Commands::Filter { .. })
    }
}
