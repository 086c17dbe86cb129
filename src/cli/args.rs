//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Babelkit content utilities CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the 53-bit fingerprint of a string
    #[command(visible_alias = "h")]
    Hash {
        /// Text to hash
        text: String,

        /// Seed value (32-bit unsigned)
        #[arg(short, long, default_value_t = 0)]
        seed: u32,
    },

    /// Print the URL slug of a string
    Slug {
        /// Text to slugify
        text: String,
    },

    /// Compare a target locale against the source locale
    #[command(visible_alias = "d")]
    Diff {
        /// Source locale dictionary (canonical key set and order)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        source: PathBuf,

        /// Target locale dictionary to check
        #[arg(value_hint = clap::ValueHint::FilePath)]
        target: PathBuf,
    },

    /// Merge machine-translated output into a target locale
    #[command(visible_alias = "m")]
    Merge {
        /// Source locale dictionary (canonical key set and order)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        source: PathBuf,

        /// Target locale dictionary to update
        #[arg(value_hint = clap::ValueHint::FilePath)]
        target: PathBuf,

        /// Machine-translated dictionary for the target locale
        #[arg(value_hint = clap::ValueHint::FilePath)]
        translated: PathBuf,

        /// Output path (defaults to rewriting the target in place)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}
