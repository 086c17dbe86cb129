//! Babelkit - content utilities for multilingual blogs.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};

use babelkit::fingerprint::Fingerprint;
use babelkit::logger::set_verbose;
use babelkit::slug::slugify;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    set_verbose(cli.verbose);

    match &cli.command {
        Commands::Hash { text, seed } => {
            let fp = Fingerprint::of_seeded(text, *seed);
            println!("{} {}", fp.value(), fp);
            Ok(())
        }
        Commands::Slug { text } => {
            println!("{}", slugify(text));
            Ok(())
        }
        Commands::Diff { source, target } => cli::locale::run_diff(source, target),
        Commands::Merge {
            source,
            target,
            translated,
            output,
        } => cli::locale::run_merge(source, target, translated, output.as_deref()),
    }
}
