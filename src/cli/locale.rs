//! Locale dictionary subcommands: diff and merge.

use anyhow::{Result, bail};
use std::path::Path;

use babelkit::messages::{diff, extract_missing, load_dictionary, merge, save_dictionary};
use babelkit::{debug, log};

/// Report missing/stale keys in a target locale.
///
/// Exits with an error when the target is out of date, so CI can gate on
/// it.
pub fn run_diff(source_path: &Path, target_path: &Path) -> Result<()> {
    let source = load_dictionary(source_path)?;
    let target = load_dictionary(target_path)?;

    let d = diff(&source, &target);
    if d.is_clean() {
        log!("diff"; "{} is in sync with {}", target_path.display(), source_path.display());
        return Ok(());
    }

    if !d.missing.is_empty() {
        log!("diff"; "{} missing key(s) in {}:", d.missing.len(), target_path.display());
        for key in &d.missing {
            eprintln!("- {key}");
        }
    }
    if !d.stale.is_empty() {
        log!("diff"; "{} stale key(s) in {}:", d.stale.len(), target_path.display());
        for key in &d.stale {
            eprintln!("- {key}");
        }
    }

    bail!(
        "{} is out of date ({} missing, {} stale)",
        target_path.display(),
        d.missing.len(),
        d.stale.len()
    )
}

/// Merge machine-translated output into a target locale dictionary.
pub fn run_merge(
    source_path: &Path,
    target_path: &Path,
    translated_path: &Path,
    output_path: Option<&Path>,
) -> Result<()> {
    let source = load_dictionary(source_path)?;
    let target = load_dictionary(target_path)?;
    let translated = load_dictionary(translated_path)?;

    // Warn about extracted keys the translator did not cover
    let still_missing: Vec<_> = extract_missing(&source, &target)
        .keys()
        .filter(|k| !translated.contains_key(*k))
        .cloned()
        .collect();
    if !still_missing.is_empty() {
        log!("warning"; "{} key(s) not covered by {}, keeping source text:", still_missing.len(), translated_path.display());
        for key in &still_missing {
            eprintln!("- {key}");
        }
    }

    let merged = merge(&source, &target, &translated);
    let out = output_path.unwrap_or(target_path);
    save_dictionary(out, &merged)?;

    debug!("merge"; "wrote {} key(s)", merged.len());
    log!("merge"; "updated {}", out.display());
    Ok(())
}
