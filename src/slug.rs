//! String normalization for URLs and anchors.
//!
//! Pure functions: transliterate Unicode to ASCII, fold case, collapse
//! everything that is not alphanumeric into a single separator.

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

/// Case transformation mode for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugCase {
    /// Convert to lowercase (default).
    #[default]
    Lower,
    /// Convert to UPPERCASE.
    Upper,
    /// Preserve original case.
    Preserve,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

/// Slug generation options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugOptions {
    pub case: SlugCase,
    pub separator: SlugSeparator,
}

/// Slugify with default options: ASCII, lowercase, dash-separated.
#[inline]
pub fn slugify(text: &str) -> String {
    slugify_with(text, SlugOptions::default())
}

/// Slugify with explicit options.
///
/// Empty or all-symbol input yields an empty slug; no leading or trailing
/// separator is produced.
pub fn slugify_with(text: &str, options: SlugOptions) -> String {
    let ascii = deunicode(text);
    let sep = options.separator.as_char();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push(sep);
            }
            pending_sep = false;
            match options.case {
                SlugCase::Lower => slug.push(ch.to_ascii_lowercase()),
                SlugCase::Upper => slug.push(ch.to_ascii_uppercase()),
                SlugCase::Preserve => slug.push(ch),
            }
        } else {
            pending_sep = true;
        }
    }

    slug
}
