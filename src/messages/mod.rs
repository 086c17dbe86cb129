//! Locale message dictionary upkeep.
//!
//! A dictionary is a flat JSON object mapping message keys to translated
//! strings, one file per locale. The source locale's key order is
//! canonical; [`merge`] re-emits every other locale in that order.
//!
//! Typical flow for keeping a target locale current:
//!
//! 1. [`diff`] the source dictionary against the target to find keys that
//!    need translation and keys that no longer exist.
//! 2. [`extract_missing`] the source-language subset and hand it to a
//!    machine translator.
//! 3. [`merge`] the translator's output back into the target.

mod diff;
mod merge;
mod store;

pub use diff::{DictDiff, diff, extract_missing};
pub use merge::merge;
pub use store::{Dictionary, MessageError, load_dictionary, save_dictionary};
