//! Merging machine-translated output into a target locale.

use super::store::Dictionary;

/// Merge translator output into a target dictionary.
///
/// Walks the source dictionary in key order and, for each key, takes the
/// first available value from: the existing target translation, then the
/// machine-translated input, then the source-language text as a fallback
/// so the key never disappears while awaiting translation. Keys absent
/// from the source (stale) are dropped. The result's key order is exactly
/// the source's.
pub fn merge(source: &Dictionary, target: &Dictionary, translated: &Dictionary) -> Dictionary {
    source
        .iter()
        .map(|(key, source_value)| {
            let value = target
                .get(key)
                .or_else(|| translated.get(key))
                .unwrap_or(source_value);
            (key.clone(), value.clone())
        })
        .collect()
}
