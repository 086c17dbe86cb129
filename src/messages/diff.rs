//! Dictionary diffing across locales.

use super::store::Dictionary;
use rustc_hash::FxHashSet;

/// Key-level difference between a source locale and a target locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictDiff {
    /// Keys in the source but not the target: need translation.
    pub missing: Vec<String>,
    /// Keys in the target but not the source: to be dropped.
    pub stale: Vec<String>,
}

impl DictDiff {
    /// True when the target is fully in sync with the source.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty()
    }
}

/// Compare a target dictionary against the source locale.
///
/// Both lists come back in their dictionary's own key order.
pub fn diff(source: &Dictionary, target: &Dictionary) -> DictDiff {
    let source_keys: FxHashSet<&str> = source.keys().map(String::as_str).collect();
    let target_keys: FxHashSet<&str> = target.keys().map(String::as_str).collect();

    let missing = source
        .keys()
        .filter(|k| !target_keys.contains(k.as_str()))
        .cloned()
        .collect();

    let stale = target
        .keys()
        .filter(|k| !source_keys.contains(k.as_str()))
        .cloned()
        .collect();

    DictDiff { missing, stale }
}

/// Extract the source-language subset that the target is missing.
///
/// This is the payload handed to a machine translator; keys keep the
/// source dictionary's order.
pub fn extract_missing(source: &Dictionary, target: &Dictionary) -> Dictionary {
    source
        .iter()
        .filter(|(key, _)| !target.contains_key(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::store::dict_from_pairs;
    use super::*;

    #[test]
    fn test_diff_in_sync() {
        let source = dict_from_pairs(&[("title", "Blog"), ("greet", "Hello")]);
        let target = dict_from_pairs(&[("title", "Blogg"), ("greet", "Hej")]);
        let d = diff(&source, &target);
        assert!(d.is_clean());
    }

    #[test]
    fn test_diff_missing_and_stale() {
        let source = dict_from_pairs(&[("title", "Blog"), ("greet", "Hello"), ("bye", "Bye")]);
        let target = dict_from_pairs(&[("title", "Blogg"), ("old_key", "Gammal")]);

        let d = diff(&source, &target);
        assert_eq!(d.missing, vec!["greet", "bye"]);
        assert_eq!(d.stale, vec!["old_key"]);
        assert!(!d.is_clean());
    }

    #[test]
    fn test_diff_empty_target() {
        let source = dict_from_pairs(&[("a", "1"), ("b", "2")]);
        let d = diff(&source, &Dictionary::new());
        assert_eq!(d.missing, vec!["a", "b"]);
        assert!(d.stale.is_empty());
    }

    #[test]
    fn test_extract_missing_keeps_source_order_and_values() {
        let source = dict_from_pairs(&[("z", "Zed"), ("a", "Ay"), ("m", "Em")]);
        let target = dict_from_pairs(&[("a", "Ah")]);

        let payload = extract_missing(&source, &target);
        let keys: Vec<_> = payload.keys().collect();
        assert_eq!(keys, vec!["z", "m"]);
        assert_eq!(payload["z"], "Zed");
    }

    #[test]
    fn test_extract_missing_when_in_sync() {
        let source = dict_from_pairs(&[("a", "1")]);
        let target = dict_from_pairs(&[("a", "uno")]);
        assert!(extract_missing(&source, &target).is_empty());
    }
}
