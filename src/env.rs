//! Environment variable partitioning.
//!
//! Splits a set of key/value pairs into a public half (safe to expose to
//! client-side code, selected by prefix) and a private half (everything
//! else). The filter is an explicit configuration object owned by the
//! caller; nothing here caches process state behind a module global.

use rustc_hash::FxHashMap;

/// Prefix-based partitioning rule for environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFilter {
    public_prefix: String,
}

impl EnvFilter {
    /// Create a filter with the given public prefix (e.g. `PUBLIC_`).
    pub fn new(public_prefix: impl Into<String>) -> Self {
        Self {
            public_prefix: public_prefix.into(),
        }
    }

    /// The configured public prefix.
    #[inline]
    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    /// Partition an iterator of key/value pairs.
    ///
    /// Keys carrying the public prefix land in `public` with the prefix
    /// stripped; all other keys land in `private` unchanged. A key that is
    /// exactly the prefix would strip to the empty string and is kept
    /// private instead.
    pub fn partition<I, K, V>(&self, vars: I) -> PartitionedEnv
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut public = FxHashMap::default();
        let mut private = FxHashMap::default();

        for (key, value) in vars {
            let key = key.into();
            match key.strip_prefix(&self.public_prefix) {
                Some(stripped) if !stripped.is_empty() => {
                    public.insert(stripped.to_string(), value.into());
                }
                _ => {
                    private.insert(key, value.into());
                }
            }
        }

        PartitionedEnv { public, private }
    }

    /// Partition the current process environment (read once, at call time).
    pub fn from_process(&self) -> PartitionedEnv {
        self.partition(std::env::vars())
    }
}

/// Result of splitting an environment by [`EnvFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedEnv {
    /// Prefix-selected variables, with the prefix stripped.
    pub public: FxHashMap<String, String>,
    /// Everything else, keys unchanged.
    pub private: FxHashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(&'static str, &'static str)> {
        vec![
            ("PUBLIC_SITE_NAME", "My Blog"),
            ("PUBLIC_BASE_URL", "https://example.org"),
            ("DATABASE_URL", "postgres://localhost/blog"),
            ("API_TOKEN", "secret"),
        ]
    }

    #[test]
    fn test_partition_by_prefix() {
        let env = EnvFilter::new("PUBLIC_").partition(sample());

        assert_eq!(env.public.len(), 2);
        assert_eq!(env.public["SITE_NAME"], "My Blog");
        assert_eq!(env.public["BASE_URL"], "https://example.org");

        assert_eq!(env.private.len(), 2);
        assert_eq!(env.private["DATABASE_URL"], "postgres://localhost/blog");
        assert!(!env.private.contains_key("PUBLIC_SITE_NAME"));
    }

    #[test]
    fn test_bare_prefix_key_stays_private() {
        let env = EnvFilter::new("PUBLIC_").partition(vec![("PUBLIC_", "x")]);
        assert!(env.public.is_empty());
        assert_eq!(env.private["PUBLIC_"], "x");
    }

    #[test]
    fn test_empty_input() {
        let env = EnvFilter::new("PUBLIC_").partition(Vec::<(String, String)>::new());
        assert!(env.public.is_empty());
        assert!(env.private.is_empty());
    }

    #[test]
    fn test_custom_prefix() {
        let env = EnvFilter::new("VITE_").partition(vec![
            ("VITE_APP_TITLE", "demo"),
            ("PUBLIC_IGNORED", "y"),
        ]);
        assert_eq!(env.public["APP_TITLE"], "demo");
        assert_eq!(env.private["PUBLIC_IGNORED"], "y");
    }
}
