//! 53-bit string fingerprints for content differencing.
//!
//! Two 32-bit accumulator lanes are mixed per code point, finalized, and
//! combined into a value below 2^53 so it survives a round-trip through a
//! double-precision float. Fingerprints are stable across runs, processes
//! and architectures; they are not suitable for security purposes.
//!
//! # Usage
//!
//! ```
//! use babelkit::fingerprint::{hash53, Fingerprint};
//!
//! let h = hash53("some content"); // -> u64 in [0, 2^53)
//! let fp = Fingerprint::of("some content");
//! let name = format!("style.{}.css", fp.short_hex());
//! ```

use std::fmt;

const LANE1_INIT: u32 = 0xDEAD_BEEF;
const LANE2_INIT: u32 = 0x41C6_CE57;

/// Hash a string with the default seed of 0.
#[inline]
pub fn hash53(text: &str) -> u64 {
    hash53_seeded(text, 0)
}

/// Hash a string with an explicit seed.
///
/// Iterates by Unicode scalar value, so supplementary-plane characters
/// (emoji, CJK extensions) contribute exactly one mixing step each.
/// Total over all inputs: every `(text, seed)` pair has a defined result.
pub fn hash53_seeded(text: &str, seed: u32) -> u64 {
    let mut h1 = LANE1_INIT ^ seed;
    let mut h2 = LANE2_INIT ^ seed;

    for ch in text.chars() {
        let c = ch as u32;
        h1 = (h1 ^ c).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ c).wrapping_mul(1_597_334_677);
    }

    // Finalization: the second lane mixes in the pre-update first lane.
    // Both right-hand sides must be computed before either assignment.
    let f1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    let f2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    // Low 21 bits of the second lane become the high bits: 21 + 32 = 53.
    (u64::from(f2 & 0x1F_FFFF) << 32) + u64::from(f1)
}

/// A 53-bit content fingerprint.
///
/// Wraps the raw hash with hex rendering for cache-busting filenames and
/// dictionary stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Fingerprint a string with the default seed.
    #[inline]
    pub fn of(text: &str) -> Self {
        Self(hash53(text))
    }

    /// Fingerprint a string with an explicit seed.
    #[inline]
    pub fn of_seeded(text: &str, seed: u32) -> Self {
        Self(hash53_seeded(text, seed))
    }

    /// Wrap a previously computed hash value.
    #[inline]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw hash value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Full hex form (14 digits cover 53 bits, zero-padded).
    pub fn to_hex(self) -> String {
        format!("{:014x}", self.0)
    }

    /// First 8 hex digits, for filenames (e.g. `style.a1b2c3d4.css`).
    pub fn short_hex(self) -> String {
        self.to_hex()[..8].to_string()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
