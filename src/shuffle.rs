//! Deterministic seeded shuffling.
//!
//! A small explicit-state generator (splitmix64) drives a Fisher-Yates
//! shuffle. The same seed always yields the same permutation, across runs
//! and platforms, which is what "post of the day" style rotation needs.
//! Not a cryptographic source.

use crate::fingerprint::hash53;

/// Deterministic pseudo-random generator with explicit state.
///
/// No global state: callers construct and own the generator, so there is
/// no import-order or initialization-order dependency.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a numeric seed.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator from a text seed (hashed with [`hash53`]).
    ///
    /// Useful for stable per-page or per-date rotation: the same label
    /// always produces the same sequence.
    #[inline]
    pub fn from_text(seed: &str) -> Self {
        Self::new(hash53(seed))
    }

    /// Next raw 64-bit value (splitmix64 step).
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, bound)`.
    ///
    /// Plain modulo draw; the bias is negligible at content-list sizes.
    #[inline]
    fn next_below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Shuffle a slice in place (Fisher-Yates, back to front).
///
/// Empty and single-element slices are left untouched.
pub fn shuffle<T>(items: &mut [T], rng: &mut SeededRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

/// Convenience: shuffle with a one-shot generator from a numeric seed.
#[inline]
pub fn shuffle_seeded<T>(items: &mut [T], seed: u64) {
    shuffle(items, &mut SeededRng::new(seed));
}
