//! Babelkit - content utilities for multilingual blogs.
//!
//! Pure, deterministic helpers shared by the `babelkit` CLI and usable as
//! a library:
//!
//! - [`fingerprint`]: 53-bit string hashing for content differencing
//! - [`shuffle`]: seeded deterministic shuffling
//! - [`slug`]: URL/anchor string normalization
//! - [`env`]: public/private environment variable partitioning
//! - [`messages`]: locale dictionary diff and merge

pub mod env;
pub mod fingerprint;
pub mod logger;
pub mod messages;
pub mod shuffle;
pub mod slug;
