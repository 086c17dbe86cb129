//! Command-line interface module.

mod args;
pub mod locale;

pub use args::{Cli, Commands};
