//! Command-line interface.

mod args;
pub mod build;
pub mod preset;

pub use args::{Cli, Commands};
