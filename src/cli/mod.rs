//! CLI argument parsing for the principles TUI.

mod args;

pub use args::{parse_args, VERSION};
