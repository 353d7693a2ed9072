//! CLI handlers module
//!
//! Command handlers render dashboard state for the terminal.

pub mod commands;

pub use commands::{handle_command, Cli, Command};
