//! Presentation layer for kababhut
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive storefront shell.

pub mod cli;
pub mod output;
pub mod progress;
pub mod shell;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ContactArgs, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use shell::{ShellCommand, StorefrontShell};
