//! Interactive storefront shell

pub mod command;
pub mod repl;

pub use command::{HELP, ParseError, ShellCommand};
pub use repl::StorefrontShell;
