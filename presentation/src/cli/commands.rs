//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for kababhut_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => kababhut_domain::OutputFormat::Text,
            OutputFormat::Json => kababhut_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for kababhut
#[derive(Parser, Debug)]
#[command(name = "kababhut")]
#[command(author, version, about = "Kabab Hut catering storefront")]
#[command(long_about = r#"
Browse the Kabab Hut catering menu, fill a cart, build a custom catering
package, and send quote requests from the terminal.

Without a command, an interactive storefront shell is started.

Configuration files are loaded from (in priority order):
1. KABABHUT_* environment variables (e.g. KABABHUT_API__BASE_URL)
2. --config <path>     Explicit config file
3. ./kababhut.toml     Project-level config
4. ~/.config/kababhut/config.toml   Global config

Example:
  kababhut menu --category biryani
  kababhut contact --name "Ayesha" --email ayesha@example.com --guests 120
  kababhut login --email owner@kababhut.example
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Keep the session token in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the menu
    Menu {
        /// Only show dishes from this category
        #[arg(short, long, value_name = "KEY")]
        category: Option<String>,
    },

    /// List preset packages and the custom package limits
    Packages,

    /// Send a general inquiry
    Contact(ContactArgs),

    /// Sign in
    Login {
        #[arg(long)]
        email: String,

        /// Read from the KABABHUT_PASSWORD environment variable when omitted
        #[arg(long, env = "KABABHUT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show sales statistics and invoices (requires sign-in)
    Dashboard,

    /// Start the interactive storefront shell (default)
    Shell,
}

/// Fields of the contact form
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Event date, free text
    #[arg(long, default_value = "")]
    pub date: String,

    /// Expected number of guests
    #[arg(long, default_value = "")]
    pub guests: String,

    #[arg(long, default_value = "")]
    pub event_type: String,

    #[arg(long, default_value = "")]
    pub cuisine: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

impl From<ContactArgs> for kababhut_domain::ContactForm {
    fn from(args: ContactArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            date: args.date,
            guests: args.guests,
            event_type: args.event_type,
            cuisine: args.cuisine,
            message: args.message,
        }
    }
}
