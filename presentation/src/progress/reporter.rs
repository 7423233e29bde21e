//! Progress reporting while waiting on the storefront API

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use kababhut_application::ProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a remote call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn display_name(what: &str) -> &str {
        match what {
            "menu" => "Loading menu",
            "stats" => "Loading dashboard",
            "login" => "Signing in",
            "quote" | "contact" => "Sending inquiry",
            other => other,
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, what: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}...", Self::display_name(what)));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_fetch_complete(&self, what: &str, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        let name = Self::display_name(what);
        if success {
            pb.finish_with_message(format!("{} {}", "v".green(), name));
        } else {
            pb.finish_with_message(format!("{} {} failed", "x".red(), name));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_fetch_start(&self, what: &str) {
        println!(
            "{} {}...",
            "->".cyan(),
            ProgressReporter::display_name(what).bold()
        );
    }

    fn on_fetch_complete(&self, _what: &str, success: bool) {
        if success {
            println!("  {} done", "v".green());
        } else {
            println!("  {} failed", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_fetch_start("menu");
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_fetch_complete("menu", false);
        assert!(reporter.spinner.lock().unwrap().is_none());

        // Completing without a start is harmless
        reporter.on_fetch_complete("menu", true);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ProgressReporter::display_name("contact"), "Sending inquiry");
        assert_eq!(ProgressReporter::display_name("custom"), "custom");
    }
}
