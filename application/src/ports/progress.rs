//! Progress notification port
//!
//! Defines the interface for reporting progress while the storefront waits
//! on the remote API.

/// Callback for progress updates around remote calls
///
/// Implementations live in the presentation layer (spinner, plain lines).
pub trait ProgressNotifier: Send + Sync {
    /// Called before a remote call starts
    fn on_fetch_start(&self, what: &str);

    /// Called when a remote call finishes, successfully or not
    fn on_fetch_complete(&self, what: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_fetch_start(&self, _what: &str) {}
    fn on_fetch_complete(&self, _what: &str, _success: bool) {}
}
