//! Onboarding flag port

use std::sync::atomic::{AtomicBool, Ordering};

/// Remembers whether the welcome walkthrough has been completed
///
/// Storage failures never surface to the caller: an unreadable flag reads
/// as "not completed" and a failed write is only logged by the adapter.
pub trait OnboardingStore: Send + Sync {
    fn has_completed(&self) -> bool;
    fn mark_complete(&self);
}

/// Onboarding flag that lives only as long as the process
#[derive(Debug, Default)]
pub struct InMemoryOnboarding {
    done: AtomicBool,
}

impl InMemoryOnboarding {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OnboardingStore for InMemoryOnboarding {
    fn has_completed(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }

    fn mark_complete(&self) {
        self.done.store(true, Ordering::SeqCst);
    }
}
