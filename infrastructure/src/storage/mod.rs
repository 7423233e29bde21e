//! File-backed local storage
//!
//! Small values that must survive between runs live as plain files under
//! the data directory (see `[storage] data_dir`).

mod onboarding;
mod token;

pub use onboarding::FileOnboardingStore;
pub use token::FileTokenStore;
