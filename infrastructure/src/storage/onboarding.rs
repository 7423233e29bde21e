//! Onboarding flag persisted as `<data_dir>/onboarding_done`

use kababhut_application::OnboardingStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const FLAG_FILE: &str = "onboarding_done";
const DONE: &str = "true";

/// Onboarding flag stored as a file containing `true`
pub struct FileOnboardingStore {
    path: PathBuf,
}

impl FileOnboardingStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(FLAG_FILE),
        }
    }
}

impl OnboardingStore for FileOnboardingStore {
    fn has_completed(&self) -> bool {
        fs::read_to_string(&self.path)
            .map(|s| s.trim() == DONE)
            .unwrap_or(false)
    }

    fn mark_complete(&self) {
        let result = self
            .path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(&self.path, DONE));
        if let Err(e) = result {
            warn!(
                "Could not save onboarding flag to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
