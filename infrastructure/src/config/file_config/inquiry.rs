//! Inquiry configuration from TOML (`[inquiry]` section)

use kababhut_application::SubmissionPolicy;
use serde::{Deserialize, Serialize};

/// Raw inquiry configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInquiryConfig {
    /// Report failed deliveries as unconfirmed instead of failing
    pub lenient_submission: bool,
}

impl FileInquiryConfig {
    pub fn submission_policy(&self) -> SubmissionPolicy {
        SubmissionPolicy::from_lenient(self.lenient_submission)
    }
}
