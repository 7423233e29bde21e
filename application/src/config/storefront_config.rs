//! Storefront parameters: category caps and submission policy.

use kababhut_domain::CategoryLimits;
use serde::{Deserialize, Serialize};

/// What to report when an inquiry cannot be delivered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPolicy {
    /// Delivery failures are errors
    #[default]
    Strict,
    /// Delivery failures are reported as an unconfirmed receipt, so a demo
    /// without a backend still completes the flow
    Lenient,
}

impl SubmissionPolicy {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient {
            SubmissionPolicy::Lenient
        } else {
            SubmissionPolicy::Strict
        }
    }

    pub fn is_lenient(&self) -> bool {
        matches!(self, SubmissionPolicy::Lenient)
    }
}

/// Runtime parameters for the storefront use cases
#[derive(Debug, Clone, Default)]
pub struct StorefrontConfig {
    pub category_limits: CategoryLimits,
    pub submission_policy: SubmissionPolicy,
}

impl StorefrontConfig {
    // ==================== Builder Methods ====================

    pub fn with_category_limits(mut self, limits: CategoryLimits) -> Self {
        self.category_limits = limits;
        self
    }

    pub fn with_submission_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.submission_policy = policy;
        self
    }
}
