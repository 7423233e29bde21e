//! Submit Inquiry use case
//!
//! Validates a quote request or contact form, stamps it as pending, and
//! hands it to the inquiry gateway. The caller's state is never touched, so
//! a failed submission can simply be retried.

use crate::config::SubmissionPolicy;
use crate::ports::inquiry_gateway::InquiryGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::remote::RemoteError;
use chrono::Utc;
use kababhut_domain::{InquiryEnvelope, InquiryPayload};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while submitting an inquiry
#[derive(Error, Debug)]
pub enum SubmitInquiryError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Guest count must be a positive whole number, got '{0}'")]
    InvalidHeadcount(String),

    #[error("Could not deliver inquiry: {0}")]
    Delivery(#[from] RemoteError),
}

/// Outcome of a submission that did not fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionReceipt {
    /// The API accepted the inquiry
    Delivered { reference: Option<String> },
    /// Delivery failed but the lenient policy reports the flow as complete
    Unconfirmed { reason: String },
}

impl SubmissionReceipt {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionReceipt::Delivered { .. })
    }
}

/// Use case for submitting inquiries
pub struct SubmitInquiryUseCase<G: InquiryGateway + ?Sized> {
    gateway: Arc<G>,
    policy: SubmissionPolicy,
}

impl<G: InquiryGateway + ?Sized> SubmitInquiryUseCase<G> {
    pub fn new(gateway: Arc<G>, policy: SubmissionPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        payload: impl Into<InquiryPayload>,
    ) -> Result<SubmissionReceipt, SubmitInquiryError> {
        self.execute_with_progress(payload, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        payload: impl Into<InquiryPayload>,
        progress: &dyn ProgressNotifier,
    ) -> Result<SubmissionReceipt, SubmitInquiryError> {
        let payload = payload.into();
        validate(&payload)?;

        let kind = payload.kind();
        let envelope = InquiryEnvelope::pending(payload, Utc::now());

        progress.on_fetch_start(kind);
        let result = self.gateway.submit(&envelope).await;
        progress.on_fetch_complete(kind, result.is_ok());

        match result {
            Ok(reference) => {
                info!(
                    "Submitted {} inquiry for {}",
                    kind,
                    envelope.payload.email()
                );
                Ok(SubmissionReceipt::Delivered { reference })
            }
            Err(e) if self.policy.is_lenient() => {
                warn!("Inquiry delivery failed, reporting as unconfirmed: {}", e);
                Ok(SubmissionReceipt::Unconfirmed {
                    reason: e.to_string(),
                })
            }
            Err(e) => {
                warn!("Inquiry delivery failed: {}", e);
                Err(SubmitInquiryError::Delivery(e))
            }
        }
    }
}

fn validate(payload: &InquiryPayload) -> Result<(), SubmitInquiryError> {
    let (name, email, headcount) = match payload {
        InquiryPayload::Quote(q) => (&q.name, &q.email, &q.headcount),
        InquiryPayload::Contact(c) => (&c.name, &c.email, &c.guests),
    };

    if name.trim().is_empty() {
        return Err(SubmitInquiryError::MissingField("name"));
    }
    if email.trim().is_empty() {
        return Err(SubmitInquiryError::MissingField("email"));
    }

    // Guest count is optional, but must be a count when given
    let headcount = headcount.trim();
    if !headcount.is_empty() && !matches!(headcount.parse::<u32>(), Ok(n) if n > 0) {
        return Err(SubmitInquiryError::InvalidHeadcount(headcount.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kababhut_domain::{ContactForm, InquiryStatus, QuoteRequest};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        result: Result<Option<String>, RemoteError>,
        received: Mutex<Vec<InquiryEnvelope>>,
    }

    impl MockGateway {
        fn new(result: Result<Option<String>, RemoteError>) -> Self {
            Self {
                result,
                received: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl InquiryGateway for MockGateway {
        async fn submit(&self, inquiry: &InquiryEnvelope) -> Result<Option<String>, RemoteError> {
            self.received.lock().unwrap().push(inquiry.clone());
            self.result.clone()
        }
    }

    fn quote() -> QuoteRequest {
        let mut q = QuoteRequest::for_package("pkg-custom").with_contact(
            "Ayesha",
            "ayesha@example.com",
            "555-0100",
        );
        q.headcount = "40".into();
        q
    }

    #[tokio::test]
    async fn test_delivered_with_reference() {
        let gateway = Arc::new(MockGateway::new(Ok(Some("inq-7".into()))));
        let use_case = SubmitInquiryUseCase::new(gateway.clone(), SubmissionPolicy::Strict);

        let receipt = use_case.execute(quote()).await.unwrap();
        assert_eq!(
            receipt,
            SubmissionReceipt::Delivered {
                reference: Some("inq-7".into())
            }
        );

        let received = gateway.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].status, InquiryStatus::Pending);
        assert_eq!(received[0].payload.email(), "ayesha@example.com");
    }

    #[tokio::test]
    async fn test_strict_failure_is_error() {
        let gateway = Arc::new(MockGateway::new(Err(RemoteError::Timeout)));
        let use_case = SubmitInquiryUseCase::new(gateway, SubmissionPolicy::Strict);

        let err = use_case.execute(quote()).await.unwrap_err();
        assert!(matches!(err, SubmitInquiryError::Delivery(RemoteError::Timeout)));
    }

    #[tokio::test]
    async fn test_lenient_failure_is_unconfirmed() {
        let gateway = Arc::new(MockGateway::new(Err(RemoteError::Connection(
            "refused".into(),
        ))));
        let use_case = SubmitInquiryUseCase::new(gateway, SubmissionPolicy::Lenient);

        let receipt = use_case.execute(quote()).await.unwrap();
        assert!(!receipt.is_delivered());
        match receipt {
            SubmissionReceipt::Unconfirmed { reason } => assert!(reason.contains("refused")),
            other => panic!("unexpected receipt: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validation_happens_before_delivery() {
        let gateway = Arc::new(MockGateway::new(Ok(None)));
        let use_case = SubmitInquiryUseCase::new(gateway.clone(), SubmissionPolicy::Lenient);

        let mut no_email = quote();
        no_email.email = "  ".into();
        assert!(matches!(
            use_case.execute(no_email).await,
            Err(SubmitInquiryError::MissingField("email"))
        ));

        let mut bad_count = quote();
        bad_count.headcount = "forty".into();
        assert!(matches!(
            use_case.execute(bad_count).await,
            Err(SubmitInquiryError::InvalidHeadcount(_))
        ));

        let mut zero = quote();
        zero.headcount = "0".into();
        assert!(use_case.execute(zero).await.is_err());

        assert!(gateway.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_contact_form_without_guests() {
        let gateway = Arc::new(MockGateway::new(Ok(None)));
        let use_case = SubmitInquiryUseCase::new(gateway.clone(), SubmissionPolicy::Strict);

        let form = ContactForm {
            name: "Bilal".into(),
            email: "bilal@example.com".into(),
            message: "Wedding in June".into(),
            ..ContactForm::default()
        };
        let receipt = use_case.execute(form).await.unwrap();
        assert_eq!(receipt, SubmissionReceipt::Delivered { reference: None });
        assert_eq!(gateway.received.lock().unwrap()[0].payload.kind(), "contact");
    }
}
