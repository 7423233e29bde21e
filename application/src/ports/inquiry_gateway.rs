//! Inquiry submission port

use super::remote::RemoteError;
use async_trait::async_trait;
use kababhut_domain::InquiryEnvelope;

/// Gateway that delivers quote requests and contact forms to the caterer
#[async_trait]
pub trait InquiryGateway: Send + Sync {
    /// Deliver an inquiry, returning the server-side reference if one is given
    async fn submit(&self, inquiry: &InquiryEnvelope) -> Result<Option<String>, RemoteError>;
}
