//! `POST /package-inquiry` adapter

use super::client::{ApiClient, parse};
use async_trait::async_trait;
use kababhut_application::{InquiryGateway, RemoteError};
use kababhut_domain::InquiryEnvelope;
use serde_json::Value;
use std::sync::Arc;

const INQUIRY_PATH: &str = "/package-inquiry";

/// Inquiry gateway backed by the storefront API
pub struct HttpInquiryGateway {
    client: Arc<ApiClient>,
}

impl HttpInquiryGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InquiryGateway for HttpInquiryGateway {
    async fn submit(&self, inquiry: &InquiryEnvelope) -> Result<Option<String>, RemoteError> {
        let body = self.client.post_json(INQUIRY_PATH, inquiry, None).await?;
        Ok(reference_from(&body))
    }
}

/// Pull an `id` out of the response, if the server sent one.
/// Any 2xx counts as delivered, so an odd body is not an error.
fn reference_from(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    let value: Value = parse(body).ok()?;
    match value.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{TestServer, client_for};
    use chrono::{TimeZone, Utc};
    use kababhut_domain::QuoteRequest;

    #[test]
    fn test_reference_from_body() {
        assert_eq!(reference_from(r#"{"id": "abc"}"#), Some("abc".into()));
        assert_eq!(reference_from(r#"{"id": 42}"#), Some("42".into()));
        assert_eq!(reference_from(r#"{"ok": true}"#), None);
        assert_eq!(reference_from(""), None);
        assert_eq!(reference_from("created"), None);
    }

    #[tokio::test]
    async fn test_submit_posts_envelope() {
        let server = TestServer::respond(201, r#"{"id": "inq-1"}"#).await;
        let gateway = HttpInquiryGateway::new(Arc::new(client_for(&server)));

        let quote = QuoteRequest::for_package("pkg-custom").with_contact(
            "Sara",
            "sara@example.com",
            "",
        );
        let at = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        let envelope = InquiryEnvelope::pending(quote, at);

        let reference = gateway.submit(&envelope).await.unwrap();
        assert_eq!(reference, Some("inq-1".into()));

        let request = server.request().await;
        assert!(request.starts_with("POST /api/package-inquiry "));
        assert!(request.contains(r#""packageId":"pkg-custom""#));
        assert!(request.contains(r#""status":"pending""#));
        assert!(request.contains(r#""createdAt":"2026-05-01T12:00:00Z""#));
    }
}
