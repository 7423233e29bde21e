//! Inquiry payloads
//!
//! Two payloads can be sent to the caterer:
//!
//! - [`QuoteRequest`] — the package form, optionally pre-filled from a
//!   confirmed custom package selection
//! - [`ContactForm`] — the general contact form
//!
//! Both travel inside an [`InquiryEnvelope`] that stamps a pending status and
//! a creation time. Wire field names are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved package id for customer-built packages
pub const CUSTOM_PACKAGE_ID: &str = "pkg-custom";

/// Request for pricing and availability of a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_date: String,
    pub headcount: String,
    pub package_id: String,
    pub message: String,
}

impl QuoteRequest {
    /// An empty request for the given package
    pub fn for_package(package_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            ..Self::default()
        }
    }

    pub fn with_contact(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    pub fn with_event_date(mut self, date: impl Into<String>) -> Self {
        self.event_date = date.into();
        self
    }

    pub fn is_custom_package(&self) -> bool {
        self.package_id == CUSTOM_PACKAGE_ID
    }
}

/// General contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub guests: String,
    pub event_type: String,
    pub cuisine: String,
    pub message: String,
}

/// Anything that can be submitted as an inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InquiryPayload {
    Quote(QuoteRequest),
    Contact(ContactForm),
}

impl InquiryPayload {
    /// Contact email, used for log lines
    pub fn email(&self) -> &str {
        match self {
            InquiryPayload::Quote(q) => &q.email,
            InquiryPayload::Contact(c) => &c.email,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InquiryPayload::Quote(_) => "quote",
            InquiryPayload::Contact(_) => "contact",
        }
    }
}

impl From<QuoteRequest> for InquiryPayload {
    fn from(q: QuoteRequest) -> Self {
        InquiryPayload::Quote(q)
    }
}

impl From<ContactForm> for InquiryPayload {
    fn from(c: ContactForm) -> Self {
        InquiryPayload::Contact(c)
    }
}

/// Processing status stamped on new inquiries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    Pending,
}

/// Payload plus bookkeeping fields, as stored by the inquiry service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryEnvelope {
    #[serde(flatten)]
    pub payload: InquiryPayload,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

impl InquiryEnvelope {
    pub fn pending(payload: impl Into<InquiryPayload>, created_at: DateTime<Utc>) -> Self {
        Self {
            payload: payload.into(),
            status: InquiryStatus::Pending,
            created_at,
        }
    }
}
