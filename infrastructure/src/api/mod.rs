//! Storefront REST API adapters
//!
//! One shared [`ApiClient`] handles URL joining, timeouts, bearer headers,
//! and error mapping. Each port gets a small adapter on top of it.

pub mod auth;
pub mod client;
pub mod error;
pub mod inquiry;
pub mod menu;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_server;

pub use auth::HttpAuthGateway;
pub use client::ApiClient;
pub use error::ApiError;
pub use inquiry::HttpInquiryGateway;
pub use menu::HttpMenuSource;
pub use stats::HttpStatsSource;
