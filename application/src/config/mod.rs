//! Application-level configuration.
//!
//! [`StorefrontConfig`] carries the settings use cases need at runtime:
//! category caps for the package customizer and the inquiry submission
//! policy. It is built from the file config by the CLI.

pub mod storefront_config;

pub use storefront_config::{StorefrontConfig, SubmissionPolicy};
