//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The storefront core talks to the REST API, local storage, and the
//! built-in catalog only through these traits.

pub mod auth_gateway;
pub mod catalog;
pub mod inquiry_gateway;
pub mod menu_source;
pub mod onboarding;
pub mod progress;
pub mod remote;
pub mod stats_source;
pub mod token_store;
