//! Domain layer for kababhut
//!
//! This crate contains the storefront's business rules, entities, and value
//! objects. It has no dependencies on infrastructure or presentation concerns
//! and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Cart
//!
//! A [`Cart`] maps menu item ids to [`CartLine`]s. Adding an item that is
//! already present bumps its quantity; a line whose quantity would reach
//! zero is removed. Operations on unknown ids are silent no-ops.
//!
//! ## Package Customizer
//!
//! A [`PackageCustomizer`] lets a customer build a catering package dish by
//! dish. Each category is capped by [`CategoryLimits`]; additions past the
//! cap are rejected with [`CategoryFull`]. A ready selection materializes
//! into a [`QuoteRequest`] for the custom package.

pub mod auth;
pub mod cart;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod inquiry;
pub mod menu;
pub mod package;

// Re-export commonly used types
pub use auth::{AuthToken, Credentials, DashboardRoute, Role};
pub use cart::{Cart, CartItem, CartLine};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use dashboard::{DashboardStats, Invoice, InvoiceLine, InvoiceStatus, TopItem};
pub use inquiry::{
    CUSTOM_PACKAGE_ID, ContactForm, InquiryEnvelope, InquiryPayload, InquiryStatus, QuoteRequest,
};
pub use menu::{
    item::{MenuItem, UNCATEGORIZED},
    listing::{ALL_CATEGORIES, Menu},
    price::Price,
};
pub use package::{
    AddOutcome, CategoryFull, CategoryLimit, CategoryLimits, CategoryUsage, CateringPackage,
    ConfirmError, CustomizerState, DEFAULT_CATEGORY_LIMIT, PackageCustomizer, PackageSection,
};
