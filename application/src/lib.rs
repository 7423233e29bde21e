//! Application layer for kababhut
//!
//! This crate contains use cases and port definitions (interfaces).
//! It depends only on the domain layer and defines interfaces
//! that the infrastructure layer implements.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::{StorefrontConfig, SubmissionPolicy};
pub use ports::{
    auth_gateway::{AuthGateway, LoginResponse},
    catalog::Catalog,
    inquiry_gateway::InquiryGateway,
    menu_source::MenuSource,
    onboarding::{InMemoryOnboarding, OnboardingStore},
    progress::{NoProgress, ProgressNotifier},
    remote::RemoteError,
    stats_source::StatsSource,
    token_store::{InMemoryTokenStore, TokenStore, TokenStoreError},
};
pub use session::StorefrontSession;
pub use use_cases::checkout::{CheckoutError, CheckoutOutcome, CheckoutReceipt, CheckoutUseCase};
pub use use_cases::load_dashboard::{DashboardError, DashboardView, LoadDashboardUseCase};
pub use use_cases::load_menu::{LoadMenuUseCase, MenuLoad};
pub use use_cases::login::{LoginError, LoginOutcome, LoginUseCase};
pub use use_cases::shared::DataOrigin;
pub use use_cases::submit_inquiry::{SubmissionReceipt, SubmitInquiryError, SubmitInquiryUseCase};
