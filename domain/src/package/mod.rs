//! Catering packages and the custom package customizer

pub mod customizer;
pub mod entities;
pub mod limits;

pub use customizer::{
    AddOutcome, CategoryFull, CategoryUsage, ConfirmError, CustomizerState, PackageCustomizer,
};
pub use entities::{CateringPackage, PackageSection};
pub use limits::{CategoryLimit, CategoryLimits, DEFAULT_CATEGORY_LIMIT};
