//! Built-in catalog port
//!
//! Static data bundled with the application: the fallback menu, preset
//! packages, sample dashboard figures, and sample invoices.

use kababhut_domain::{CateringPackage, DashboardStats, Invoice, MenuItem};

/// Read-only access to bundled data
pub trait Catalog: Send + Sync {
    /// Menu shown when the live menu cannot be loaded
    fn fallback_menu(&self) -> Vec<MenuItem>;

    /// Preset packages, followed by the custom package
    fn packages(&self) -> Vec<CateringPackage>;

    /// Figures shown when the stats endpoint is unavailable
    fn sample_stats(&self) -> DashboardStats;

    fn invoices(&self) -> Vec<Invoice>;
}
