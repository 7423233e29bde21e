//! Built-in catalog
//!
//! Data bundled with the binary so the storefront stays usable without a
//! backend: the standard menu, the preset packages, and sample dashboard
//! figures.

mod menu;
mod packages;

use kababhut_application::Catalog;
use kababhut_domain::{
    CateringPackage, DashboardStats, Invoice, InvoiceLine, InvoiceStatus, MenuItem, TopItem,
};

/// Catalog compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Catalog for StaticCatalog {
    fn fallback_menu(&self) -> Vec<MenuItem> {
        menu::standard_menu()
    }

    fn packages(&self) -> Vec<CateringPackage> {
        let mut packages = packages::presets();
        packages.push(CateringPackage::custom());
        packages
    }

    fn sample_stats(&self) -> DashboardStats {
        let top = |name: &str, qty, revenue| TopItem {
            name: name.to_string(),
            qty,
            revenue,
        };
        DashboardStats {
            total_revenue: 42000.0,
            total_orders: 128,
            total_customers: 54,
            top_items: vec![
                top("Biryani", 42, 12000.0),
                top("Karahi", 28, 8000.0),
                top("Seekh Kabab", 24, 6400.0),
            ],
        }
    }

    fn invoices(&self) -> Vec<Invoice> {
        vec![Invoice {
            id: "inv1".to_string(),
            customer: "Acme Corp".to_string(),
            items: vec![InvoiceLine {
                name: "Chicken Biryani".to_string(),
                qty: 10,
                unit_price: 13.5,
            }],
            total: 135.0,
            status: InvoiceStatus::Sent,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kababhut_domain::{CategoryLimits, Menu};

    #[test]
    fn test_menu_ids_are_unique() {
        let menu = StaticCatalog.fallback_menu();
        assert_eq!(menu.len(), 20);

        let mut ids: Vec<_> = menu.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_menu_categories_are_configured() {
        let limits = CategoryLimits::reference();
        let menu = Menu::new(StaticCatalog.fallback_menu());
        for category in menu.categories() {
            assert!(limits.get(category).is_some(), "unlisted: {}", category);
        }
        assert!(menu.items().iter().all(|i| i.is_contact_for_pricing()));
    }

    #[test]
    fn test_packages_end_with_custom() {
        let packages = StaticCatalog.packages();
        assert_eq!(packages.len(), 5);
        assert!(packages.last().unwrap().is_custom());
        assert_eq!(packages.iter().filter(|p| p.is_custom()).count(), 1);
    }

    #[test]
    fn test_sample_data() {
        let stats = StaticCatalog.sample_stats();
        assert_eq!(stats.total_orders, 128);
        assert_eq!(stats.max_item_revenue(), 12000.0);

        let invoices = StaticCatalog.invoices();
        assert!(invoices.iter().all(|i| i.is_consistent()));
    }
}
