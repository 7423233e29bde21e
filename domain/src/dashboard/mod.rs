//! Dashboard read models: sales statistics and invoices

use serde::{Deserialize, Serialize};

/// A best-selling dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    pub name: String,
    pub qty: u64,
    pub revenue: f64,
}

/// Headline statistics for the owner dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub total_customers: u64,
    #[serde(default)]
    pub top_items: Vec<TopItem>,
}

impl DashboardStats {
    /// Largest revenue among the top items, for scaling charts
    pub fn max_item_revenue(&self) -> f64 {
        self.top_items
            .iter()
            .map(|i| i.revenue)
            .fold(0.0, f64::max)
    }

    pub fn average_order_value(&self) -> Option<f64> {
        if self.total_orders == 0 {
            None
        } else {
            Some(self.total_revenue / self.total_orders as f64)
        }
    }
}

/// Invoice lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
        };
        write!(f, "{}", s)
    }
}

/// One billed dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub name: String,
    pub qty: u32,
    pub unit_price: f64,
}

/// A customer invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub customer: String,
    pub items: Vec<InvoiceLine>,
    pub total: f64,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Total recomputed from the lines
    pub fn line_total(&self) -> f64 {
        self.items
            .iter()
            .map(|l| l.unit_price * f64::from(l.qty))
            .sum()
    }

    /// Whether the stored total agrees with the lines (to the cent)
    pub fn is_consistent(&self) -> bool {
        (self.line_total() - self.total).abs() < 0.005
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_wire_shape() {
        let json = r#"{
            "totalRevenue": 42000,
            "totalOrders": 128,
            "totalCustomers": 54,
            "topItems": [{"name": "Biryani", "qty": 42, "revenue": 12000}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_orders, 128);
        assert_eq!(stats.top_items.len(), 1);
        assert_eq!(stats.max_item_revenue(), 12000.0);
    }

    #[test]
    fn test_average_order_value() {
        let stats = DashboardStats {
            total_revenue: 100.0,
            total_orders: 4,
            total_customers: 2,
            top_items: vec![],
        };
        assert_eq!(stats.average_order_value(), Some(25.0));
        assert_eq!(stats.max_item_revenue(), 0.0);

        let none = DashboardStats {
            total_orders: 0,
            ..stats
        };
        assert!(none.average_order_value().is_none());
    }

    #[test]
    fn test_invoice_consistency() {
        let invoice = Invoice {
            id: "inv1".into(),
            customer: "Acme Corp".into(),
            items: vec![InvoiceLine {
                name: "Chicken Biryani".into(),
                qty: 10,
                unit_price: 13.5,
            }],
            total: 135.0,
            status: InvoiceStatus::Sent,
        };
        assert_eq!(invoice.line_total(), 135.0);
        assert!(invoice.is_consistent());
        assert_eq!(invoice.status.to_string(), "sent");

        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["items"][0]["unitPrice"], 13.5);
        assert_eq!(json["status"], "sent");
    }
}
