//! Console output formatter for storefront views

use colored::Colorize;
use kababhut_application::{
    CheckoutOutcome, DashboardView, DataOrigin, MenuLoad, SubmissionReceipt,
};
use kababhut_domain::{
    Cart, CategoryLimits, CateringPackage, CustomizerState, Menu, PackageCustomizer, QuoteRequest,
};
use serde::Serialize;

/// Formats storefront data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a loaded menu, optionally narrowed to one category
    pub fn format_menu(load: &MenuLoad, category: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Menu"));
        output.push('\n');

        if load.origin.is_fallback() {
            output.push_str(&format!(
                "{}\n",
                "Showing the built-in menu (live menu unavailable)".yellow()
            ));
        }

        output.push_str(&Self::menu_body(&load.menu, category));
        output
    }

    /// Menu listing without the header, grouped by category
    pub fn menu_body(menu: &Menu, category: Option<&str>) -> String {
        let mut output = String::new();
        let categories: Vec<&str> = match category {
            Some(key) if key != kababhut_domain::ALL_CATEGORIES => vec![key],
            _ => menu.categories(),
        };

        for key in categories {
            let items: Vec<_> = menu.in_category(key).collect();
            if items.is_empty() {
                output.push_str(&format!("\nNo dishes in '{}'\n", key));
                continue;
            }
            output.push_str(&Self::section_header(key));
            for item in items {
                output.push_str(&format!(
                    "  {:<5} {:<24} {}\n",
                    item.id.dimmed(),
                    item.name.bold(),
                    Self::price_text(item.price.map(|p| p.amount()))
                ));
                if !item.description.is_empty() {
                    output.push_str(&format!("        {}\n", item.description.dimmed()));
                }
            }
        }
        output
    }

    pub fn format_categories(menu: &Menu) -> String {
        let mut output = String::from("Categories:\n");
        for key in menu.categories() {
            output.push_str(&format!(
                "  {} ({})\n",
                key.cyan(),
                menu.in_category(key).count()
            ));
        }
        output
    }

    pub fn format_cart(cart: &Cart) -> String {
        if cart.is_empty() {
            return format!("{}\n", "Your cart is empty.".dimmed());
        }

        let mut output = Self::section_header("Cart");
        for line in cart.lines() {
            output.push_str(&format!(
                "  {:<5} {:<24} x{:<3} {}\n",
                line.id.dimmed(),
                line.name,
                line.quantity,
                Self::price_text(line.price.map(|p| p.amount() * f64::from(line.quantity)))
            ));
        }
        output.push_str(&format!(
            "  {} {} items, {}\n",
            "Total:".bold(),
            cart.item_count(),
            format!("${:.2}", cart.total()).green().bold()
        ));
        output
    }

    pub fn format_checkout(outcome: &CheckoutOutcome) -> String {
        match outcome {
            CheckoutOutcome::LoginRequired => {
                format!("{}\n", "Please sign in to check out (login).".yellow())
            }
            CheckoutOutcome::EmptyCart => format!("{}\n", "Your cart is empty.".dimmed()),
            CheckoutOutcome::Completed(receipt) => format!(
                "{} {} lines, total {}\n",
                "Order placed:".green().bold(),
                receipt.lines.len(),
                format!("${:.2}", receipt.total).bold()
            ),
        }
    }

    /// Current custom package selection with per-category usage
    pub fn format_selection(customizer: &PackageCustomizer) -> String {
        let mut output = Self::section_header("Custom Package");

        let guests = match customizer.guest_count() {
            "" => "(not set)".dimmed().to_string(),
            count => count.to_string(),
        };
        output.push_str(&format!("  {} {}\n", "Guests:".bold(), guests));

        for usage in customizer.category_usage() {
            let counter = format!("{}/{}", usage.selected, usage.limit);
            let counter = if usage.is_full() {
                counter.red().to_string()
            } else {
                counter.green().to_string()
            };
            output.push_str(&format!("  {:<24} {}\n", usage.label, counter));
        }

        output.push_str(&format!(
            "  {} ({})\n",
            "Selected Items".bold(),
            customizer.selected().len()
        ));
        if customizer.selected().is_empty() {
            output.push_str(&format!("    {}\n", "No items selected yet".dimmed()));
        }
        for item in customizer.selected() {
            output.push_str(&format!("    - {} {}\n", item.name, item.id.dimmed()));
        }

        if customizer.state() == CustomizerState::Ready {
            output.push_str(&format!("  {}\n", "Ready: type 'confirm'".green()));
        }
        output
    }

    pub fn format_quote(quote: &QuoteRequest) -> String {
        let mut output = Self::section_header("Quote Request");
        let fields = [
            ("Package", &quote.package_id),
            ("Guests", &quote.headcount),
            ("Name", &quote.name),
            ("Email", &quote.email),
            ("Phone", &quote.phone),
            ("Event date", &quote.event_date),
        ];
        for (label, value) in fields {
            if !value.is_empty() {
                output.push_str(&format!("  {:<11} {}\n", format!("{}:", label).bold(), value));
            }
        }
        output.push('\n');
        for line in quote.message.lines() {
            output.push_str(&format!("  {}\n", line));
        }
        output
    }

    pub fn format_packages(packages: &[CateringPackage], limits: &CategoryLimits) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Packages"));
        output.push('\n');

        for package in packages {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("── {} ──", package.name).yellow().bold(),
                package.id.dimmed()
            ));
            output.push_str(&format!("  {}\n", package.summary));

            if package.is_custom() {
                for entry in limits.entries() {
                    output.push_str(&format!(
                        "  {:<24} up to {}\n",
                        entry.label, entry.limit
                    ));
                }
                output.push_str(&format!(
                    "  {:<24} up to {}\n",
                    "Other categories",
                    limits.default_limit()
                ));
                continue;
            }

            for section in &package.sections {
                output.push_str(&format!("  {}\n", section.title.cyan()));
                for item in &section.items {
                    output.push_str(&format!("    * {}\n", item));
                }
            }
        }
        output
    }

    pub fn format_receipt(receipt: &SubmissionReceipt) -> String {
        match receipt {
            SubmissionReceipt::Delivered { reference } => {
                let mut line = format!("{}", "Inquiry sent!".green().bold());
                if let Some(reference) = reference {
                    line.push_str(&format!(" Reference: {}", reference));
                }
                format!("{}\nWe'll get back to you shortly.\n", line)
            }
            SubmissionReceipt::Unconfirmed { reason } => format!(
                "{}\n  {}\n",
                "Inquiry recorded, but the server did not confirm delivery.".yellow(),
                reason.dimmed()
            ),
        }
    }

    pub fn format_dashboard(view: &DashboardView) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Dashboard"));
        output.push('\n');

        if view.origin == DataOrigin::Fallback {
            output.push_str(&format!(
                "{}\n",
                "Showing sample figures (stats unavailable)".yellow()
            ));
        }

        let stats = &view.stats;
        output.push_str(&format!(
            "  {:<16} ${:.2}\n  {:<16} {}\n  {:<16} {}\n",
            "Revenue".bold(),
            stats.total_revenue,
            "Orders".bold(),
            stats.total_orders,
            "Customers".bold(),
            stats.total_customers
        ));

        if !stats.top_items.is_empty() {
            output.push_str(&Self::section_header("Top Items"));
            let max = stats.max_item_revenue();
            for item in &stats.top_items {
                output.push_str(&format!(
                    "  {:<16} {:<20} ${:.2} ({} sold)\n",
                    item.name,
                    Self::bar(item.revenue, max, 20).cyan(),
                    item.revenue,
                    item.qty
                ));
            }
        }

        output.push_str(&Self::section_header("Invoices"));
        if view.invoices.is_empty() {
            output.push_str(&format!("  {}\n", "No invoices".dimmed()));
        }
        for invoice in &view.invoices {
            output.push_str(&format!(
                "  {:<6} {:<20} ${:>9.2}  {}\n",
                invoice.id,
                invoice.customer,
                invoice.total,
                invoice.status
            ));
        }
        output
    }

    /// Format any serializable view as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn price_text(amount: Option<f64>) -> String {
        match amount {
            Some(amount) => format!("${:.2}", amount),
            None => "Contact for pricing".dimmed().to_string(),
        }
    }

    fn bar(value: f64, max: f64, width: usize) -> String {
        if max <= 0.0 {
            return String::new();
        }
        let filled = ((value / max) * width as f64).round() as usize;
        "#".repeat(filled.min(width))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kababhut_application::CheckoutReceipt;
    use kababhut_domain::MenuItem;

    fn plain() {
        colored::control::set_override(false);
    }

    fn menu() -> Menu {
        Menu::new(vec![
            MenuItem::new("m1", "Chicken Biryani").with_category("biryani"),
            MenuItem::new("m17", "Gulab Jamun")
                .with_category("desserts")
                .with_price(3.0),
        ])
    }

    #[test]
    fn test_menu_marks_fallback() {
        plain();
        let load = MenuLoad {
            menu: menu(),
            origin: DataOrigin::Fallback,
            error: None,
        };
        let output = ConsoleFormatter::format_menu(&load, None);
        assert!(output.contains("built-in menu"));
        assert!(output.contains("Contact for pricing"));
        assert!(output.contains("$3.00"));
    }

    #[test]
    fn test_menu_category_filter() {
        plain();
        let output = ConsoleFormatter::menu_body(&menu(), Some("desserts"));
        assert!(output.contains("Gulab Jamun"));
        assert!(!output.contains("Chicken Biryani"));

        let missing = ConsoleFormatter::menu_body(&menu(), Some("soups"));
        assert!(missing.contains("No dishes in 'soups'"));
    }

    #[test]
    fn test_cart_totals() {
        plain();
        let mut cart = Cart::new();
        assert!(ConsoleFormatter::format_cart(&cart).contains("empty"));

        cart.add_item(&MenuItem::new("m17", "Gulab Jamun").with_price(3.0), 3);
        let output = ConsoleFormatter::format_cart(&cart);
        assert!(output.contains("x3"));
        assert!(output.contains("$9.00"));
    }

    #[test]
    fn test_selection_counters() {
        plain();
        let mut customizer = PackageCustomizer::default();
        customizer.set_guest_count("80");
        customizer
            .add_item(&MenuItem::new("m1", "Chicken Biryani").with_category("biryani"))
            .unwrap();

        let output = ConsoleFormatter::format_selection(&customizer);
        assert!(output.contains("Guests: 80"));
        assert!(output.contains("1/2"));
        assert!(output.contains("- Chicken Biryani"));
        assert!(output.contains("Ready"));
    }

    #[test]
    fn test_checkout_and_receipts() {
        plain();
        let done = CheckoutOutcome::Completed(CheckoutReceipt {
            lines: vec![],
            total: 12.5,
        });
        assert!(ConsoleFormatter::format_checkout(&done).contains("$12.50"));
        assert!(ConsoleFormatter::format_checkout(&CheckoutOutcome::LoginRequired)
            .contains("sign in"));

        let delivered = SubmissionReceipt::Delivered {
            reference: Some("inq-9".into()),
        };
        assert!(ConsoleFormatter::format_receipt(&delivered).contains("Reference: inq-9"));

        let unconfirmed = SubmissionReceipt::Unconfirmed {
            reason: "Timeout".into(),
        };
        assert!(ConsoleFormatter::format_receipt(&unconfirmed).contains("did not confirm"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(ConsoleFormatter::bar(50.0, 100.0, 10), "#####");
        assert_eq!(ConsoleFormatter::bar(1.0, 0.0, 10), "");
    }

    #[test]
    fn test_json_receipt() {
        let json = ConsoleFormatter::format_json(&SubmissionReceipt::Delivered { reference: None });
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "delivered");
    }
}
