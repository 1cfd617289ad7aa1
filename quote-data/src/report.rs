//! Plain-text rendering of a quote.

use std::fmt::Write;

use quote_core::QuoteBreakdown;
use quote_core::calculations::EstimateResult;

/// `1234567` -> `$1,234,567`.
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_range(range: EstimateResult) -> String {
    format!("{} - {}", format_money(range.min), format_money(range.max))
}

/// Itemised quote, one line per priced selection, range last.
///
/// Included features show their list price as `(was $N)`.
pub fn render_breakdown(breakdown: &QuoteBreakdown) -> String {
    let mut out = String::new();

    match &breakdown.service {
        Some(service) => {
            let _ = writeln!(out, "{:<34}{:>10}", service.label, format_money(service.price));
        }
        None => out.push_str("No service selected\n"),
    }

    if !breakdown.project_types.is_empty() {
        out.push_str("\nProject types\n");
        for item in &breakdown.project_types {
            let _ = writeln!(out, "  {:<32}{:>10}", item.label, format_money(item.price));
        }
    }

    if !breakdown.features.is_empty() {
        out.push_str("\nFeatures\n");
        for line in &breakdown.features {
            if line.included {
                let _ = writeln!(
                    out,
                    "  {:<32}{:>10}  included (was {})",
                    line.item.label,
                    format_money(0),
                    format_money(line.item.price)
                );
            } else {
                let _ = writeln!(
                    out,
                    "  {:<32}{:>10}",
                    line.item.label,
                    format_money(line.item.price)
                );
            }
        }
    }

    let _ = writeln!(out, "\nEstimated range: {}", format_range(breakdown.range));
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::{PriceEstimator, PricingCatalog, ServiceKind};

    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(999), "$999");
        assert_eq!(format_money(1000), "$1,000");
        assert_eq!(format_money(12500), "$12,500");
        assert_eq!(format_money(1234567), "$1,234,567");
    }

    #[test]
    fn range_uses_dash() {
        assert_eq!(
            format_range(EstimateResult { min: 7000, max: 8400 }),
            "$7,000 - $8,400"
        );
    }

    #[test]
    fn breakdown_marks_included_features() {
        let catalog = PricingCatalog::builtin();
        let breakdown = PriceEstimator::new(&catalog).breakdown(
            Some(ServiceKind::Web),
            &["E-commerce"],
            &["Analytics", "Admin Dashboard", "Social Integration", "User Authentication"],
        );

        let text = render_breakdown(&breakdown);

        assert!(text.starts_with("Web Development"));
        assert!(text.contains("E-commerce Store"));
        assert!(text.contains("included (was $600)"));
        assert!(!text.contains("included (was $2,500)"));
        assert!(text.ends_with("Estimated range: $7,000 - $8,400\n"));
    }

    #[test]
    fn empty_breakdown_says_so() {
        let catalog = PricingCatalog::builtin();
        let empty: [&str; 0] = [];
        let breakdown = PriceEstimator::new(&catalog).breakdown(None, &empty, &empty);

        assert_eq!(
            render_breakdown(&breakdown),
            "No service selected\n\nEstimated range: $0 - $0\n"
        );
    }
}
