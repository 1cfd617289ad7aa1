//! Text shown between prompts.

use std::fmt::Write;

use quote_core::mail::DeliveryFailure;
use quote_core::wizard::ValidationErrors;
use quote_core::{PricingCatalog, QuoteBreakdown, ServiceKind, WizardFormState, WizardMode, WizardStep};
use quote_data::{format_money, render_breakdown};

const BAR_WIDTH: usize = 20;

/// `Step 2 of 4: Details  [##########----------]  50%`
pub fn progress_line(step: WizardStep) -> String {
    let percent = usize::from(step.progress_percent());
    let filled = BAR_WIDTH * percent / 100;
    format!(
        "Step {} of {}: {}  [{}{}] {:>3}%",
        step.index() + 1,
        WizardStep::ALL.len(),
        step.title(),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// Menu entry for a service, with its starting price when the catalog has one.
pub fn service_item(
    kind: ServiceKind,
    catalog: &PricingCatalog,
) -> String {
    match catalog.service(kind) {
        Some(config) => format!("{} (from {})", config.label, format_money(config.base_price)),
        None => kind.to_string(),
    }
}

/// Menu entry for a project type or feature, labelled from the catalog.
pub fn option_item(
    key: &str,
    config: Option<&quote_core::PriceConfig>,
) -> String {
    match config {
        Some(config) => format!("{} (+{})", config.label, format_money(config.base_price)),
        None => key.to_string(),
    }
}

pub fn live_quote(breakdown: &QuoteBreakdown) -> String {
    format!("── Live quote ──\n{}", render_breakdown(breakdown))
}

/// Everything entered, as shown on the review step.
pub fn summary(
    form: &WizardFormState,
    catalog: &PricingCatalog,
    mode: WizardMode,
) -> String {
    let service = form
        .service_type
        .map(|kind| {
            catalog
                .service(kind)
                .map(|c| c.label.clone())
                .unwrap_or_else(|| kind.to_string())
        })
        .unwrap_or_default();

    let mut rows = vec![
        ("Service", service),
        ("Project type", form.project_type.join(", ")),
        ("Features", form.features.join(", ")),
    ];
    if mode.asks_budget() {
        rows.push(("Budget", form.budget.clone()));
    }
    rows.push(("Timeline", form.timeline.clone()));
    rows.push(("Contact", format!("{} ({})", form.name, form.email)));
    rows.push(("Details", form.details.clone()));

    let mut out = String::new();
    for (label, value) in rows {
        let value = if value.trim().is_empty() { "-" } else { value.as_str() };
        let _ = writeln!(out, "{:<14}{}", format!("{label}:"), value);
    }
    out
}

pub fn validation_errors(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for (field, error) in errors.iter() {
        let _ = writeln!(out, "  {field}: {error}");
    }
    out
}

pub fn delivery_failure(failure: &DeliveryFailure) -> String {
    format!("Your request could not be sent ({failure}). Your answers are kept; please try again.")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::FormField;
    use quote_core::wizard::FieldError;

    use super::*;

    #[test]
    fn progress_fills_by_quarters() {
        assert_eq!(
            progress_line(WizardStep::Service),
            "Step 1 of 4: Service  [#####---------------]  25%"
        );
        assert_eq!(
            progress_line(WizardStep::Review),
            "Step 4 of 4: Review  [####################] 100%"
        );
    }

    #[test]
    fn service_item_shows_starting_price() {
        let catalog = PricingCatalog::builtin();

        assert_eq!(
            service_item(ServiceKind::Mobile, &catalog),
            "Mobile App (from $5,000)"
        );
        assert_eq!(service_item(ServiceKind::Web, &PricingCatalog::default()), "web");
    }

    #[test]
    fn summary_hides_budget_in_quote_mode() {
        let catalog = PricingCatalog::builtin();
        let form = WizardFormState {
            service_type: Some(ServiceKind::Web),
            budget: "<5k".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        };

        let standard = summary(&form, &catalog, WizardMode::Standard);
        let quote = summary(&form, &catalog, WizardMode::Quote);

        assert!(standard.contains("Budget:       <5k"));
        assert!(!quote.contains("Budget"));
        assert!(quote.starts_with("Service:      Web Development\n"));
        assert!(quote.contains("Contact:      Ada (ada@example.com)"));
        assert!(quote.contains("Features:     -"));
    }

    #[test]
    fn errors_list_field_and_message() {
        let mut errors = ValidationErrors::default();
        errors.insert(FormField::Email, FieldError::InvalidFormat);

        assert_eq!(
            validation_errors(&errors),
            "  email: please enter a valid email address\n"
        );
    }

    #[test]
    fn failure_message_names_the_cause() {
        let text = delivery_failure(&DeliveryFailure::Rejected { status: 500 });

        assert!(text.contains("status 500"));
    }
}
