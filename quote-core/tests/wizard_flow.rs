//! A complete visit: resume a draft, price it, fix contact details, submit.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use quote_core::store::{DRAFT_KEY, MemoryDraftStore};
use quote_core::wizard::{Direction, FieldError, SubmitStatus};
use quote_core::{
    DraftStore, EmailSender, EstimateResult, FormField, MailError, MailTemplate, PricingCatalog,
    SendResponse, ServiceKind, TemplateParams, WizardController, WizardMode, WizardStep,
};

#[derive(Default)]
struct Outbox {
    sent: Mutex<Vec<(MailTemplate, TemplateParams)>>,
}

#[async_trait]
impl EmailSender for Outbox {
    async fn send(
        &self,
        template: MailTemplate,
        params: &TemplateParams,
    ) -> Result<SendResponse, MailError> {
        self.sent.lock().unwrap().push((template, params.clone()));
        Ok(SendResponse::ok())
    }
}

#[tokio::test]
async fn quote_mode_visit_from_draft_to_submission() {
    let draft = r#"{"serviceType":"web","projectType":["E-commerce"],"features":[],"budget":"","timeline":"","name":"","email":"","details":""}"#;
    let store = Arc::new(MemoryDraftStore::with_entry(DRAFT_KEY, draft));
    let catalog = Arc::new(PricingCatalog::builtin());
    let step = WizardStep::from_query(Some("1"));
    let mode = WizardMode::from_query(Some("quote"));

    let mut wizard = WizardController::restore(store.clone(), catalog, step, mode).await;
    assert_eq!(wizard.step(), WizardStep::Details);
    assert!(!wizard.mode().asks_budget());

    // Three cheapest features are free; only Admin Dashboard is charged.
    for feature in ["Analytics", "Social Integration", "User Authentication", "Admin Dashboard"] {
        wizard.toggle_feature(feature).unwrap();
    }
    assert_eq!(wizard.estimate(), EstimateResult { min: 7000, max: 8400 });

    let breakdown = wizard.breakdown();
    let charged: Vec<_> = breakdown
        .features
        .iter()
        .filter(|line| !line.included)
        .map(|line| line.item.key.as_str())
        .collect();
    assert_eq!(charged, vec!["Admin Dashboard"]);

    wizard.set_field(FormField::Timeline, "1-2 months");
    assert_eq!(wizard.next(), WizardStep::Contact);

    wizard.set_field(FormField::Email, "grace@");
    assert_eq!(wizard.review_click(), WizardStep::Contact);
    assert_eq!(wizard.errors().get(FormField::Email), Some(FieldError::InvalidFormat));

    wizard.set_field(FormField::Name, "Grace");
    wizard.set_field(FormField::Email, "grace@example.com");
    assert_eq!(wizard.review_click(), WizardStep::Review);
    assert_eq!(wizard.direction(), Direction::Forward);

    let outbox = Outbox::default();
    assert_eq!(wizard.submit(&outbox).await, SubmitStatus::Submitted);
    wizard.flush_drafts().await;

    let sent = outbox.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (template, params) = &sent[0];
    assert_eq!(*template, MailTemplate::ProjectInquiry);
    assert_eq!(params.get("serviceType"), Some("web"));
    assert_eq!(
        params.get("features"),
        Some("Analytics, Social Integration, User Authentication, Admin Dashboard")
    );
    assert_eq!(params.get("budget"), Some(""));
    assert_eq!(params.get("subject"), Some("New Project Inquiry: web (Grace)"));

    assert_eq!(store.load(DRAFT_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn changing_service_midway_resets_price() {
    let store = Arc::new(MemoryDraftStore::new());
    let mut wizard = WizardController::restore(
        store,
        Arc::new(PricingCatalog::builtin()),
        WizardStep::Service,
        WizardMode::Standard,
    )
    .await;

    wizard.select_service(ServiceKind::Mobile);
    wizard.toggle_project_type("Wearables").unwrap();
    assert_eq!(wizard.estimate().min, 7000);

    wizard.back();
    wizard.select_service(ServiceKind::Backend);

    assert_eq!(wizard.estimate(), EstimateResult { min: 4000, max: 4800 });
}
