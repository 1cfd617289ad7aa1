//! Wizard state machine.
//!
//! The controller is the only writer of [`WizardFormState`]. Every mutation
//! queues a draft snapshot on the [`DraftWriter`]; submission goes through
//! an [`EmailSender`] with a `Sending` guard against duplicate sends.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::step::{Direction, WizardMode, WizardStep};
use super::validation::{ValidationErrors, validate_contact};
use super::WizardError;
use crate::calculations::{EstimateResult, PriceEstimator, QuoteBreakdown};
use crate::mail::{DeliveryFailure, EmailSender, MailError, MailTemplate, SendResponse, TemplateParams};
use crate::store::{DRAFT_KEY, DraftStore, DraftWriter};
use crate::{FormField, PricingCatalog, ServiceKind, WizardFormState};

/// Where the submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A send is in flight; further submits are ignored.
    Sending,
    /// The last send failed. Field values are untouched.
    Failed(DeliveryFailure),
    /// Delivered; the draft has been cleared.
    Submitted,
}

pub struct WizardController {
    catalog: Arc<PricingCatalog>,
    form: WizardFormState,
    step: WizardStep,
    direction: Direction,
    mode: WizardMode,
    errors: ValidationErrors,
    status: SubmitStatus,
    drafts: DraftWriter,
}

impl WizardController {
    pub fn new(
        catalog: Arc<PricingCatalog>,
        form: WizardFormState,
        step: WizardStep,
        mode: WizardMode,
        drafts: DraftWriter,
    ) -> Self {
        Self {
            catalog,
            form,
            step,
            direction: Direction::Forward,
            mode,
            errors: ValidationErrors::default(),
            status: SubmitStatus::Idle,
            drafts,
        }
    }

    /// Starts a session from whatever draft `store` holds.
    ///
    /// A missing, unreadable or malformed draft yields a blank form.
    pub async fn restore(
        store: Arc<dyn DraftStore>,
        catalog: Arc<PricingCatalog>,
        step: WizardStep,
        mode: WizardMode,
    ) -> Self {
        let form = load_draft(store.as_ref()).await;
        let drafts = DraftWriter::spawn(store, DRAFT_KEY);
        Self::new(catalog, form, step, mode, drafts)
    }

    pub fn form(&self) -> &WizardFormState {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    // ── selections ───────────────────────────────────────────────────────

    /// Picks a service, resets the detail selections and moves on.
    pub fn select_service(
        &mut self,
        kind: ServiceKind,
    ) -> WizardStep {
        self.form.choose_service(kind);
        self.persist();
        debug!(service = %kind, "service selected");
        self.go_to(WizardStep::Details)
    }

    /// Adds or removes a project type. Returns whether it is now selected.
    pub fn toggle_project_type(
        &mut self,
        key: &str,
    ) -> Result<bool, WizardError> {
        if self.catalog.project_type(key).is_none() {
            return Err(WizardError::UnknownKey {
                kind: "project type",
                key: key.to_string(),
            });
        }
        let selected = self.form.toggle_project_type(key);
        self.persist();
        Ok(selected)
    }

    /// Adds or removes a feature. Returns whether it is now selected.
    pub fn toggle_feature(
        &mut self,
        key: &str,
    ) -> Result<bool, WizardError> {
        if self.catalog.feature(key).is_none() {
            return Err(WizardError::UnknownKey {
                kind: "feature",
                key: key.to_string(),
            });
        }
        let selected = self.form.toggle_feature(key);
        self.persist();
        Ok(selected)
    }

    /// Assigns a scalar field and drops any error shown for it.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        self.form.set(field, value);
        self.errors.clear(field);
        self.persist();
    }

    // ── navigation ───────────────────────────────────────────────────────

    pub fn back(&mut self) -> WizardStep {
        self.go_to(self.step.prev())
    }

    /// Moves forward if the current step allows it.
    ///
    /// * `Service`: only once a service has been chosen.
    /// * `Details`: always.
    /// * `Contact`: only when contact validation passes.
    /// * `Review`: never; submission is the way out.
    pub fn next(&mut self) -> WizardStep {
        match self.step {
            WizardStep::Service if self.form.service_type.is_none() => self.step,
            WizardStep::Service | WizardStep::Details => self.go_to(self.step.next()),
            WizardStep::Contact => self.review_click(),
            WizardStep::Review => self.step,
        }
    }

    /// Validates the contact details and, if they pass, opens the review.
    pub fn review_click(&mut self) -> WizardStep {
        if self.step != WizardStep::Contact {
            return self.step;
        }
        match validate_contact(&self.form) {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                self.go_to(WizardStep::Review)
            }
            Err(errors) => {
                debug!(count = errors.len(), "contact validation failed");
                self.errors = errors;
                self.step
            }
        }
    }

    // ── pricing ──────────────────────────────────────────────────────────

    pub fn estimate(&self) -> EstimateResult {
        PriceEstimator::new(&self.catalog).estimate(
            self.form.service_type,
            &self.form.project_type,
            &self.form.features,
        )
    }

    pub fn breakdown(&self) -> QuoteBreakdown {
        PriceEstimator::new(&self.catalog).breakdown(
            self.form.service_type,
            &self.form.project_type,
            &self.form.features,
        )
    }

    // ── submission ───────────────────────────────────────────────────────

    /// Enters `Sending` and returns the template parameters to deliver.
    ///
    /// Returns `None`, changing nothing, unless the wizard is on `Review`
    /// with no send in flight.
    pub fn begin_submit(&mut self) -> Option<TemplateParams> {
        if self.step != WizardStep::Review || self.is_sending() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(TemplateParams::project_inquiry(&self.form))
    }

    /// Records the outcome of the send started by [`begin_submit`](Self::begin_submit).
    ///
    /// On delivery the draft is cleared and the form reset. On failure the
    /// form and draft are left as they were so the user can retry.
    pub fn finish_submit(
        &mut self,
        result: Result<SendResponse, MailError>,
    ) -> Result<(), DeliveryFailure> {
        if !self.is_sending() {
            warn!("submission result received with no send in flight");
        }
        match DeliveryFailure::check(result) {
            Ok(_) => {
                info!(service = ?self.form.service_type, "project inquiry delivered");
                self.drafts.clear();
                self.form = WizardFormState::default();
                self.errors = ValidationErrors::default();
                self.status = SubmitStatus::Submitted;
                Ok(())
            }
            Err(failure) => {
                warn!(error = %failure, "project inquiry not delivered");
                self.status = SubmitStatus::Failed(failure.clone());
                Err(failure)
            }
        }
    }

    /// Sends the inquiry and returns the resulting status.
    ///
    /// Calling this when not on `Review`, or while a send is in flight,
    /// dispatches nothing.
    pub async fn submit(
        &mut self,
        sender: &dyn EmailSender,
    ) -> SubmitStatus {
        let Some(params) = self.begin_submit() else {
            return self.status.clone();
        };
        let result = sender.send(MailTemplate::ProjectInquiry, &params).await;
        // The failure is already recorded in the status.
        let _ = self.finish_submit(result);
        self.status.clone()
    }

    /// Hides the delivery-failure banner.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Drops everything entered and returns to the first step.
    pub fn start_over(&mut self) {
        self.form = WizardFormState::default();
        self.errors = ValidationErrors::default();
        self.status = SubmitStatus::Idle;
        self.drafts.clear();
        self.go_to(WizardStep::Service);
    }

    /// Waits for queued draft writes to land.
    pub async fn flush_drafts(&self) {
        self.drafts.flush().await;
    }

    fn go_to(
        &mut self,
        step: WizardStep,
    ) -> WizardStep {
        if step != self.step {
            self.direction = Direction::between(self.step, step);
            debug!(from = %self.step, to = %step, "wizard step changed");
            self.step = step;
        }
        self.step
    }

    fn persist(&self) {
        match self.form.to_json() {
            Ok(snapshot) => self.drafts.save(snapshot),
            Err(error) => warn!(%error, "could not serialize draft"),
        }
    }
}

async fn load_draft(store: &dyn DraftStore) -> WizardFormState {
    match store.load(DRAFT_KEY).await {
        Ok(Some(json)) => WizardFormState::from_json(&json).unwrap_or_else(|error| {
            warn!(%error, "ignoring malformed draft");
            WizardFormState::default()
        }),
        Ok(None) => WizardFormState::default(),
        Err(error) => {
            warn!(%error, "could not read draft; starting blank");
            WizardFormState::default()
        }
    }
}
