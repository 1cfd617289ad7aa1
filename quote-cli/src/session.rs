//! Drives a [`WizardController`] through a [`Prompter`] until the inquiry
//! is sent or the user leaves.

use anyhow::Result;
use quote_core::wizard::SubmitStatus;
use quote_core::{
    BUDGET_OPTIONS, EmailSender, FormField, ServiceKind, TIMELINE_OPTIONS, WizardController,
    WizardStep,
};
use tracing::{debug, warn};

use crate::prompt::Prompter;
use crate::render;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Submitted,
    Quit,
}

enum Flow {
    Continue,
    Done(Outcome),
}

pub async fn run<P: Prompter>(
    wizard: &mut WizardController,
    prompter: &mut P,
    sender: &dyn EmailSender,
) -> Result<Outcome> {
    loop {
        prompter.show(&render::progress_line(wizard.step()));
        let flow = match wizard.step() {
            WizardStep::Service => service_step(wizard, prompter)?,
            WizardStep::Details => details_step(wizard, prompter)?,
            WizardStep::Contact => contact_step(wizard, prompter)?,
            WizardStep::Review => review_step(wizard, prompter, sender).await?,
        };
        if let Flow::Done(outcome) = flow {
            wizard.flush_drafts().await;
            return Ok(outcome);
        }
    }
}

fn service_step<P: Prompter>(
    wizard: &mut WizardController,
    prompter: &mut P,
) -> Result<Flow> {
    let mut items: Vec<String> = ServiceKind::ALL
        .iter()
        .map(|kind| render::service_item(*kind, wizard.catalog()))
        .collect();
    items.push("Quit".to_string());

    let default = wizard
        .form()
        .service_type
        .and_then(|current| ServiceKind::ALL.iter().position(|k| *k == current))
        .unwrap_or(0);

    match prompter.choose("What can we build for you?", &items, default)? {
        Some(index) if index < ServiceKind::ALL.len() => {
            wizard.select_service(ServiceKind::ALL[index]);
            Ok(Flow::Continue)
        }
        _ => Ok(Flow::Done(Outcome::Quit)),
    }
}

fn details_step<P: Prompter>(
    wizard: &mut WizardController,
    prompter: &mut P,
) -> Result<Flow> {
    let Some(kind) = wizard.form().service_type else {
        wizard.back();
        return Ok(Flow::Continue);
    };

    let project_options = kind.project_type_options();
    let picked = pick_many(
        prompter,
        "Project type (space to toggle)",
        project_options,
        &wizard.form().project_type,
        |key| render::option_item(key, wizard.catalog().project_type(key)),
    )?;
    for key in toggles(project_options, &wizard.form().project_type, &picked) {
        if let Err(e) = wizard.toggle_project_type(key) {
            warn!(error = %e, "project type not in catalog");
        }
    }

    let feature_options = kind.feature_options();
    let picked = pick_many(
        prompter,
        "Features (the three cheapest are included)",
        &feature_options,
        &wizard.form().features,
        |key| render::option_item(key, wizard.catalog().feature(key)),
    )?;
    for key in toggles(&feature_options, &wizard.form().features, &picked) {
        if let Err(e) = wizard.toggle_feature(key) {
            warn!(error = %e, "feature not in catalog");
        }
    }

    if wizard.mode().asks_budget() {
        if let Some(budget) = pick_one(prompter, "Budget", &BUDGET_OPTIONS, &wizard.form().budget)? {
            wizard.set_field(FormField::Budget, budget);
        }
    }
    if let Some(timeline) = pick_one(prompter, "Timeline", &TIMELINE_OPTIONS, &wizard.form().timeline)? {
        wizard.set_field(FormField::Timeline, timeline);
    }

    if wizard.mode().shows_live_quote() {
        prompter.show(&render::live_quote(&wizard.breakdown()));
    }

    navigate(wizard, prompter, "Continue")
}

fn contact_step<P: Prompter>(
    wizard: &mut WizardController,
    prompter: &mut P,
) -> Result<Flow> {
    for (field, prompt) in [
        (FormField::Name, "Your name"),
        (FormField::Email, "Email"),
        (FormField::Details, "Anything else we should know?"),
    ] {
        let value = prompter.text(prompt, wizard.form().get(field))?;
        if value != wizard.form().get(field) {
            wizard.set_field(field, value);
        }
    }

    let flow = navigate(wizard, prompter, "Review")?;
    if wizard.step() == WizardStep::Contact && !wizard.errors().is_empty() {
        prompter.show(&format!(
            "Please fix the following:\n{}",
            render::validation_errors(wizard.errors())
        ));
    }
    Ok(flow)
}

async fn review_step<P: Prompter>(
    wizard: &mut WizardController,
    prompter: &mut P,
    sender: &dyn EmailSender,
) -> Result<Flow> {
    prompter.show(&render::summary(wizard.form(), wizard.catalog(), wizard.mode()));
    prompter.show(&render::live_quote(&wizard.breakdown()));

    let items = ["Send request", "Back", "Start over", "Quit"].map(String::from);
    match prompter.choose("Ready to send?", &items, 0)? {
        Some(0) => match wizard.submit(sender).await {
            SubmitStatus::Submitted => {
                prompter.show("Thanks! We received your request and will be in touch shortly.");
                Ok(Flow::Done(Outcome::Submitted))
            }
            SubmitStatus::Failed(failure) => {
                prompter.show(&render::delivery_failure(&failure));
                wizard.dismiss_error();
                Ok(Flow::Continue)
            }
            other => {
                debug!(status = ?other, "submit did not complete");
                Ok(Flow::Continue)
            }
        },
        Some(1) => {
            wizard.back();
            Ok(Flow::Continue)
        }
        Some(2) => {
            wizard.start_over();
            Ok(Flow::Continue)
        }
        _ => Ok(Flow::Done(Outcome::Quit)),
    }
}

/// Offers `[forward, Back, Quit]` and applies the choice.
fn navigate<P: Prompter>(
    wizard: &mut WizardController,
    prompter: &mut P,
    forward: &str,
) -> Result<Flow> {
    let items = [forward, "Back", "Quit"].map(String::from);
    match prompter.choose("Next", &items, 0)? {
        Some(0) => {
            wizard.next();
            Ok(Flow::Continue)
        }
        Some(1) => {
            wizard.back();
            Ok(Flow::Continue)
        }
        _ => Ok(Flow::Done(Outcome::Quit)),
    }
}

fn pick_many<P, F>(
    prompter: &mut P,
    prompt: &str,
    options: &[&str],
    current: &[String],
    label: F,
) -> Result<Vec<usize>>
where
    P: Prompter,
    F: Fn(&str) -> String,
{
    if options.is_empty() {
        return Ok(Vec::new());
    }
    let items: Vec<String> = options.iter().map(|key| label(*key)).collect();
    let selected: Vec<bool> = options
        .iter()
        .map(|key| current.iter().any(|c| c == key))
        .collect();
    prompter.choose_many(prompt, &items, &selected)
}

/// Returns the chosen option, or `None` if the prompt was cancelled.
fn pick_one<'a, P: Prompter>(
    prompter: &mut P,
    prompt: &str,
    options: &[&'a str],
    current: &str,
) -> Result<Option<&'a str>> {
    let items: Vec<String> = options.iter().map(|s| s.to_string()).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);
    Ok(prompter
        .choose(prompt, &items, default)?
        .and_then(|i| options.get(i).copied()))
}

/// Keys whose selection state differs between `current` and the `picked`
/// indices into `options`, in menu order.
pub fn toggles<'a>(
    options: &[&'a str],
    current: &[String],
    picked: &[usize],
) -> Vec<&'a str> {
    options
        .iter()
        .enumerate()
        .filter(|(i, key)| picked.contains(i) != current.iter().any(|c| c == *key))
        .map(|(_, key)| *key)
        .collect()
}
