use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use quote_cli::app::open_store;
use quote_cli::prompt::Prompter;
use quote_cli::session::{self, Outcome};
use quote_core::store::StoreConfig;
use quote_core::{
    EmailSender, MailError, MailTemplate, PricingCatalog, SendResponse, ServiceKind,
    TemplateParams, WizardController, WizardMode, WizardStep,
};

/// Answers every prompt from a fixed list of menu indices and texts.
struct Script {
    choices: VecDeque<Option<usize>>,
    picks: VecDeque<Vec<usize>>,
    texts: VecDeque<&'static str>,
}

impl Prompter for Script {
    fn choose(
        &mut self,
        prompt: &str,
        _items: &[String],
        _default: usize,
    ) -> Result<Option<usize>> {
        self.choices
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no choice scripted for '{prompt}'"))
    }

    fn choose_many(
        &mut self,
        prompt: &str,
        _items: &[String],
        _selected: &[bool],
    ) -> Result<Vec<usize>> {
        self.picks
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no picks scripted for '{prompt}'"))
    }

    fn text(
        &mut self,
        prompt: &str,
        _initial: &str,
    ) -> Result<String> {
        self.texts
            .pop_front()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("no text scripted for '{prompt}'"))
    }

    fn show(
        &mut self,
        _text: &str,
    ) {
    }
}

struct Unreachable;

#[async_trait]
impl EmailSender for Unreachable {
    async fn send(
        &self,
        _template: MailTemplate,
        _params: &TemplateParams,
    ) -> Result<SendResponse, MailError> {
        Err(MailError::Transport("offline".to_string()))
    }
}

async fn open_wizard(
    db: &std::path::Path,
    step: WizardStep,
) -> WizardController {
    let store = open_store(&StoreConfig {
        backend: "sqlite".to_string(),
        connection_string: db.display().to_string(),
    })
    .await
    .unwrap();
    WizardController::restore(
        store,
        Arc::new(PricingCatalog::builtin()),
        step,
        WizardMode::Standard,
    )
    .await
}

#[tokio::test]
async fn answers_survive_leaving_and_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("drafts.db");

    let mut first = open_wizard(&db, WizardStep::Service).await;
    let mut script = Script {
        choices: VecDeque::from([Some(1), Some(0), Some(3), None]),
        picks: VecDeque::from([vec![1], vec![]]),
        texts: VecDeque::new(),
    };
    let outcome = session::run(&mut first, &mut script, &Unreachable).await.unwrap();
    assert_eq!(outcome, Outcome::Quit);
    drop(first);

    let second = open_wizard(&db, WizardStep::Details).await;

    assert_eq!(second.step(), WizardStep::Details);
    assert_eq!(second.form().service_type, Some(ServiceKind::Mobile));
    assert_eq!(second.form().project_type, vec!["Android".to_string()]);
    assert_eq!(second.form().budget, "<5k");
    assert_eq!(second.form().timeline, "6+ months");
}

#[tokio::test]
async fn failed_delivery_keeps_the_draft_for_a_retry() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("drafts.db");

    let mut first = open_wizard(&db, WizardStep::Service).await;
    let mut script = Script {
        // web, budget, timeline, continue, review, send, quit
        choices: VecDeque::from([Some(0), Some(1), Some(0), Some(0), Some(0), Some(0), Some(3)]),
        picks: VecDeque::from([vec![], vec![]]),
        texts: VecDeque::from(["Ada", "ada@example.com", "Call after 5"]),
    };
    let outcome = session::run(&mut first, &mut script, &Unreachable).await.unwrap();
    assert_eq!(outcome, Outcome::Quit);
    drop(first);

    let second = open_wizard(&db, WizardStep::Review).await;

    assert_eq!(second.form().service_type, Some(ServiceKind::Web));
    assert_eq!(second.form().email, "ada@example.com");
    assert_eq!(second.form().details, "Call after 5");
}
