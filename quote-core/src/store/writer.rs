//! Ordered, fire-and-forget draft persistence.
//!
//! The wizard must never wait on (or fail because of) a draft write, so
//! writes are queued on an unbounded channel and applied by a single task in
//! the order they were issued.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::draft_store::DraftStore;

enum DraftCommand {
    Save(String),
    Clear,
    Flush(oneshot::Sender<()>),
}

/// Handle to the background task that owns draft writes for one key.
///
/// Dropping every handle closes the channel; queued writes still complete.
#[derive(Debug, Clone)]
pub struct DraftWriter {
    tx: mpsc::UnboundedSender<DraftCommand>,
}

impl DraftWriter {
    /// Starts the writer task on the current tokio runtime.
    pub fn spawn(
        store: Arc<dyn DraftStore>,
        key: impl Into<String>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(store, key.into(), rx));
        Self { tx }
    }

    /// Queues `snapshot` to replace the stored draft.
    pub fn save(
        &self,
        snapshot: String,
    ) {
        self.send(DraftCommand::Save(snapshot));
    }

    /// Queues removal of the stored draft.
    pub fn clear(&self) {
        self.send(DraftCommand::Clear);
    }

    /// Waits until every command queued before this call has been applied.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        self.send(DraftCommand::Flush(ack));
        // A closed channel means the task is gone and nothing is pending.
        let _ = done.await;
    }

    fn send(
        &self,
        command: DraftCommand,
    ) {
        if self.tx.send(command).is_err() {
            warn!("draft writer stopped; dropping draft update");
        }
    }
}

async fn run(
    store: Arc<dyn DraftStore>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<DraftCommand>,
) {
    while let Some(command) = rx.recv().await {
        match command {
            DraftCommand::Save(snapshot) => {
                if let Err(error) = store.save(&key, &snapshot).await {
                    warn!(%key, %error, "failed to persist draft");
                }
            }
            DraftCommand::Clear => match store.remove(&key).await {
                Ok(()) => debug!(%key, "draft cleared"),
                Err(error) => warn!(%key, %error, "failed to clear draft"),
            },
            DraftCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}
