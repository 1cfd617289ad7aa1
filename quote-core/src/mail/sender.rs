use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TemplateParams;

/// The status code the email service answers with on accepted delivery.
pub const STATUS_OK: u16 = 200;

/// Which message template to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MailTemplate {
    /// Structured wizard submission.
    ProjectInquiry,
    /// Free-form message from the contact section.
    ContactMessage,
}

/// What the email service answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    pub status: u16,
    pub text: String,
}

impl SendResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK,
            text: "OK".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Errors raised before any answer came back from the email service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("email service not configured: {0}")]
    Configuration(String),
}

/// A submission that did not go through. Recoverable: the caller keeps
/// every field value and may retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryFailure {
    #[error("email service rejected the message with status {status}")]
    Rejected { status: u16 },

    #[error("email could not be sent: {0}")]
    Unsent(#[from] MailError),
}

impl DeliveryFailure {
    /// Interprets the outcome of a send; only status 200 counts as delivered.
    pub fn check(result: Result<SendResponse, MailError>) -> Result<SendResponse, DeliveryFailure> {
        match result {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(DeliveryFailure::Rejected {
                status: response.status,
            }),
            Err(error) => Err(DeliveryFailure::Unsent(error)),
        }
    }
}

/// Sends a rendered template through the email service.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        template: MailTemplate,
        params: &TemplateParams,
    ) -> Result<SendResponse, MailError>;
}
