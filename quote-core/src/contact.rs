//! One-shot message from the contact section, outside the wizard.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::mail::{DeliveryFailure, EmailSender, MailTemplate, TemplateParams};
use crate::wizard::ValidationErrors;
use crate::wizard::validation::{check_email, check_name};
use crate::FormField;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Delivery(#[from] DeliveryFailure),
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Err(e) = check_name(&self.name) {
            errors.insert(FormField::Name, e);
        }
        if let Err(e) = check_email(&self.email) {
            errors.insert(FormField::Email, e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn params(&self) -> TemplateParams {
        TemplateParams::new()
            .with("name", self.name.as_str())
            .with("email", self.email.as_str())
            .with("message", self.message.as_str())
    }

    /// Validates, then sends. Nothing is sent when validation fails.
    pub async fn submit(
        &self,
        sender: &dyn EmailSender,
    ) -> Result<(), ContactError> {
        self.validate().map_err(ContactError::Invalid)?;

        let result = sender.send(MailTemplate::ContactMessage, &self.params()).await;
        match DeliveryFailure::check(result) {
            Ok(_) => {
                info!("contact message delivered");
                Ok(())
            }
            Err(failure) => {
                warn!(error = %failure, "contact message not delivered");
                Err(failure.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mail::{MailError, SendResponse};
    use crate::wizard::FieldError;

    struct FixedSender {
        status: u16,
        calls: AtomicUsize,
    }

    impl FixedSender {
        fn new(status: u16) -> Self {
            Self {
                status,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EmailSender for FixedSender {
        async fn send(
            &self,
            template: MailTemplate,
            params: &TemplateParams,
        ) -> Result<SendResponse, MailError> {
            assert_eq!(template, MailTemplate::ContactMessage);
            assert_eq!(params.len(), 3);
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(SendResponse {
                status: self.status,
                text: String::new(),
            })
        }
    }

    #[test]
    fn params_carry_three_keys() {
        let params = ContactForm::new("Ada", "ada@example.com", "Hello").params();

        assert_eq!(params.get("message"), Some("Hello"));
        assert_eq!(params.get("name"), Some("Ada"));
    }

    #[tokio::test]
    async fn delivers_valid_message() {
        let sender = FixedSender::new(200);

        let result = ContactForm::new("Ada", "ada@example.com", "Hello")
            .submit(&sender)
            .await;

        assert_eq!(result, Ok(()));
        assert_eq!(sender.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_form_is_never_sent() {
        let sender = FixedSender::new(200);

        let err = ContactForm::new("", "nope", "Hello")
            .submit(&sender)
            .await
            .unwrap_err();

        let ContactError::Invalid(errors) = &err else {
            panic!("expected validation errors, got {err:?}");
        };
        assert_eq!(errors.get(FormField::Email), Some(FieldError::InvalidFormat));
        assert_eq!(sender.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_200_is_a_delivery_failure() {
        let sender = FixedSender::new(503);

        let result = ContactForm::new("Ada", "ada@example.com", "")
            .submit(&sender)
            .await;

        assert_eq!(
            result,
            Err(ContactError::Delivery(DeliveryFailure::Rejected { status: 503 }))
        );
    }
}
