use std::time::Duration;

use async_trait::async_trait;
use quote_core::mail::STATUS_OK;
use quote_core::{EmailSender, MailError, MailTemplate, SendResponse, TemplateParams};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EmailJsConfig;

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// [`EmailSender`] over the EmailJS REST endpoint.
///
/// Any HTTP answer is returned as a [`SendResponse`]; deciding whether it
/// counts as delivered is left to the caller.
pub struct EmailJsClient {
    http: Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, MailError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MailError::Configuration(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(
        &self,
        template: MailTemplate,
        params: &TemplateParams,
    ) -> Result<SendResponse, MailError> {
        self.config.validate()?;
        let template_id = self.config.template_id(template)?;

        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id,
            user_id: &self.config.public_key,
            access_token: self.config.access_token.as_deref(),
            template_params: params,
        };

        debug!(?template, %template_id, fields = params.len(), "sending email");
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        if status != STATUS_OK {
            warn!(status, %text, "email service answered with an error");
        }

        Ok(SendResponse { status, text })
    }
}
