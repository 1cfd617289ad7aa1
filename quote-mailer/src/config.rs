use quote_core::{MailError, MailTemplate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials and template ids for the EmailJS REST API.
///
/// Read from the `[email]` table of the application config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    /// Sent as `user_id`.
    pub public_key: String,
    /// Private key for accounts that enforce it; sent as `accessToken`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub inquiry_template_id: String,
    pub contact_template_id: String,
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: String::new(),
            public_key: String::new(),
            access_token: None,
            inquiry_template_id: String::new(),
            contact_template_id: String::new(),
            timeout_secs: 15,
        }
    }
}

impl EmailJsConfig {
    /// Template id for `template`, or a configuration error if it is unset.
    pub fn template_id(
        &self,
        template: MailTemplate,
    ) -> Result<&str, MailError> {
        let (id, name) = match template {
            MailTemplate::ProjectInquiry => (&self.inquiry_template_id, "inquiry_template_id"),
            MailTemplate::ContactMessage => (&self.contact_template_id, "contact_template_id"),
        };
        if id.trim().is_empty() {
            return Err(MailError::Configuration(format!("{name} is not set")));
        }
        Ok(id)
    }

    /// Checks the settings every send needs.
    pub fn validate(&self) -> Result<(), MailError> {
        if self.service_id.trim().is_empty() {
            return Err(MailError::Configuration("service_id is not set".to_string()));
        }
        if self.public_key.trim().is_empty() {
            return Err(MailError::Configuration("public_key is not set".to_string()));
        }
        Ok(())
    }
}
