use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::WizardFormState;

/// Flat string record handed to the email template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateParams(BTreeMap<String, String>);

impl TemplateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Flattens a wizard submission, adding a synthesized subject line.
    pub fn project_inquiry(form: &WizardFormState) -> Self {
        let service = form.service_type.map(|k| k.as_str()).unwrap_or("");

        Self::new()
            .with("name", form.name.as_str())
            .with("email", form.email.as_str())
            .with("serviceType", service)
            .with("projectType", form.project_type.join(", "))
            .with("features", form.features.join(", "))
            .with("timeline", form.timeline.as_str())
            .with("budget", form.budget.as_str())
            .with("details", form.details.as_str())
            .with(
                "subject",
                format!("New Project Inquiry: {service} ({})", form.name),
            )
    }
}
