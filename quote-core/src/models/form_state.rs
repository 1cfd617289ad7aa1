use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ServiceKind;

/// Scalar fields that can be assigned directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Budget,
    Timeline,
    Name,
    Email,
    Details,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Name => "name",
            Self::Email => "email",
            Self::Details => "details",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the visitor has entered so far.
///
/// The JSON shape (camelCase keys, empty string for "no service") is what
/// gets written to the draft store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardFormState {
    #[serde(
        serialize_with = "serialize_service",
        deserialize_with = "deserialize_service"
    )]
    pub service_type: Option<ServiceKind>,
    pub project_type: Vec<String>,
    pub features: Vec<String>,
    pub budget: String,
    pub timeline: String,
    pub name: String,
    pub email: String,
    pub details: String,
}

impl WizardFormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Budget => &self.budget,
            FormField::Timeline => &self.timeline,
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Details => &self.details,
        }
    }

    pub fn set(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        let slot = match field {
            FormField::Budget => &mut self.budget,
            FormField::Timeline => &mut self.timeline,
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Details => &mut self.details,
        };
        *slot = value.into();
    }

    /// Picks a service and drops every detail chosen for the previous one.
    pub fn choose_service(
        &mut self,
        kind: ServiceKind,
    ) {
        self.service_type = Some(kind);
        self.project_type.clear();
        self.features.clear();
        self.budget.clear();
        self.timeline.clear();
    }

    /// Returns `true` if the key is selected after the toggle.
    pub fn toggle_project_type(
        &mut self,
        key: &str,
    ) -> bool {
        toggle(&mut self.project_type, key)
    }

    /// Returns `true` if the key is selected after the toggle.
    pub fn toggle_feature(
        &mut self,
        key: &str,
    ) -> bool {
        toggle(&mut self.features, key)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }
}

fn toggle(
    set: &mut Vec<String>,
    key: &str,
) -> bool {
    if let Some(pos) = set.iter().position(|k| k == key) {
        set.remove(pos);
        false
    } else {
        set.push(key.to_string());
        true
    }
}

fn serialize_service<S>(
    value: &Option<ServiceKind>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.map(|k| k.as_str()).unwrap_or(""))
}

fn deserialize_service<'de, D>(deserializer: D) -> Result<Option<ServiceKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
