use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not one of the known service keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown service '{0}'")]
pub struct UnknownService(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Web,
    Mobile,
    Backend,
    Other,
}

const WEB_PROJECT_TYPES: [&str; 4] = ["Marketing/Landing", "E-commerce", "SaaS / Web App", "Blog/CMS"];
const MOBILE_PROJECT_TYPES: [&str; 4] = ["iOS", "Android", "Tablet", "Wearables"];
const BACKEND_PROJECT_TYPES: [&str; 4] = [
    "API Development",
    "Database Design",
    "Cloud Setup",
    "Security Audit",
];

const ALL_FEATURES: [&str; 14] = [
    "User Authentication",
    "Push Notifications",
    "Payments",
    "Admin Dashboard",
    "Analytics",
    "Social Integration",
    "Map / Location",
    "File Uploads",
    "Camera / Media",
    "Bluetooth / BLE",
    "Offline Mode",
    "Chat / Messaging",
    "AI Integration",
    "Calendar / Booking",
];

// Hardware-bound features have no browser counterpart.
const WEB_EXCLUDED_FEATURES: [&str; 2] = ["Bluetooth / BLE", "Offline Mode"];

const BACKEND_FEATURES: [&str; 6] = [
    "User Authentication",
    "Payments",
    "Admin Dashboard",
    "Analytics",
    "File Uploads",
    "AI Integration",
];

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [Self::Web, Self::Mobile, Self::Backend, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Backend => "backend",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "web" => Some(Self::Web),
            "mobile" => Some(Self::Mobile),
            "backend" => Some(Self::Backend),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Project types offered on the details step for this service.
    ///
    /// This is a menu, not a constraint: the catalog prices any project type
    /// regardless of the selected service.
    pub fn project_type_options(&self) -> &'static [&'static str] {
        match self {
            Self::Web => &WEB_PROJECT_TYPES,
            Self::Mobile => &MOBILE_PROJECT_TYPES,
            Self::Backend | Self::Other => &BACKEND_PROJECT_TYPES,
        }
    }

    /// Add-on features offered on the details step for this service.
    pub fn feature_options(&self) -> Vec<&'static str> {
        match self {
            Self::Mobile => ALL_FEATURES.to_vec(),
            Self::Web => ALL_FEATURES
                .iter()
                .copied()
                .filter(|f| !WEB_EXCLUDED_FEATURES.contains(f))
                .collect(),
            Self::Backend | Self::Other => BACKEND_FEATURES.to_vec(),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| UnknownService(s.to_string()))
    }
}
