use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{PriceConfig, ServiceKind};

/// Priced offerings the estimator looks keys up in.
///
/// Project types are keyed independently of services; which project types a
/// service offers is a menu concern (see [`ServiceKind::project_type_options`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingCatalog {
    pub services: BTreeMap<ServiceKind, PriceConfig>,
    pub project_types: HashMap<String, PriceConfig>,
    pub features: HashMap<String, PriceConfig>,
}

impl PricingCatalog {
    pub fn service(&self, kind: ServiceKind) -> Option<&PriceConfig> {
        self.services.get(&kind)
    }

    pub fn project_type(&self, key: &str) -> Option<&PriceConfig> {
        self.project_types.get(key)
    }

    pub fn feature(&self, key: &str) -> Option<&PriceConfig> {
        self.features.get(key)
    }

    /// The agency's published price list.
    pub fn builtin() -> Self {
        let services = BTreeMap::from([
            (
                ServiceKind::Web,
                PriceConfig::new("Web Development", 1000)
                    .with_description("Professional websites and web applications"),
            ),
            (
                ServiceKind::Mobile,
                PriceConfig::new("Mobile App", 5000)
                    .with_description("Native iOS and Android applications"),
            ),
            (
                ServiceKind::Backend,
                PriceConfig::new("Backend / API", 4000)
                    .with_description("Scalable server-side infrastructure"),
            ),
            (
                ServiceKind::Other,
                PriceConfig::new("Consulting / Other", 2000)
                    .with_description("Specialized consulting or custom solutions"),
            ),
        ]);

        let project_types = priced(&[
            ("Marketing/Landing", "Marketing Website", 500),
            ("E-commerce", "E-commerce Store", 3500),
            ("SaaS / Web App", "SaaS Platform", 4500),
            ("Blog/CMS", "Blog / CMS", 1200),
            ("iOS", "iOS App", 500),
            ("Android", "Android App", 500),
            ("Tablet", "Tablet Optimization", 1000),
            ("Wearables", "Wearable App", 2000),
            ("API Development", "API Development", 1500),
            ("Database Design", "Database Architecture", 1000),
            ("Cloud Setup", "Cloud Infrastructure", 1000),
            ("Security Audit", "Security Audit", 2000),
        ]);

        let features = priced(&[
            ("User Authentication", "User Authentication", 1200),
            ("Push Notifications", "Push Notifications", 800),
            ("Payments", "Payment Integration", 2000),
            ("Admin Dashboard", "Admin Dashboard", 2500),
            ("Analytics", "Advanced Analytics", 800),
            ("Social Integration", "Social Media Integration", 600),
            ("Map / Location", "Maps & Geolocation", 1500),
            ("File Uploads", "File Upload & Storage", 1000),
            ("Camera / Media", "Camera & Media Manipulation", 1500),
            ("Bluetooth / BLE", "Bluetooth / BLE", 3000),
            ("Offline Mode", "Offline Capabilities", 2000),
            ("Chat / Messaging", "Real-time Chat", 3500),
            ("AI Integration", "AI / LLM Integration", 4000),
            ("Calendar / Booking", "Calendar & Booking System", 2500),
        ]);

        Self {
            services,
            project_types,
            features,
        }
    }
}

fn priced(entries: &[(&str, &str, u64)]) -> HashMap<String, PriceConfig> {
    entries
        .iter()
        .map(|(key, label, price)| (key.to_string(), PriceConfig::new(*label, *price)))
        .collect()
}
