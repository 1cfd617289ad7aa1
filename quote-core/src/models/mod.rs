mod catalog;
mod form_state;
mod options;
mod price_config;
mod service_kind;

pub use catalog::PricingCatalog;
pub use form_state::{FormField, WizardFormState};
pub use options::{BUDGET_OPTIONS, TIMELINE_OPTIONS};
pub use price_config::PriceConfig;
pub use service_kind::{ServiceKind, UnknownService};
