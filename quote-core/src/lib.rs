pub mod calculations;
pub mod contact;
pub mod mail;
pub mod models;
pub mod store;
pub mod wizard;

pub use contact::{ContactError, ContactForm};
pub use calculations::{EstimateResult, PriceEstimator, QuoteBreakdown};
pub use mail::{EmailSender, MailError, MailTemplate, SendResponse, TemplateParams};
pub use models::*;
pub use store::{DraftStore, StoreError};
pub use wizard::{WizardController, WizardError, WizardMode, WizardStep};
