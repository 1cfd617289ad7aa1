//! Four-step "start a project" flow.
//!
//! `Service -> Details -> Contact -> Review`, then `Submitted` once the
//! inquiry has been delivered.

pub mod controller;
pub mod step;
pub mod validation;

use thiserror::Error;

pub use controller::{SubmitStatus, WizardController};
pub use step::{Direction, WizardMode, WizardStep};
pub use validation::{FieldError, ValidationErrors, validate_contact};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    /// A project type or feature key the catalog does not price.
    #[error("unknown {kind} '{key}'")]
    UnknownKey { kind: &'static str, key: String },
}
