//! Seam to the transactional-email service.

pub mod params;
pub mod sender;

pub use params::TemplateParams;
pub use sender::{DeliveryFailure, EmailSender, MailError, MailTemplate, STATUS_OK, SendResponse};
