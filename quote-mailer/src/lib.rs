//! EmailJS delivery for quote inquiries and contact messages.

pub mod client;
pub mod config;

pub use client::EmailJsClient;
pub use config::{DEFAULT_ENDPOINT, EmailJsConfig};
