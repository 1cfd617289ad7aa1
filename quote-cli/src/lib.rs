pub mod app;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod session;
