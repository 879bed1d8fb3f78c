/// DevOps Notify Core - Shared library for the DevOps notification relay
///
/// This crate contains the event models, AWS service traits and the
/// templated email notifier used by the worker Lambda.
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::NotifyError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
