/// Data models for the DevOps notification relay
pub mod config;
pub mod envelope;
pub mod events;
pub mod notifications;

// Re-export commonly used types
pub use config::*;
pub use envelope::*;
pub use events::*;
pub use notifications::*;
