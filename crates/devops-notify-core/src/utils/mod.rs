/// Utility functions
pub mod logging;
