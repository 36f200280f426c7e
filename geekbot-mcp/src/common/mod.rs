//! Common utilities module
//!
//! Shared helpers used by the configuration and API layers.

/// Calendar date parsing for report filters
pub mod dates;

/// Environment variable loading utilities
pub mod env_loader;

// Re-export commonly used items
pub use dates::local_midnight_timestamp;
pub use env_loader::{load_env_parsed, load_env_required, load_env_string, EnvLoader};
