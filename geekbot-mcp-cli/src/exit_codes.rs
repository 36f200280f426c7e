//! Exit code constants for CLI commands
//!
//! - 0: Success
//! - 1: General error, including upstream and transport failures
//! - 2: Configuration or argument errors

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// General error
pub const EXIT_WARNING: i32 = 1;

/// Configuration or argument errors
pub const EXIT_ERROR: i32 = 2;
