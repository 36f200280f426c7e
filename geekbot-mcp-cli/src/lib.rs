//! geekbot-mcp CLI Library
//!
//! Command-line interface definitions, one-shot commands, logging setup and
//! exit codes for the `geekbot-mcp` binary.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// One-shot commands printing tool output
pub mod commands;
/// CLI error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Logging setup
pub mod logging;
