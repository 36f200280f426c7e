//! MCP tool implementations, one module per tool

/// The `fetch_reports` tool
pub mod reports;
/// The `fetch_standups` tool
pub mod standups;
