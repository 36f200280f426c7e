//! Shared utilities for MCP operations
//!
//! Maps library errors onto MCP error responses so every tool reports
//! failures the same way.

use crate::GeekbotError;
use rmcp::Error as McpError;

/// Common error handling patterns for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a [`GeekbotError`] to the matching MCP error:
    /// - caller input errors -> invalid_params
    /// - upstream, decoding and transport errors -> internal_error
    pub fn handle_error(error: GeekbotError, operation: &str) -> McpError {
        tracing::error!("MCP operation '{}' failed: {}", operation, error);

        match error {
            GeekbotError::InvalidArgument(msg) => {
                McpError::invalid_params(format!("Invalid argument: {msg}"), None)
            }
            GeekbotError::Upstream { status, body } => McpError::internal_error(
                format!("Failed to {operation}: Geekbot API returned HTTP {status}: {body}"),
                None,
            ),
            other => McpError::internal_error(format!("Failed to {operation}: {other}"), None),
        }
    }
}
