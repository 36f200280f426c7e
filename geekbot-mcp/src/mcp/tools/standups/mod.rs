//! Standup listing tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::FetchStandupsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing every standup visible to the API key
#[derive(Default)]
pub struct FetchStandupsTool;

impl FetchStandupsTool {
    /// Creates a new instance of the FetchStandupsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for FetchStandupsTool {
    fn name(&self) -> &'static str {
        "fetch_standups"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<FetchStandupsRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: FetchStandupsRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_fetch_standups(request).await
    }
}
