//! Report listing tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::FetchReportsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for reading submitted standup reports
#[derive(Default)]
pub struct FetchReportsTool;

impl FetchReportsTool {
    /// Creates a new instance of the FetchReportsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for FetchReportsTool {
    fn name(&self) -> &'static str {
        "fetch_reports"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<FetchReportsRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: FetchReportsRequest = BaseToolImpl::parse_arguments(arguments)?;
        context.tool_handlers.handle_fetch_reports(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_reports_tool_metadata() {
        let tool = FetchReportsTool::new();
        assert_eq!(tool.name(), "fetch_reports");
        assert!(tool.description().contains("YYYY-MM-DD"));
        assert!(tool.schema()["properties"].get("after").is_some());
    }
}
