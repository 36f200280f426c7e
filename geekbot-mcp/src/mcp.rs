//! Model Context Protocol (MCP) server support

use crate::api::GeekbotApi;
use crate::config::Config;
use crate::prompts::{
    render_rollup_report_prompt, ROLLUP_REPORT_PROMPT_DESCRIPTION, ROLLUP_REPORT_PROMPT_NAME,
};
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;

/// MCP module structure
pub mod responses;
pub mod shared_utils;
pub mod tool_handlers;
pub mod tool_registry;
pub mod tools;
pub mod types;

use tool_handlers::ToolHandlers;
use tool_registry::{register_geekbot_tools, ToolContext, ToolRegistry};

const SERVER_NAME: &str = "Geekbot";

const SERVER_INSTRUCTIONS: &str = "Read-only access to Geekbot standups and reports. Use fetch_standups to list standups with their questions and participants, and fetch_reports to read submitted reports filtered by standup, member or date range. The weekly_rollup_report prompt describes how to turn a week of reports into a rollup for leadership.";

/// MCP server exposing Geekbot tools and prompts
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server from loaded configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Credential, endpoint and query defaults for the Geekbot API
    pub fn new(config: &Config) -> Self {
        Self::with_api(GeekbotApi::from_config(config), config.reports_limit)
    }

    /// Create a new MCP server around an already configured API client.
    ///
    /// # Arguments
    ///
    /// * `api` - The Geekbot API client shared by all tool calls
    /// * `reports_limit` - `limit` used by `fetch_reports` when the caller gives none
    pub fn with_api(api: GeekbotApi, reports_limit: u32) -> Self {
        let tool_handlers = ToolHandlers::new(Arc::new(api), reports_limit);
        let tool_context = Arc::new(ToolContext::new(Arc::new(tool_handlers)));

        let mut tool_registry = ToolRegistry::new();
        register_geekbot_tools(&mut tool_registry);

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context,
        }
    }

    /// Names of all registered tools, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names = self.tool_registry.list_tool_names();
        names.sort();
        names
    }

    /// Invoke a tool by name outside of an MCP session.
    ///
    /// # Errors
    ///
    /// Returns `invalid_request` for unknown tools, otherwise whatever the tool returns.
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: serde_json::Map<String, Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => {
                tracing::debug!("Calling tool {}", name);
                tool.execute(arguments, &self.tool_context).await
            }
            None => Err(McpError::invalid_request(
                format!("Unknown tool: {name}"),
                None,
            )),
        }
    }

    /// Prompts advertised through `prompts/list`
    pub fn prompts(&self) -> Vec<Prompt> {
        vec![Prompt {
            name: ROLLUP_REPORT_PROMPT_NAME.into(),
            description: Some(ROLLUP_REPORT_PROMPT_DESCRIPTION.into()),
            arguments: Some(vec![PromptArgument {
                name: "standup_id".into(),
                description: Some(
                    "Id of the standup to summarize; when omitted the agent looks it up first"
                        .into(),
                ),
                required: Some(false),
            }]),
        }]
    }

    /// Render a prompt by name with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for unknown prompts or a non-integer `standup_id`.
    pub fn render_prompt(
        &self,
        name: &str,
        arguments: Option<&serde_json::Map<String, Value>>,
    ) -> std::result::Result<String, McpError> {
        if name != ROLLUP_REPORT_PROMPT_NAME {
            tracing::warn!("Prompt '{}' not found", name);
            return Err(McpError::invalid_params(
                format!("Prompt '{name}' is not available."),
                None,
            ));
        }

        let standup_id = match arguments.and_then(|args| args.get("standup_id")) {
            None => None,
            Some(value) => Self::parse_standup_id(value)?,
        };

        render_rollup_report_prompt(standup_id)
            .map_err(|e| McpError::internal_error(format!("Template rendering error: {e}"), None))
    }

    /// Prompt arguments arrive as strings from most clients, numbers from some
    fn parse_standup_id(value: &Value) -> std::result::Result<Option<i64>, McpError> {
        let invalid = || {
            McpError::invalid_params(
                format!("standup_id must be an integer, got {value}"),
                None,
            )
        };

        match value {
            Value::Null => Ok(None),
            Value::Number(number) => number.as_i64().map(Some).ok_or_else(invalid),
            Value::String(text) if text.trim().is_empty() => Ok(None),
            Value::String(text) => text.trim().parse().map(Some).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: Some(PromptsCapability {
                list_changed: Some(false),
            }),
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );
        Ok(self.get_info())
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: self.prompts(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        let text = self.render_prompt(&request.name, request.arguments.as_ref())?;

        Ok(GetPromptResult {
            description: Some(ROLLUP_REPORT_PROMPT_DESCRIPTION.into()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::Text { text },
            }],
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.call_tool_by_name(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server() -> McpServer {
        // Port 9 (discard) on localhost: nothing listens, no test here reaches the network
        let api = GeekbotApi::new("test-key").with_base_url("http://127.0.0.1:9/v1");
        McpServer::with_api(api, 30)
    }

    #[test]
    fn test_mcp_server_info() {
        let info = server().get_info();

        assert_eq!(info.server_info.name, "Geekbot");
        assert!(!info.server_info.version.is_empty());
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
    }

    #[test]
    fn test_mcp_tool_registration() {
        let names = server().list_tool_names();
        assert_eq!(names, vec!["fetch_reports", "fetch_standups"]);
    }

    #[test]
    fn test_mcp_tool_schemas_are_objects() {
        let server = server();
        for tool in server.tool_registry.list_tools() {
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&json!("object")),
                "tool {} has no object schema",
                tool.name
            );
            assert!(tool.description.is_some());
        }
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = server()
            .call_tool_by_name("delete_everything", serde_json::Map::new())
            .await
            .unwrap_err();
        assert!(err.message.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_fetch_reports_invalid_date_fails_before_network() {
        let mut args = serde_json::Map::new();
        args.insert("after".to_string(), json!("not-a-date"));

        let err = server()
            .call_tool_by_name("fetch_reports", args)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("not-a-date"));
    }

    #[test]
    fn test_prompts_listing() {
        let prompts = server().prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "weekly_rollup_report");
        let arguments = prompts[0].arguments.as_ref().unwrap();
        assert_eq!(arguments[0].name, "standup_id");
        assert_eq!(arguments[0].required, Some(false));
    }

    #[test]
    fn test_render_prompt_with_string_and_number_ids() {
        let server = server();

        let mut args = serde_json::Map::new();
        args.insert("standup_id".to_string(), json!("77"));
        let from_string = server
            .render_prompt("weekly_rollup_report", Some(&args))
            .unwrap();
        assert!(from_string.contains("standup_id 77"));

        args.insert("standup_id".to_string(), json!(77));
        let from_number = server
            .render_prompt("weekly_rollup_report", Some(&args))
            .unwrap();
        assert_eq!(from_string, from_number);

        let without = server.render_prompt("weekly_rollup_report", None).unwrap();
        assert!(without.contains("fetch_standups"));
    }

    #[test]
    fn test_render_prompt_errors() {
        let server = server();
        assert!(server.render_prompt("missing", None).is_err());

        let mut args = serde_json::Map::new();
        args.insert("standup_id".to_string(), json!("abc"));
        let err = server
            .render_prompt("weekly_rollup_report", Some(&args))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
