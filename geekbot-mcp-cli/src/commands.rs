//! One-shot commands that print what the MCP tools would return
//!
//! Each command goes through the same handlers as the MCP server, so output
//! here is byte-for-byte the tool result.

use crate::error::CliResult;
use geekbot_mcp::mcp::tool_handlers::ToolHandlers;
use geekbot_mcp::mcp::types::{FetchReportsRequest, UserIdArg};
use geekbot_mcp::prompts::render_rollup_report_prompt;
use geekbot_mcp::{Config, GeekbotApi};
use std::sync::Arc;

/// Filters accepted by `geekbot-mcp reports`
#[derive(Debug, Default)]
pub struct ReportsArgs {
    /// Only reports of this standup
    pub standup_id: Option<i64>,
    /// Only reports of this member
    pub user_id: Option<String>,
    /// Lower date bound, `YYYY-MM-DD`
    pub after: Option<String>,
    /// Upper date bound, `YYYY-MM-DD`
    pub before: Option<String>,
    /// Only answers to these questions
    pub question_ids: Vec<i64>,
    /// Page size override
    pub limit: Option<u32>,
}

impl From<ReportsArgs> for FetchReportsRequest {
    fn from(args: ReportsArgs) -> Self {
        Self {
            standup_id: args.standup_id,
            user_id: args.user_id.map(UserIdArg::Text),
            after: args.after,
            before: args.before,
            question_ids: (!args.question_ids.is_empty()).then_some(args.question_ids),
            limit: args.limit,
        }
    }
}

fn handlers(config: &Config) -> ToolHandlers {
    ToolHandlers::new(
        Arc::new(GeekbotApi::from_config(config)),
        config.reports_limit,
    )
}

/// Render every standup
pub async fn run_standups(config: &Config) -> CliResult<String> {
    Ok(handlers(config).fetch_standups().await?)
}

/// Render reports matching the filters
pub async fn run_reports(config: &Config, args: ReportsArgs) -> CliResult<String> {
    Ok(handlers(config).fetch_reports(args.into()).await?)
}

/// Render the weekly rollup prompt
pub fn run_prompt(standup_id: Option<i64>) -> CliResult<String> {
    Ok(render_rollup_report_prompt(standup_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes::EXIT_ERROR;

    #[test]
    fn test_reports_args_to_request() {
        let request: FetchReportsRequest = ReportsArgs {
            standup_id: Some(3),
            user_id: Some("U1".to_string()),
            ..ReportsArgs::default()
        }
        .into();

        assert_eq!(request.standup_id, Some(3));
        assert_eq!(request.user_id, Some(UserIdArg::Text("U1".to_string())));
        assert_eq!(request.question_ids, None);
        assert_eq!(request.limit, None);
    }

    #[test]
    fn test_run_prompt() {
        let prompt = run_prompt(Some(12)).unwrap();
        assert!(prompt.contains("standup_id 12"));
    }

    #[tokio::test]
    async fn test_run_reports_rejects_bad_date() {
        let mut config = Config::with_api_key("key");
        config.base_url = "http://127.0.0.1:9/v1".to_string();

        let err = run_reports(
            &config,
            ReportsArgs {
                before: Some("yesterday".to_string()),
                ..ReportsArgs::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.exit_code, EXIT_ERROR);
    }
}
