//! Tool handlers for MCP operations
//!
//! Each handler opens its own API session, fetches one list, adapts it to the
//! data model and renders it. Nothing is shared between calls except the
//! immutable API client.

use super::responses::create_success_response;
use super::shared_utils::McpErrorHandler;
use super::types::{FetchReportsRequest, FetchStandupsRequest};
use crate::api::{GeekbotApi, ReportQuery};
use crate::common::local_midnight_timestamp;
use crate::models::{report_from_json, standup_from_json};
use crate::template::{render_reports, render_standups};
use crate::Result;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use std::sync::Arc;

/// Tool handlers for MCP server operations
#[derive(Clone)]
pub struct ToolHandlers {
    api: Arc<GeekbotApi>,
    reports_limit: u32,
}

impl ToolHandlers {
    /// Create a new tool handlers instance around a shared API client
    pub fn new(api: Arc<GeekbotApi>, reports_limit: u32) -> Self {
        Self { api, reports_limit }
    }

    /// Fetch all standups and render them as a `<Standups>` section
    pub async fn fetch_standups(&self) -> Result<String> {
        let session = self.api.open()?;
        let raw = session.get_standups().await?;
        session.close();

        let standups = raw
            .iter()
            .map(standup_from_json)
            .collect::<Result<Vec<_>>>()?;
        tracing::info!("Fetched {} standup(s)", standups.len());

        render_standups(&standups)
    }

    /// Fetch reports matching the request and render them as a `<Reports>` section.
    ///
    /// Dates are validated before any request is made.
    pub async fn fetch_reports(&self, request: FetchReportsRequest) -> Result<String> {
        let query = self.report_query(request)?;

        let session = self.api.open()?;
        let raw = session.get_reports(&query).await?;
        session.close();

        let reports = raw
            .iter()
            .map(report_from_json)
            .collect::<Result<Vec<_>>>()?;
        tracing::info!("Fetched {} report(s)", reports.len());

        render_reports(&reports)
    }

    /// Translate tool arguments into an API query
    pub fn report_query(&self, request: FetchReportsRequest) -> Result<ReportQuery> {
        Ok(ReportQuery {
            standup_id: request.standup_id,
            user_id: request.user_id.map(|id| id.to_string()),
            after: Self::date_boundary(request.after.as_deref())?,
            before: Self::date_boundary(request.before.as_deref())?,
            question_ids: request.question_ids.unwrap_or_default(),
            limit: request.limit.unwrap_or(self.reports_limit),
        })
    }

    /// Blank dates are treated as absent
    fn date_boundary(date: Option<&str>) -> Result<Option<i64>> {
        match date.map(str::trim) {
            None | Some("") => Ok(None),
            Some(date) => local_midnight_timestamp(date).map(Some),
        }
    }

    /// Handle the fetch_standups tool operation.
    ///
    /// # Returns
    ///
    /// * `Result<CallToolResult, McpError>` - The rendered standups or the mapped failure
    pub async fn handle_fetch_standups(
        &self,
        _request: FetchStandupsRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Fetching standups");

        self.fetch_standups()
            .await
            .map(create_success_response)
            .map_err(|e| McpErrorHandler::handle_error(e, "fetch standups"))
    }

    /// Handle the fetch_reports tool operation.
    ///
    /// # Returns
    ///
    /// * `Result<CallToolResult, McpError>` - The rendered reports or the mapped failure
    pub async fn handle_fetch_reports(
        &self,
        request: FetchReportsRequest,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Fetching reports with {:?}", request);

        self.fetch_reports(request)
            .await
            .map(create_success_response)
            .map_err(|e| McpErrorHandler::handle_error(e, "fetch reports"))
    }
}
