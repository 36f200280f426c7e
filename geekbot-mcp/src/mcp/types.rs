//! Request types for MCP tool arguments

use serde::Deserialize;

/// Request for `fetch_standups`; the tool takes no arguments
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct FetchStandupsRequest {}

/// A member id, accepted either as a number or as a Geekbot user id string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum UserIdArg {
    /// Numeric id
    Number(i64),
    /// String id such as `U0123ABC`
    Text(String),
}

impl std::fmt::Display for UserIdArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserIdArg::Number(number) => write!(f, "{number}"),
            UserIdArg::Text(text) => f.write_str(text),
        }
    }
}

/// Request for `fetch_reports`
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct FetchReportsRequest {
    /// The standup id to fetch reports for
    #[serde(default)]
    pub standup_id: Option<i64>,
    /// The member id to fetch reports for
    #[serde(default)]
    pub user_id: Option<UserIdArg>,
    /// Only reports submitted after this date, in YYYY-MM-DD format
    #[serde(default)]
    pub after: Option<String>,
    /// Only reports submitted before this date, in YYYY-MM-DD format
    #[serde(default)]
    pub before: Option<String>,
    /// Only answers to these question ids
    #[serde(default)]
    pub question_ids: Option<Vec<i64>>,
    /// Maximum number of reports to return
    #[serde(default)]
    pub limit: Option<u32>,
}
