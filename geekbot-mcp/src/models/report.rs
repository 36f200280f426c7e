use super::user::ReporterResponse;
use super::{decode, identity_by_id, Reporter};
use crate::{GeekbotError, Result};
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format used for [`Report::created_at`]
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One member's answers to a standup occurrence
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Geekbot report id
    pub id: i64,
    /// Standup the report belongs to
    pub standup_id: i64,
    /// Submission time in local time, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
    /// Member who answered (`member` upstream)
    pub reporter: Reporter,
    /// Question/answer transcript, see [`content_from_json`]
    pub content: String,
}

identity_by_id!(Report);

#[derive(Deserialize)]
struct AnswerResponse {
    question: String,
    answer: String,
}

#[derive(Deserialize)]
struct ReportResponse {
    id: i64,
    standup_id: i64,
    timestamp: i64,
    member: ReporterResponse,
    questions: Vec<AnswerResponse>,
}

/// Format a Unix timestamp in the process's local timezone
pub fn format_timestamp(timestamp: i64) -> Result<String> {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format(CREATED_AT_FORMAT).to_string())
        .ok_or_else(|| {
            GeekbotError::malformed("report", format!("timestamp {timestamp} is out of range"))
        })
}

fn transcript(answers: &[AnswerResponse]) -> String {
    answers
        .iter()
        .map(|a| format!("q: {}\na: {}\n", a.question, a.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the report transcript from the upstream `questions` array.
///
/// Each answered question becomes `"q: <question>\na: <answer>\n"`; blocks are
/// joined by a newline, which leaves a blank line between them.
pub fn content_from_json(value: &Value) -> Result<String> {
    let answers: Vec<AnswerResponse> = decode("report", value)?;
    Ok(transcript(&answers))
}

/// Convert an upstream report object
pub fn report_from_json(value: &Value) -> Result<Report> {
    let raw: ReportResponse = decode("report", value)?;

    Ok(Report {
        id: raw.id,
        standup_id: raw.standup_id,
        created_at: format_timestamp(raw.timestamp)?,
        reporter: raw.member.into(),
        content: transcript(&raw.questions),
    })
}
