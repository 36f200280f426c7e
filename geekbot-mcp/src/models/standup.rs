use super::question::QuestionResponse;
use super::user::UserResponse;
use super::{decode, identity_by_id, string_or_number, Question, User};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recurring check-in posted to a chat channel
#[derive(Debug, Clone, Serialize)]
pub struct Standup {
    /// Geekbot standup id
    pub id: i64,
    /// Standup name
    pub name: String,
    /// Chat channel the standup reports to
    pub channel: String,
    /// Scheduled time of day, as sent upstream (`HH:MM:SS`)
    pub time: String,
    /// Timezone the schedule is expressed in
    pub timezone: String,
    /// Questions in upstream order
    pub questions: Vec<Question>,
    /// Participants (`users` upstream)
    pub participants: Vec<User>,
    /// Id of the standup owner (`master` upstream)
    pub owner_id: String,
}

identity_by_id!(Standup);

#[derive(Deserialize)]
struct StandupResponse {
    id: i64,
    name: String,
    channel: String,
    time: String,
    timezone: String,
    questions: Vec<QuestionResponse>,
    users: Vec<UserResponse>,
    #[serde(deserialize_with = "string_or_number")]
    master: String,
}

/// Convert an upstream standup object
pub fn standup_from_json(value: &Value) -> Result<Standup> {
    let raw: StandupResponse = decode("standup", value)?;

    let questions = raw
        .questions
        .into_iter()
        .map(QuestionResponse::into_standup_question)
        .collect::<Result<Vec<_>>>()?;

    Ok(Standup {
        id: raw.id,
        name: raw.name,
        channel: raw.channel,
        time: raw.time,
        timezone: raw.timezone,
        questions,
        participants: raw.users.into_iter().map(User::from).collect(),
        owner_id: raw.master,
    })
}
