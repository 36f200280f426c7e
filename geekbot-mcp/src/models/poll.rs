use super::question::QuestionResponse;
use super::user::UserResponse;
use super::{decode, identity_by_id, Question, User};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A one-off question set, the non-recurring sibling of [`Standup`](super::Standup)
#[derive(Debug, Clone, Serialize)]
pub struct Poll {
    /// Geekbot poll id
    pub id: i64,
    /// Poll name
    pub name: String,
    /// Scheduled time of day
    pub time: String,
    /// Timezone the schedule is expressed in
    pub timezone: String,
    /// Questions in upstream order
    pub questions: Vec<Question>,
    /// Participants (`users` upstream)
    pub participants: Vec<User>,
    /// Member who created the poll
    pub creator: User,
}

identity_by_id!(Poll);

#[derive(Deserialize)]
struct PollResponse {
    id: i64,
    name: String,
    time: String,
    timezone: String,
    questions: Vec<QuestionResponse>,
    users: Vec<UserResponse>,
    creator: UserResponse,
}

/// Convert an upstream poll object
pub fn poll_from_json(value: &Value) -> Result<Poll> {
    let raw: PollResponse = decode("poll", value)?;

    Ok(Poll {
        id: raw.id,
        name: raw.name,
        time: raw.time,
        timezone: raw.timezone,
        questions: raw
            .questions
            .into_iter()
            .map(QuestionResponse::into_poll_question)
            .collect(),
        participants: raw.users.into_iter().map(User::from).collect(),
        creator: raw.creator.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "realname": name,
            "username": name.to_lowercase(),
            "email": format!("{}@example.com", name.to_lowercase()),
            "role": "member"
        })
    }

    #[test]
    fn test_poll_from_json() {
        let poll = poll_from_json(&json!({
            "id": 9,
            "name": "Team lunch",
            "time": "12:00:00",
            "timezone": "UTC",
            "questions": [
                {"text": "Where?", "answer_type": "multiple_choice", "answer_choices": ["A", "B"]}
            ],
            "users": [member("U1", "Ann"), member("U2", "Bob")],
            "creator": member("U1", "Ann")
        }))
        .unwrap();

        assert_eq!(poll.id, 9);
        assert_eq!(poll.creator.name, "Ann");
        assert_eq!(poll.participants.len(), 2);
        assert_eq!(poll.questions[0].text, "Where?");
        assert!(!poll.questions[0].is_random);
    }

    #[test]
    fn test_poll_missing_creator() {
        let err = poll_from_json(&json!({
            "id": 9,
            "name": "Team lunch",
            "time": "12:00:00",
            "timezone": "UTC",
            "questions": [],
            "users": []
        }))
        .unwrap_err();

        assert!(err.to_string().contains("creator"));
    }
}
