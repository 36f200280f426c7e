use super::{decode, identity_by_id, string_or_number};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Geekbot workspace member taking part in a standup or poll
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Geekbot user id
    pub id: String,
    /// Display name (`realname` upstream)
    pub name: String,
    /// Chat handle
    pub username: String,
    /// Email address
    pub email: String,
    /// Workspace role, e.g. `member` or `admin`
    pub role: String,
}

/// The member who submitted a report
#[derive(Debug, Clone, Serialize)]
pub struct Reporter {
    /// Geekbot user id
    pub id: String,
    /// Display name (`realname` upstream)
    pub name: String,
    /// Chat handle
    pub username: String,
}

identity_by_id!(User, Reporter);

#[derive(Deserialize)]
pub(super) struct UserResponse {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    realname: String,
    username: String,
    email: String,
    role: String,
}

#[derive(Deserialize)]
pub(super) struct ReporterResponse {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    realname: String,
    username: String,
}

impl From<UserResponse> for User {
    fn from(raw: UserResponse) -> Self {
        Self {
            id: raw.id,
            name: raw.realname,
            username: raw.username,
            email: raw.email,
            role: raw.role,
        }
    }
}

impl From<ReporterResponse> for Reporter {
    fn from(raw: ReporterResponse) -> Self {
        Self {
            id: raw.id,
            name: raw.realname,
            username: raw.username,
        }
    }
}

/// Convert an upstream user object
pub fn user_from_json(value: &Value) -> Result<User> {
    decode::<UserResponse>("user", value).map(User::from)
}

/// Convert an upstream report `member` object
pub fn reporter_from_json(value: &Value) -> Result<Reporter> {
    decode::<ReporterResponse>("reporter", value).map(Reporter::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeekbotError;
    use serde_json::json;
    use std::collections::HashSet;

    fn user_json(id: &str, realname: &str) -> Value {
        json!({
            "id": id,
            "realname": realname,
            "username": "jdoe",
            "email": "jdoe@example.com",
            "role": "member",
        })
    }

    #[test]
    fn test_user_from_json_renames_realname() {
        let user = user_from_json(&user_json("U1", "Jane Doe")).unwrap();
        assert_eq!(user.id, "U1");
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.username, "jdoe");
        assert_eq!(user.email, "jdoe@example.com");
        assert_eq!(user.role, "member");
    }

    #[test]
    fn test_user_missing_field() {
        let mut raw = user_json("U1", "Jane Doe");
        raw.as_object_mut().unwrap().remove("email");

        let err = user_from_json(&raw).unwrap_err();
        assert!(matches!(err, GeekbotError::MalformedResponse { entity: "user", .. }));
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_identity_is_id_only() {
        let a = user_from_json(&user_json("U1", "Jane Doe")).unwrap();
        let b = user_from_json(&user_json("U1", "Jane D.")).unwrap();
        let c = user_from_json(&user_json("U2", "Jane Doe")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<User> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_reporter_from_json() {
        let reporter = reporter_from_json(&json!({
            "id": 77,
            "realname": "Sam Lee",
            "username": "sam",
            "email": "ignored@example.com",
        }))
        .unwrap();

        assert_eq!(reporter.id, "77");
        assert_eq!(reporter.name, "Sam Lee");
        assert_eq!(reporter.username, "sam");
    }

    #[test]
    fn test_adapter_does_not_mutate_input() {
        let raw = user_json("U9", "Ada");
        let before = raw.clone();
        let first = user_from_json(&raw).unwrap();
        let second = user_from_json(&raw).unwrap();

        assert_eq!(raw, before);
        assert_eq!(first.name, second.name);
    }
}
