//! Standup, poll and report data model
//!
//! Every entity is built transiently from the JSON returned by the Geekbot API,
//! handed to the renderer and dropped. Each `*_from_json` adapter decodes a
//! private wire struct with serde and then maps it onto the public entity, so
//! a missing or mistyped field surfaces as
//! [`GeekbotError::MalformedResponse`](crate::GeekbotError::MalformedResponse)
//! carrying serde's message (which names the field).
//!
//! Entities compare and hash by `id` only.

mod poll;
mod question;
mod report;
mod standup;
mod user;

pub use poll::{poll_from_json, Poll};
pub use question::{poll_question_from_json, question_from_json, Question};
pub use report::{content_from_json, format_timestamp, report_from_json, Report};
pub use standup::{standup_from_json, Standup};
pub use user::{reporter_from_json, user_from_json, Reporter, User};

use crate::{GeekbotError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a wire struct, tagging failures with the entity name
pub(crate) fn decode<T: DeserializeOwned>(entity: &'static str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| GeekbotError::malformed(entity, e.to_string()))
}

/// Geekbot sends user ids as strings but older payloads carry numbers
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Text(String),
        Number(i64),
    }

    Ok(match WireId::deserialize(deserializer)? {
        WireId::Text(text) => text,
        WireId::Number(number) => number.to_string(),
    })
}

/// Implement id-only equality and hashing for an entity
macro_rules! identity_by_id {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl PartialEq for $entity {
                fn eq(&self, other: &Self) -> bool {
                    self.id == other.id
                }
            }

            impl Eq for $entity {}

            impl std::hash::Hash for $entity {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    self.id.hash(state);
                }
            }
        )+
    };
}

pub(crate) use identity_by_id;
