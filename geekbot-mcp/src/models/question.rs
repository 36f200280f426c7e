use super::decode;
use crate::{GeekbotError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer type whose choices are rendered alongside the question
pub const MULTIPLE_CHOICE: &str = "multiple_choice";

const RANDOM_PREFIX: &str = "random choice from ";

/// A question asked by a standup or poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Question text; for random questions, a summary of the candidates
    pub text: String,
    /// Upstream answer type, e.g. `text`, `numeric`, `multiple_choice`
    pub answer_type: String,
    /// Choices offered for multiple choice answers
    pub answer_choices: Vec<String>,
    /// Whether Geekbot picks the text at random from `random_texts`
    pub is_random: bool,
}

impl Question {
    /// True when the answer is picked from `answer_choices`
    pub fn is_multiple_choice(&self) -> bool {
        self.answer_type == MULTIPLE_CHOICE
    }
}

#[derive(Deserialize)]
pub(super) struct QuestionResponse {
    text: String,
    answer_type: String,
    answer_choices: Vec<String>,
    #[serde(default)]
    is_random: bool,
    #[serde(default)]
    random_texts: Option<Vec<String>>,
}

impl QuestionResponse {
    pub(super) fn into_standup_question(self) -> Result<Question> {
        let text = if self.is_random {
            let candidates = self.random_texts.ok_or_else(|| {
                GeekbotError::malformed("question", "missing field `random_texts`")
            })?;
            format!("{RANDOM_PREFIX}{}", candidates.join(", "))
        } else {
            self.text
        };

        Ok(Question {
            text,
            answer_type: self.answer_type,
            answer_choices: self.answer_choices,
            is_random: self.is_random,
        })
    }

    pub(super) fn into_poll_question(self) -> Question {
        Question {
            text: self.text,
            answer_type: self.answer_type,
            answer_choices: self.answer_choices,
            is_random: false,
        }
    }
}

/// Convert an upstream standup question
pub fn question_from_json(value: &Value) -> Result<Question> {
    decode::<QuestionResponse>("question", value)?.into_standup_question()
}

/// Convert an upstream poll question; polls never use random texts
pub fn poll_question_from_json(value: &Value) -> Result<Question> {
    decode::<QuestionResponse>("question", value).map(QuestionResponse::into_poll_question)
}
