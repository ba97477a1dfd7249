use serde::{Deserialize, Serialize};

use crate::catalog::types::{Category, Difficulty};

/// One catalog entry. Field names on the wire follow the shipped data file; the
/// descriptive spellings are accepted as aliases when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Question {
    pub(crate) id: i64,
    pub(crate) category: Category,
    pub(crate) topic: String,
    pub(crate) difficulty: Difficulty,
    #[serde(rename = "question", alias = "prompt")]
    pub(crate) prompt: String,
    pub(crate) choices: Vec<String>,
    #[serde(rename = "answerIndex", alias = "correctIndex")]
    pub(crate) correct_index: usize,
    pub(crate) explanation: String,
    #[serde(alias = "timeLimitSeconds")]
    pub(crate) time_limit_seconds: u32,
}

impl Question {
    /// Any index that is not exactly the correct one, including negative or
    /// out-of-range values from a malformed client, counts as wrong.
    pub(crate) fn is_correct(&self, selected_index: i64) -> bool {
        usize::try_from(selected_index).map_or(false, |index| index == self.correct_index)
    }
}

/// A submitted answer after transport validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Answer {
    pub(crate) question_id: i64,
    pub(crate) selected_index: i64,
    pub(crate) time_spent: u64,
}
