use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::scoring::{ScoreReport, TopicStat};

/// Raw query strings; numeric parsing happens in the handler so a bad value can be
/// reported by field name.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) topic: Option<String>,
    #[serde(default)]
    pub(crate) difficulty: Option<String>,
    #[serde(default)]
    pub(crate) count: Option<String>,
    #[serde(default)]
    pub(crate) seed: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TopicsQuery {
    #[serde(default)]
    pub(crate) category: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnswerPayload {
    pub(crate) question_id: i64,
    pub(crate) selected_index: i64,
    #[validate(range(min = 0, message = "timeSpent must be non-negative"))]
    pub(crate) time_spent: i64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitRequest {
    #[validate(nested)]
    pub(crate) answers: Vec<AnswerPayload>,
    pub(crate) question_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TopicStatResponse {
    pub(crate) topic: String,
    pub(crate) attempted: usize,
    pub(crate) correct: usize,
    pub(crate) accuracy: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultResponse {
    pub(crate) score: usize,
    pub(crate) total_questions: usize,
    pub(crate) accuracy: f64,
    pub(crate) total_time: u64,
    pub(crate) weak_areas: Vec<TopicStatResponse>,
}

impl From<TopicStat> for TopicStatResponse {
    fn from(stat: TopicStat) -> Self {
        Self {
            topic: stat.topic,
            attempted: stat.attempted,
            correct: stat.correct,
            accuracy: stat.accuracy,
        }
    }
}

impl From<ScoreReport> for ResultResponse {
    fn from(report: ScoreReport) -> Self {
        Self {
            score: report.score,
            total_questions: report.total_questions,
            accuracy: report.accuracy,
            total_time: report.total_time,
            weak_areas: report.weak_areas.into_iter().map(Into::into).collect(),
        }
    }
}
