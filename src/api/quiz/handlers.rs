use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::validation::{
    normalize_optional, parse_optional_i64, parse_optional_u64, validate_answer_count,
};
use crate::catalog::models::{Answer, Question};
use crate::catalog::types::{Category, Difficulty};
use crate::core::state::AppState;
use crate::schemas::quiz::{
    AnswerPayload, QuestionsQuery, ResultResponse, SubmitRequest, TopicsQuery,
};
use crate::services::scoring;
use crate::services::selection::{self, SelectionFilters};

pub(super) async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<QuestionsQuery>, QueryRejection>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let Query(query) = query?;
    let count = parse_optional_i64("count", query.count)?;
    let seed = parse_optional_u64("seed", query.seed)?;

    let Some(filters) = build_filters(query.category, query.topic, query.difficulty, count) else {
        return Ok(Json(Vec::new()));
    };

    let selected = match seed {
        Some(seed) => selection::select(state.bank(), &filters, &mut StdRng::seed_from_u64(seed)),
        None => selection::select(state.bank(), &filters, &mut rand::thread_rng()),
    };
    let questions = selected.into_iter().cloned().collect::<Vec<_>>();

    metrics::counter!("quiz_questions_served_total").increment(questions.len() as u64);
    Ok(Json(questions))
}

pub(super) async fn list_category_questions(
    Path(category): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let mut questions = state
        .bank()
        .questions_in_category_ignore_case(&category)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    if questions.is_empty() {
        return Err(ApiError::NotFound("No questions found for this category".to_string()));
    }

    selection::shuffle(&mut questions, &mut rand::thread_rng());

    metrics::counter!("quiz_questions_served_total").increment(questions.len() as u64);
    Ok(Json(questions))
}

pub(super) async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.bank().list_categories())
}

pub(super) async fn list_topics(
    State(state): State<AppState>,
    query: Result<Query<TopicsQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(query) = query?;

    let topics = match normalize_optional(query.category) {
        None => state.bank().list_topics(None),
        Some(raw) => match Category::parse(&raw) {
            Some(category) => state.bank().list_topics(Some(category)),
            None => {
                tracing::debug!(category = %raw, "Unknown category in topics query");
                Vec::new()
            }
        },
    };

    Ok(Json(topics))
}

pub(super) async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Json(payload) = payload?;
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    validate_answer_count(payload.answers.len(), state.settings().quiz().max_answers)?;

    let answers = payload.answers.iter().map(to_answer).collect::<Vec<_>>();
    let report = scoring::score(state.bank(), &answers, &payload.question_ids);

    tracing::debug!(
        score = report.score,
        total_questions = report.total_questions,
        total_time = report.total_time,
        "Scored submission"
    );
    metrics::counter!("quiz_submissions_total").increment(1);

    Ok(Json(report.into()))
}

/// Returns `None` when an enumerated filter names a value outside the known set;
/// such a query matches nothing.
fn build_filters(
    category: Option<String>,
    topic: Option<String>,
    difficulty: Option<String>,
    count: Option<i64>,
) -> Option<SelectionFilters> {
    let category = match normalize_optional(category) {
        Some(raw) => match Category::parse(&raw) {
            Some(category) => Some(category),
            None => {
                tracing::debug!(category = %raw, "Unknown category filter");
                return None;
            }
        },
        None => None,
    };
    let difficulty = match normalize_optional(difficulty) {
        Some(raw) => match Difficulty::parse(&raw) {
            Some(difficulty) => Some(difficulty),
            None => {
                tracing::debug!(difficulty = %raw, "Unknown difficulty filter");
                return None;
            }
        },
        None => None,
    };

    Some(SelectionFilters {
        category,
        topic: normalize_optional(topic),
        difficulty,
        count,
    })
}

/// Expects a payload that already passed `Validate`, so `time_spent` is non-negative.
fn to_answer(payload: &AnswerPayload) -> Answer {
    Answer {
        question_id: payload.question_id,
        selected_index: payload.selected_index,
        time_spent: payload.time_spent.unsigned_abs(),
    }
}
