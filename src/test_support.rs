use std::sync::{Arc, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    Router,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::api;
use crate::catalog::models::Question;
use crate::catalog::types::{Category, Difficulty};
use crate::core::{config::Settings, state::AppState};
use crate::repositories::questions::QuestionBank;

pub(crate) struct TestContext {
    pub(crate) state: AppState,
    pub(crate) app: Router,
    _guard: OwnedMutexGuard<()>,
}

pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

pub(crate) fn set_test_env() {
    std::env::set_var("QUIZ_ENV", "test");
    std::env::remove_var("PROJECT_NAME");
    std::env::remove_var("API_PREFIX");
    std::env::remove_var("QUIZ_MAX_ANSWERS");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
}

pub(crate) async fn setup_test_context() -> TestContext {
    setup_test_context_with_env(&[]).await
}

/// Builds the router over [`sample_bank`] with the given environment overrides.
pub(crate) async fn setup_test_context_with_env(overrides: &[(&str, &str)]) -> TestContext {
    let guard = env_lock().await;
    set_test_env();
    for (key, value) in overrides {
        std::env::set_var(key, value);
    }

    let settings = Settings::load().expect("settings");
    let state = AppState::new(settings, sample_bank());
    let app = api::router::router(state.clone());

    TestContext { state, app, _guard: guard }
}

pub(crate) fn question(
    id: i64,
    category: Category,
    topic: &str,
    difficulty: Difficulty,
    correct_index: usize,
) -> Question {
    Question {
        id,
        category,
        topic: topic.to_string(),
        difficulty,
        prompt: format!("{topic} question #{id}"),
        choices: ["A", "B", "C", "D"].iter().map(|c| format!("{c}{id}")).collect(),
        correct_index,
        explanation: format!("Option {correct_index} is correct."),
        time_limit_seconds: 60,
    }
}

/// Twelve questions across all categories. Ids 1 and 2 are Quantitative/Percentages,
/// id 3 is Logical/Patterns, ids 8..=10 are the only Technical questions.
pub(crate) fn sample_questions() -> Vec<Question> {
    use Category::*;
    use Difficulty::*;

    vec![
        question(1, Quantitative, "Percentages", Easy, 1),
        question(2, Quantitative, "Percentages", Medium, 2),
        question(3, Logical, "Patterns", Easy, 0),
        question(4, Quantitative, "Ratios", Hard, 3),
        question(5, Logical, "Syllogisms", Medium, 1),
        question(6, Verbal, "Synonyms", Easy, 2),
        question(7, Verbal, "Antonyms", Medium, 0),
        question(8, Technical, "Data Structures", Easy, 1),
        question(9, Technical, "Algorithms", Medium, 2),
        question(10, Technical, "Databases", Hard, 3),
        question(11, Logical, "Patterns", Hard, 2),
        question(12, Quantitative, "Percentages", Hard, 0),
    ]
}

pub(crate) fn sample_bank() -> QuestionBank {
    QuestionBank::from_questions(sample_questions()).expect("sample bank")
}

pub(crate) fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method(Method::GET).uri(uri).body(Body::empty()).expect("request")
}

pub(crate) fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    let bytes = serde_json::to_vec(&body).expect("serialize body");
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(bytes))
        .expect("request body")
}

pub(crate) fn raw_json_request(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request body")
}

pub(crate) async fn read_json(response: axum::response::Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("response body");
    serde_json::from_slice(&body).unwrap_or_else(|err| {
        let body_text = String::from_utf8_lossy(&body);
        panic!("json parse: {err}; body: {body_text}");
    })
}
