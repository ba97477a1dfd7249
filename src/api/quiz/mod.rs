mod handlers;

use axum::{routing::get, routing::post, Router};

use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(handlers::list_questions))
        .route("/questions/:category", get(handlers::list_category_questions))
        .route("/categories", get(handlers::list_categories))
        .route("/topics", get(handlers::list_topics))
        .route("/submit", post(handlers::submit))
}
