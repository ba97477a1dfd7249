use std::path::Path;

use crate::catalog::models::Question;
use crate::catalog::CatalogError;
use crate::repositories::questions::QuestionBank;

pub(crate) async fn load_from_path(path: impl AsRef<Path>) -> Result<QuestionBank, CatalogError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
    parse_catalog(&raw)
}

pub(crate) fn parse_catalog(raw: &str) -> Result<QuestionBank, CatalogError> {
    let questions: Vec<Question> = serde_json::from_str(raw)?;
    QuestionBank::from_questions(questions)
}
