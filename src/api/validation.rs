use crate::api::errors::ApiError;

/// Query values that are blank after trimming count as absent.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.map(|entry| entry.trim().to_string()).filter(|entry| !entry.is_empty())
}

pub(crate) fn parse_optional_i64(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<i64>, ApiError> {
    normalize_optional(value)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| ApiError::BadRequest(format!("{field} must be an integer, got '{raw}'")))
        })
        .transpose()
}

pub(crate) fn parse_optional_u64(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<u64>, ApiError> {
    normalize_optional(value)
        .map(|raw| {
            raw.parse::<u64>().map_err(|_| {
                ApiError::BadRequest(format!("{field} must be a non-negative integer, got '{raw}'"))
            })
        })
        .transpose()
}

pub(crate) fn validate_answer_count(count: usize, max_answers: usize) -> Result<(), ApiError> {
    if count <= max_answers {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "answers must contain at most {max_answers} items, got {count}"
        )))
    }
}
