use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use regex::Regex;

use super::types::ErrorResponse;

#[derive(Debug)]
pub enum ProductError {
    InvalidId,
    InvalidPayload,
    NotFound,
    Database(sqlx::Error),
}

impl ProductError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId | Self::InvalidPayload => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidId => "Invalid product ID".to_string(),
            Self::InvalidPayload => "Invalid request payload".to_string(),
            Self::NotFound => "Product not found".to_string(),
            Self::Database(err) => err.to_string(),
        }
    }
}

impl From<sqlx::Error> for ProductError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

impl IntoResponse for ProductError {
    /// Maps validation and storage failures into `{"error": ...}` JSON bodies.
    /// Storage errors carry the raw driver message.
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message(),
        });
        (self.status(), body).into_response()
    }
}

/// Parses a `{id}` path segment. Only plain digits are accepted, so `+1`, `-1`
/// and `1e3` are rejected. Ids beyond the `serial` range are valid input; they
/// simply match no row.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ProductError> {
    let digits_only = Regex::new(r"^[0-9]+$").map_or(false, |re| re.is_match(raw));
    if !digits_only {
        return Err(ProductError::InvalidId);
    }

    raw.parse::<i64>().map_err(|_| ProductError::InvalidId)
}
