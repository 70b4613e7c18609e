use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Parses a query value as an integer, treating anything unparsable as `0`
/// so the service applies its default.
pub fn lenient_i64(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_i64_falls_back_to_zero() {
        assert_eq!(lenient_i64(Some("3")), 3);
        assert_eq!(lenient_i64(Some(" 12 ")), 12);
        assert_eq!(lenient_i64(Some("-2")), -2);
        assert_eq!(lenient_i64(Some("abc")), 0);
        assert_eq!(lenient_i64(Some("")), 0);
        assert_eq!(lenient_i64(None), 0);
    }
}
