use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use validator::ValidationErrors;

/// Renders field errors as `400 {"error": ..., "errors": {field: [...]}}`.
pub fn into_response(errors: ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "Failed to validate payload",
            "errors": errors,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::ValidationError;

    #[tokio::test]
    async fn lists_errors_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("short_name", ValidationError::new("INVALID_SHORT_NAME"));

        let response = into_response(errors);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Failed to validate payload");
        assert_eq!(body["errors"]["short_name"][0]["code"], "INVALID_SHORT_NAME");
    }
}
