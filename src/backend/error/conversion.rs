/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses so handlers
 * can return them directly.
 *
 * # Response Format
 *
 * Error responses are JSON:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Rate-limit responses additionally carry the remaining wait so clients
 * can schedule a retry:
 * ```json
 * {
 *   "error": "please wait 42 seconds before sending another letter",
 *   "status": 429,
 *   "retryAfterSeconds": 42
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Storage errors are logged with their internal detail here, at the
    /// boundary; the response body only ever carries the opaque message.
    fn into_response(self) -> Response {
        match &self {
            ApiError::Persistence(err) => {
                tracing::error!("storage error: {err:?}");
            }
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
            }
            _ => {}
        }

        let status = self.status_code();
        let mut body = serde_json::json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        });

        if let ApiError::RateLimited {
            retry_after_seconds,
        } = &self
        {
            body["retryAfterSeconds"] = serde_json::json!(retry_after_seconds);
        }

        (status, Json(body)).into_response()
    }
}
