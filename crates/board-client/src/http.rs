//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (422 validation errors with typed body
//! parsing, non-success → [`ApiError::Api`]) so individual tag modules stay
//! focused on request construction and response deserialization.

use crate::error::ApiError;
use crate::models::HttpValidationError;

/// Check an HTTP response for the declared error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **422 Unprocessable Entity** → [`ApiError::Validation`] with the
///   structured detail list the service declares for that status.
/// - **Any other non-success status** → [`ApiError::Api`] with status code
///   and response body.
pub(crate) async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
        let detail: HttpValidationError = resp.json().await?;
        tracing::debug!(%detail, "request rejected by validation");
        return Err(ApiError::Validation(detail));
    }
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), url = %resp.url(), "request failed");
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn validation_error_is_typed() {
        let body = r#"{
            "detail": [
                {"loc": ["path", "team_id"], "msg": "value is not a valid integer", "type": "int_parsing"}
            ]
        }"#;
        let err = check_response(mock_response(422, body)).await.unwrap_err();
        match err {
            ApiError::Validation(detail) => {
                let issues = detail.detail.expect("detail list present");
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].msg, "value is not a valid integer");
                assert_eq!(issues[0].error_type, "int_parsing");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn validation_error_with_empty_detail() {
        let err = check_response(mock_response(422, "{}")).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn other_non_success_becomes_api_error() {
        let err = check_response(mock_response(500, "boom")).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
