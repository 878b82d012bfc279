//! # Proxy Error Type
//!
//! Every failure crossing the process boundary becomes a JSON body of
//! the fixed shape `{ "error": message }`. Remote rejections relay the
//! remote status code; configuration problems and local exceptions are
//! 500s. Internal details are logged server-side and never leaked.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Application-level error mapping to the proxy's wire contract.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment value is missing (strict policy: no
    /// outbound call is attempted).
    #[error("configuration error: {0}")]
    Config(String),

    /// The CMS answered with a non-success status; the status code and
    /// extracted message are relayed as-is.
    #[error("upstream error {status}: {message}")]
    Upstream {
        /// Remote HTTP status to relay.
        status: u16,
        /// Best-effort message extracted from the remote body.
        message: String,
    },

    /// Local failure (network, malformed request, unexpected state).
    /// The message is logged but the client sees a generic body.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Config(message) => {
                tracing::error!(error = %self, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error de configuración: {message}"),
                )
            }
            AppError::Upstream { status, message } => {
                tracing::error!(status, message = %message, "WordPress rejected the update");
                (
                    StatusCode::from_u16(*status)
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    message.clone(),
                )
            }
            AppError::Internal(_) => {
                tracing::error!(error = %self, "internal proxy error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn config_error_is_a_500_naming_the_variable() {
        let (status, body) =
            response_parts(AppError::Config("WORDPRESS_URL no está definido".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Error de configuración: WORDPRESS_URL no está definido"
        );
    }

    #[tokio::test]
    async fn upstream_error_relays_the_remote_status() {
        let (status, body) = response_parts(AppError::Upstream {
            status: 403,
            message: "Clave no válida".into(),
        })
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Clave no válida");
    }

    #[tokio::test]
    async fn unmappable_upstream_status_falls_back_to_500() {
        let (status, _) =
            response_parts(AppError::Upstream { status: 0, message: "x".into() }).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let (status, body) =
            response_parts(AppError::Internal("connection pool exhausted".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Error interno del servidor");
        assert!(!body["error"].as_str().unwrap().contains("pool"));
    }
}
