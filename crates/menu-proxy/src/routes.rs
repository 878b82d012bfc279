//! # Proxy Routes
//!
//! Two routes: an unauthenticated health probe and the menu write
//! relay. The relay validates the request shape, checks configuration
//! strictly, forwards the body unchanged to the CMS write API with the
//! `X-API-Key` header, and normalizes whatever comes back.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use menu_publish::UpdateMenuRequest;

use crate::config::ProxyConfig;
use crate::error::AppError;

/// Shared request context: immutable configuration plus the pooled
/// HTTP client.
#[derive(Debug, Clone)]
pub struct AppState {
    config: ProxyConfig,
    client: reqwest::Client,
}

impl AppState {
    /// Build the state for a configuration.
    pub fn new(config: ProxyConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }
}

/// Build the proxy router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/update-menu", post(update_menu))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Relay a menu update to the CMS.
async fn update_menu(
    State(state): State<AppState>,
    payload: Result<Json<UpdateMenuRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        AppError::Internal(format!("invalid request body: {rejection}"))
    })?;

    let base = state
        .config
        .wordpress_url
        .as_deref()
        .ok_or_else(|| AppError::Config("WORDPRESS_URL no está definido".to_string()))?;
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or_else(|| AppError::Config("WORDPRESS_API_KEY no está definido".to_string()))?;

    let endpoint = format!(
        "{}/wp-json/menu-diario/v1/actualizar",
        base.trim_end_matches('/')
    );
    tracing::info!(endpoint = %endpoint, date = %body.date, "forwarding menu update");

    let response = state
        .client
        .post(&endpoint)
        .header("X-API-Key", api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::Internal(format!("request to WordPress failed: {e}")))?;

    let status = response.status();
    // Read as text first so non-JSON error bodies survive intact.
    let text = response
        .text()
        .await
        .map_err(|e| AppError::Internal(format!("reading WordPress response failed: {e}")))?;

    if !status.is_success() {
        let message = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| "Error desconocido desde WordPress".to_string()),
            Err(_) => {
                if text.is_empty() {
                    format!("HTTP {}", status.as_u16())
                } else {
                    text
                }
            }
        };
        return Err(AppError::Upstream { status: status.as_u16(), message });
    }

    // A success with a non-JSON body still counts as a success.
    let data = serde_json::from_str(&text).unwrap_or_else(|_| {
        tracing::warn!(body = %text, "WordPress success response was not JSON");
        serde_json::json!({
            "success": true,
            "message": "Menú actualizado correctamente"
        })
    });

    Ok(Json(data))
}
