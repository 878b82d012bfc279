//! # Publisher Client
//!
//! Wraps a `reqwest::Client` pointed at the proxy endpoint. One POST
//! per publish action: validation happens before the request is built,
//! so an invalid menu never reaches the network.

use std::time::Duration;

use menu_core::MenuState;

use crate::content::render_menu_content;
use crate::error::PublishError;
use crate::payload::{build_payload, UpdateMenuRequest};

/// Configuration for the publisher client.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Base URL of the proxy (e.g. `http://localhost:8080`).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl PublisherConfig {
    /// Configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout_secs: 30 }
    }
}

/// HTTP client for the proxy's menu write endpoint.
#[derive(Debug)]
pub struct Publisher {
    client: reqwest::Client,
    base_url: String,
}

impl Publisher {
    /// Build a publisher from configuration.
    pub fn new(config: PublisherConfig) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(PublishError::ClientBuild)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Validate the menu, build the payload, and submit it.
    ///
    /// Single attempt: any non-success response is returned as
    /// [`PublishError::Rejected`] with the best message the response
    /// body offers. On success the decoded response body is returned.
    pub async fn publish(&self, state: &MenuState) -> Result<serde_json::Value, PublishError> {
        let payload = build_payload(state)?;
        let body = UpdateMenuRequest {
            menu_content: render_menu_content(&payload),
            date: payload.date.clone(),
            language: payload.language,
        };

        let endpoint = format!("{}/api/update-menu", self.base_url);
        tracing::info!(
            date = %body.date,
            first_courses = payload.first_courses.len(),
            second_courses = payload.second_courses.len(),
            language = %payload.language,
            "publishing menu"
        );

        let response = self
            .client
            .post(&endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|source| PublishError::Http { endpoint: endpoint.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(value) => value
                    .get("error")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| "Error desconocido al actualizar el menú".to_string()),
                Err(_) => format!("Error HTTP {}", status.as_u16()),
            };
            tracing::error!(status = status.as_u16(), message = %message, "publish rejected");
            return Err(PublishError::Rejected { status: status.as_u16(), message });
        }

        response
            .json()
            .await
            .map_err(|source| PublishError::Http { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_thirty_second_timeout() {
        let config = PublisherConfig::new("http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_stripped_from_the_base_url() {
        let publisher = Publisher::new(PublisherConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(publisher.base_url, "http://localhost:8080");
    }
}
