//! # Proxy Configuration
//!
//! Read once from the environment at startup. The two CMS values stay
//! optional here; the write handler enforces the strict policy (reject
//! before any outbound call) so tests can exercise both configured and
//! unconfigured states.

/// Environment-derived proxy configuration.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Base URL of the WordPress site (`WORDPRESS_URL`).
    pub wordpress_url: Option<String>,
    /// Write credential forwarded as `X-API-Key` (`WORDPRESS_API_KEY`).
    pub api_key: Option<String>,
    /// Listen port (`MENU_PROXY_PORT`, default 8080).
    pub port: u16,
}

impl ProxyConfig {
    /// Read configuration from the process environment. Empty values
    /// count as absent.
    pub fn from_env() -> Self {
        Self {
            wordpress_url: non_empty_var("WORDPRESS_URL"),
            api_key: non_empty_var("WORDPRESS_API_KEY"),
            port: std::env::var("MENU_PROXY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Configuration for tests, fully specified.
    #[cfg(test)]
    pub fn for_target(wordpress_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            wordpress_url: Some(wordpress_url.into()),
            api_key: Some(api_key.into()),
            port: 8080,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_cms_target() {
        let config = ProxyConfig::default();
        assert!(config.wordpress_url.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn for_target_fills_both_values() {
        let config = ProxyConfig::for_target("https://example.com", "secret");
        assert_eq!(config.wordpress_url.as_deref(), Some("https://example.com"));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }
}
