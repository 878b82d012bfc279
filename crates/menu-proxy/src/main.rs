//! Menu proxy server — relays menu updates to the WordPress CMS.
//!
//! Holds the CMS write credential server-side so the editing surface
//! never sees it. Configuration is strict: when `WORDPRESS_URL` or
//! `WORDPRESS_API_KEY` is absent the write endpoint answers a
//! configuration error immediately, without attempting the remote
//! call.
//!
//! Each request is stateless and independent; the only shared values
//! are the immutable configuration and the HTTP client's connection
//! pool.

mod config;
mod error;
mod routes;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::ProxyConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env();
    if config.wordpress_url.is_none() {
        tracing::warn!("WORDPRESS_URL is not set; menu updates will be rejected");
    }
    if config.api_key.is_none() {
        tracing::warn!("WORDPRESS_API_KEY is not set; menu updates will be rejected");
    }

    let port = config.port;
    let state = routes::AppState::new(config);
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("menu-proxy listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
