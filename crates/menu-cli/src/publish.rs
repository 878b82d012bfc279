//! # Publish Command
//!
//! The single combined user action: render the document, then publish
//! the same state to the CMS through the proxy. A rendering failure
//! stops the flow before any network call; a failed publish leaves the
//! state untouched so the operator can retry unchanged.

use std::path::PathBuf;

use clap::Args;

use menu_core::{labels, MenuStore};
use menu_pdf::render_document;
use menu_publish::{Publisher, PublisherConfig};

/// Proxy base URL when neither the flag nor `MENU_PROXY_URL` is set.
const DEFAULT_PROXY_URL: &str = "http://localhost:8080";

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Proxy base URL; falls back to MENU_PROXY_URL, then localhost.
    #[arg(long)]
    pub proxy_url: Option<String>,

    /// Public site base URL for the "view on web" link; falls back to
    /// MENU_SITE_URL.
    #[arg(long)]
    pub site_url: Option<String>,

    /// Directory the rendered document is written into.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Publish without rendering the document first.
    #[arg(long)]
    pub skip_pdf: bool,
}

impl PublishArgs {
    fn resolved_proxy_url(&self) -> String {
        self.proxy_url
            .clone()
            .or_else(|| non_empty_var("MENU_PROXY_URL"))
            .unwrap_or_else(|| DEFAULT_PROXY_URL.to_string())
    }

    fn resolved_site_url(&self) -> Option<String> {
        self.site_url.clone().or_else(|| non_empty_var("MENU_SITE_URL"))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

pub async fn run_publish(args: &PublishArgs, store: &MenuStore) -> anyhow::Result<()> {
    let state = store.load_or_default()?;
    let lang = state.language;

    if !args.skip_pdf {
        let document = match render_document(&state) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(error = %e, "document rendering failed");
                anyhow::bail!("{}", labels::msg_pdf_failed(lang));
            }
        };
        let path = document.save_to(&args.out)?;
        println!("{}: {}", labels::msg_pdf_generated(lang), path.display());
    }

    let publisher = Publisher::new(PublisherConfig::new(args.resolved_proxy_url()))
        .map_err(|e| anyhow::anyhow!("{}", e.operator_message(lang)))?;

    match publisher.publish(&state).await {
        Ok(response) => {
            tracing::debug!(response = %response, "CMS response");
            println!("{}", labels::msg_menu_published(lang));
            if let Some(site) = args.resolved_site_url() {
                println!("{}: {}", labels::msg_view_on_web(lang), site.trim_end_matches('/'));
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "publish failed");
            anyhow::bail!("{}", e.operator_message(lang));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_url_flag_wins_over_the_default() {
        let args = PublishArgs {
            proxy_url: Some("http://proxy.local:9999".into()),
            site_url: None,
            out: PathBuf::from("."),
            skip_pdf: false,
        };
        assert_eq!(args.resolved_proxy_url(), "http://proxy.local:9999");
    }

    #[test]
    fn proxy_url_defaults_to_localhost() {
        let args = PublishArgs {
            proxy_url: None,
            site_url: None,
            out: PathBuf::from("."),
            skip_pdf: false,
        };
        // MENU_PROXY_URL is not set in the test environment.
        if std::env::var("MENU_PROXY_URL").is_err() {
            assert_eq!(args.resolved_proxy_url(), DEFAULT_PROXY_URL);
        }
    }

    #[test]
    fn site_url_is_optional() {
        let args = PublishArgs {
            proxy_url: None,
            site_url: None,
            out: PathBuf::from("."),
            skip_pdf: false,
        };
        if std::env::var("MENU_SITE_URL").is_err() {
            assert!(args.resolved_site_url().is_none());
        }
    }
}
