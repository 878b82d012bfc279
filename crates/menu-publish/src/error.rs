//! # Publication Error Types
//!
//! Validation failures carry operator-facing messages in both menu
//! languages; transport and rejection errors keep the endpoint and
//! status for diagnostics.

use menu_core::{labels, Language};

/// Errors from building or submitting a menu publication.
///
/// There is no "invalid date" variant: `MenuDate` rejects invalid
/// dates at construction, so a state that reaches the publisher can
/// only be missing its date, never carrying a malformed one.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// No date has been selected for the menu.
    #[error("no date selected for the menu")]
    MissingDate,

    /// A course section has no non-empty names after filtering.
    #[error("a course section has no non-empty items")]
    EmptySection,

    /// Building the HTTP client failed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The endpoint involved.
        endpoint: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The proxy answered with a non-success status.
    #[error("proxy returned {status}: {message}")]
    Rejected {
        /// HTTP status code from the proxy.
        status: u16,
        /// Message extracted from the response body, or a status-coded
        /// fallback.
        message: String,
    },
}

impl PublishError {
    /// Operator-facing message in the menu's active language.
    pub fn operator_message(&self, lang: Language) -> String {
        match self {
            PublishError::MissingDate => labels::msg_missing_date(lang).to_string(),
            PublishError::EmptySection => labels::msg_empty_section(lang).to_string(),
            PublishError::ClientBuild(_) | PublishError::Http { .. } => {
                labels::msg_connection_failed(lang).to_string()
            }
            PublishError::Rejected { message, .. } => message.clone(),
        }
    }
}
