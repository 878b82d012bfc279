//! # menu-publish — Menu Publication Client
//!
//! Turns the current menu state into a transmission-ready payload and
//! submits it to the proxy endpoint in a single attempt: validate
//! (date selected, both sections non-empty after filtering), build the
//! structured payload plus the WordPress block-markup content, POST,
//! and surface any non-success response with the best available
//! message. No retry, no queue, no cache; a failed publish leaves the
//! menu state untouched so the operator can retry unchanged.

pub mod client;
pub mod content;
pub mod error;
pub mod payload;

pub use client::{Publisher, PublisherConfig};
pub use content::render_menu_content;
pub use error::PublishError;
pub use payload::{build_payload, MenuPayload, UpdateMenuRequest};
