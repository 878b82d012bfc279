//! # menu-pdf — Printable Menu Documents
//!
//! Renders a [`menu_core::MenuState`] into a single-page A4 PDF:
//! centered header with the restaurant title and localized date,
//! the two course sections in upper case, and a fixed footer. Long
//! course names wrap greedily against the printable width, measured
//! with the embedded Helvetica advance-width tables.
//!
//! The renderer returns the document bytes plus the derived
//! `menu-DD-MM-YYYY.pdf` filename; writing to disk is a separate,
//! explicit step.

pub mod document;
pub mod metrics;
pub mod wrap;

pub use document::{render_document, RenderError, RenderedDocument};
pub use metrics::Face;
