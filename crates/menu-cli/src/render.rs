//! # PDF Command
//!
//! Renders the current menu state into `menu-DD-MM-YYYY.pdf` and
//! writes it to the output directory.

use std::path::PathBuf;

use clap::Args;

use menu_core::{labels, MenuStore};
use menu_pdf::render_document;

#[derive(Debug, Args)]
pub struct PdfArgs {
    /// Directory the document is written into.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

pub fn run_pdf(args: &PdfArgs, store: &MenuStore) -> anyhow::Result<()> {
    let state = store.load_or_default()?;
    let lang = state.language;

    let document = match render_document(&state) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!(error = %e, "document rendering failed");
            anyhow::bail!("{}", labels::msg_pdf_failed(lang));
        }
    };
    let path = document.save_to(&args.out)?;

    println!("{}: {}", labels::msg_pdf_generated(lang), path.display());
    Ok(())
}
