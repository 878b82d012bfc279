//! # Document Layout
//!
//! Single-page A4 layout with a vertical cursor advancing top to
//! bottom: restaurant title, localized "Menu of the Day" label and
//! long date, the two course sections (upper-cased, centered, wrapped),
//! and a fixed footer near the bottom margin. The footer position is
//! independent of content length; overflowing content is not paginated.

use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};
use thiserror::Error;

use menu_core::{labels, MenuDate, MenuState};

use crate::metrics::{self, Face};
use crate::wrap;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;
const PRINTABLE_WIDTH_MM: f64 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

const TITLE_SIZE_PT: f64 = 32.0;
const SUBTITLE_SIZE_PT: f64 = 18.0;
const HEADING_SIZE_PT: f64 = 20.0;
const COURSE_SIZE_PT: f64 = 26.0;
const FOOTER_SIZE_PT: f64 = 12.0;

/// Vertical advance per wrapped course line.
const COURSE_LINE_MM: f64 = 12.0;
/// Extra advance after each course, on top of its last line.
const COURSE_GAP_MM: f64 = 3.0;

/// Error producing or writing the document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The PDF backend failed; no partial output is valid.
    #[error("pdf backend error: {0}")]
    Backend(String),

    /// Writing the finished document failed.
    #[error("io error writing {path:?}: {source}")]
    Io {
        /// Target path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A finished document: bytes plus the date-derived filename.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// `menu-DD-MM-YYYY.pdf`, from the effective menu date.
    pub filename: String,
    /// The complete PDF.
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    /// Write the document into `dir` under its derived filename.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, RenderError> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)
            .map_err(|source| RenderError::Io { path: path.clone(), source })?;
        Ok(path)
    }
}

/// Render the menu as a printable document.
///
/// Uses `selected_date` when present, else today's date. Only courses
/// with a non-empty trimmed name appear.
pub fn render_document(state: &MenuState) -> Result<RenderedDocument, RenderError> {
    let menu_date = state.selected_date.unwrap_or_else(MenuDate::today);
    let lang = state.language;

    let (doc, page, layer) = PdfDocument::new(
        labels::restaurant_title(),
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(backend)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(backend)?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut y = MARGIN_MM;

    // Header: restaurant title.
    set_gray(&layer, 40);
    draw_centered(&layer, &bold, Face::Bold, labels::restaurant_title(), TITLE_SIZE_PT, y);
    y += 15.0;

    // Section label and date.
    set_gray(&layer, 80);
    draw_centered(&layer, &bold, Face::Bold, labels::menu_of_the_day(lang), SUBTITLE_SIZE_PT, y);
    y += 10.0;
    draw_centered(&layer, &bold, Face::Bold, &menu_date.format_long(lang), SUBTITLE_SIZE_PT, y);
    y += 25.0;

    // First courses.
    y = draw_section(
        &layer,
        &bold,
        &regular,
        labels::first_courses_heading(lang),
        &state.first_course_names(),
        y,
    );
    y += 15.0;

    // Second courses.
    draw_section(
        &layer,
        &bold,
        &regular,
        labels::second_courses_heading(lang),
        &state.second_course_names(),
        y,
    );

    // Footer: fixed position near the bottom margin.
    set_gray(&layer, 180);
    draw_centered(
        &layer,
        &regular,
        Face::Regular,
        labels::restaurant_title(),
        FOOTER_SIZE_PT,
        PAGE_HEIGHT_MM - 15.0,
    );

    let bytes = doc.save_to_bytes().map_err(backend)?;
    Ok(RenderedDocument {
        filename: format!("menu-{}.pdf", menu_date.format_filename()),
        bytes,
    })
}

/// Draw one course section: gray heading, then each named course
/// upper-cased, centered, wrapped to the printable width. Returns the
/// cursor position after the section.
fn draw_section(
    layer: &PdfLayerReference,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    heading: &str,
    names: &[String],
    mut y: f64,
) -> f64 {
    set_gray(layer, 100);
    draw_centered(layer, bold, Face::Bold, heading, HEADING_SIZE_PT, y);
    y += 15.0;

    set_gray(layer, 20);
    for name in names {
        let display = name.to_uppercase();
        for line in wrap::wrap_text(&display, Face::Regular, COURSE_SIZE_PT, PRINTABLE_WIDTH_MM) {
            draw_centered(layer, regular, Face::Regular, &line, COURSE_SIZE_PT, y);
            y += COURSE_LINE_MM;
        }
        y += COURSE_GAP_MM;
    }
    y
}

/// Draw `text` horizontally centered at `y_from_top` millimetres from
/// the page top. printpdf's origin is the bottom-left corner, so the
/// vertical coordinate flips here.
fn draw_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    face: Face,
    text: &str,
    size_pt: f64,
    y_from_top: f64,
) {
    let width = metrics::text_width_mm(face, text, size_pt);
    let x = (PAGE_WIDTH_MM - width) / 2.0;
    layer.use_text(
        text,
        size_pt as f32,
        Mm(x as f32),
        Mm((PAGE_HEIGHT_MM - y_from_top) as f32),
        font,
    );
}

/// Fill color from a 0-255 gray level, matching the original design's
/// RGB grays.
fn set_gray(layer: &PdfLayerReference, level: u8) {
    let v = f64::from(level) / 255.0;
    layer.set_fill_color(Color::Rgb(Rgb::new(v as f32, v as f32, v as f32, None)));
}

fn backend<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}
