//! # Helvetica Advance-Width Metrics
//!
//! Width measurement for the two builtin faces the document uses.
//! printpdf exposes no glyph metrics for builtin fonts, so the
//! standard AFM advance widths for Helvetica and Helvetica-Bold are
//! embedded here (1000 units per em), covering the printable ASCII
//! range plus the accented Latin letters Spanish and Romanian menus
//! actually contain. Accented glyphs share the advance of their base
//! letter in Helvetica.

/// Builtin face used by the document layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Helvetica regular.
    Regular,
    /// Helvetica bold.
    Bold,
}

const UNITS_PER_EM: f64 = 1000.0;

/// Points to millimetres.
const MM_PER_PT: f64 = 25.4 / 72.0;

/// Advance width for glyphs without a table entry (the Helvetica
/// lowercase average).
const DEFAULT_WIDTH: u16 = 556;

/// Helvetica advance widths for `0x20..=0x7E`, in font units.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for `0x20..=0x7E`, in font units.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Accented Latin letters map to their base letter, whose advance they
/// share in Helvetica.
fn base_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ă' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ș' | 'ş' => 's',
        'ț' | 'ţ' => 't',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ă' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ñ' => 'N',
        'Ç' => 'C',
        'Ș' | 'Ş' => 'S',
        'Ț' | 'Ţ' => 'T',
        other => other,
    }
}

/// Advance width of one glyph in font units.
pub fn char_width_units(face: Face, c: char) -> u16 {
    let c = base_char(c);
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        let index = (code - 0x20) as usize;
        match face {
            Face::Regular => HELVETICA[index],
            Face::Bold => HELVETICA_BOLD[index],
        }
    } else {
        DEFAULT_WIDTH
    }
}

/// Width of `text` at `size_pt`, in points.
pub fn text_width_pt(face: Face, text: &str, size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width_units(face, c))).sum();
    f64::from(units) / UNITS_PER_EM * size_pt
}

/// Width of `text` at `size_pt`, in millimetres.
pub fn text_width_mm(face: Face, text: &str, size_pt: f64) -> f64 {
    text_width_pt(face, text, size_pt) * MM_PER_PT
}
