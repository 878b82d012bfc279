//! # Greedy Word Wrap
//!
//! Line breaking for course names that exceed the printable width.
//! The fill is greedy: words are appended while the measured line
//! width stays within the budget, otherwise a new line starts. A
//! single word wider than the budget still gets its own line rather
//! than being split mid-word.

use crate::metrics::{self, Face};

/// Break `text` into lines no wider than `max_width_mm` at `size_pt`.
///
/// Words are separated on whitespace; runs of whitespace collapse to a
/// single space in the output. Empty or all-whitespace input yields no
/// lines.
pub fn wrap_text(text: &str, face: Face, size_pt: f64, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if metrics::text_width_mm(face, &candidate, size_pt) <= max_width_mm {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY_SIZE_PT: f64 = 26.0;
    const PRINTABLE_MM: f64 = 170.0;

    #[test]
    fn short_names_stay_on_one_line() {
        let lines = wrap_text("SOPA CASTELLANA", Face::Regular, BODY_SIZE_PT, PRINTABLE_MM);
        assert_eq!(lines, vec!["SOPA CASTELLANA".to_string()]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(wrap_text("", Face::Regular, BODY_SIZE_PT, PRINTABLE_MM).is_empty());
        assert!(wrap_text("   ", Face::Regular, BODY_SIZE_PT, PRINTABLE_MM).is_empty());
    }

    #[test]
    fn long_names_break_on_word_boundaries() {
        let name = "SOLOMILLO DE TERNERA CON SALSA DE PIMIENTA VERDE Y PATATAS PANADERAS";
        let lines = wrap_text(name, Face::Regular, BODY_SIZE_PT, PRINTABLE_MM);
        assert!(lines.len() > 1, "expected a break, got {lines:?}");
        // No word is split and the order is preserved.
        assert_eq!(lines.join(" "), name);
    }

    #[test]
    fn every_multiword_line_fits_the_budget() {
        let name = "ENSALADA TEMPLADA DE QUESO DE CABRA CON VINAGRETA DE FRAMBUESA";
        for line in wrap_text(name, Face::Regular, BODY_SIZE_PT, PRINTABLE_MM) {
            assert!(
                crate::metrics::text_width_mm(Face::Regular, &line, BODY_SIZE_PT) <= PRINTABLE_MM,
                "line too wide: {line:?}"
            );
        }
    }

    #[test]
    fn greedy_fill_packs_words_onto_the_first_line() {
        // With a budget that fits exactly two of the three words, the
        // greedy fill must put two on the first line, one on the second.
        let two_words = crate::metrics::text_width_mm(Face::Regular, "UNO DOS", 10.0);
        let lines = wrap_text("UNO DOS TRES", Face::Regular, 10.0, two_words + 0.1);
        assert_eq!(lines, vec!["UNO DOS".to_string(), "TRES".to_string()]);
    }

    #[test]
    fn oversize_single_word_gets_its_own_line() {
        let lines = wrap_text("SUPERCALIFRAGILISTICOESPIALIDOSO", Face::Regular, 26.0, 10.0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn interior_whitespace_collapses() {
        let lines = wrap_text("SOPA   DE  AJO", Face::Regular, BODY_SIZE_PT, PRINTABLE_MM);
        assert_eq!(lines, vec!["SOPA DE AJO".to_string()]);
    }
}
