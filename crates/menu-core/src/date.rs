//! # Calendar Dates — Parse Once, Format Anywhere
//!
//! `MenuDate` is a validated calendar date. Construction is the only
//! fallible step: parsing rejects malformed input with a typed error,
//! so every consumer (the document renderer, the publisher) formats an
//! already-valid date and no call site can emit "Invalid Date" text.
//!
//! ## Formats
//!
//! - `format_long(Language::Ro)` — `15 martie 2025` (day, month name,
//!   year from the fixed Romanian month table).
//! - `format_long(Language::Es)` — `sábado, 15 de marzo de 2025`
//!   (weekday, day, month name, year from the fixed Spanish tables;
//!   chrono carries no es-ES locale data, so the composed form IS the
//!   canonical output and matches the es-ES long date format).
//! - `format_compact()` — `15/03/2025`, the short form shown next to
//!   the date in the editing surface.
//! - `format_filename()` — `15-03-2025`, used for document filenames.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::Language;

/// Romanian month names, indexed by zero-based month-of-year.
const MONTHS_RO: [&str; 12] = [
    "ianuarie",
    "februarie",
    "martie",
    "aprilie",
    "mai",
    "iunie",
    "iulie",
    "august",
    "septembrie",
    "octombrie",
    "noiembrie",
    "decembrie",
];

/// Spanish month names, indexed by zero-based month-of-year.
const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Spanish weekday names, Sunday first.
const WEEKDAYS_ES: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];

/// Error constructing a [`MenuDate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    /// The input string is not `YYYY-MM-DD`.
    #[error("unparseable date {0:?}: expected YYYY-MM-DD")]
    Unparseable(String),

    /// The components do not name a real calendar date.
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    OutOfRange {
        /// Requested year.
        year: i32,
        /// Requested month (1-based).
        month: u32,
        /// Requested day of month.
        day: u32,
    },
}

/// A validated calendar date for the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuDate(NaiveDate);

impl MenuDate {
    /// Parse an ISO `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DateError::Unparseable(s.to_string()))
    }

    /// Build from year, 1-based month, and day of month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::OutOfRange { year, month, day })
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Access the underlying `chrono::NaiveDate`.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Long localized form used in the document body and the payload.
    pub fn format_long(&self, lang: Language) -> String {
        let day = self.0.day();
        let month = self.0.month0() as usize;
        let year = self.0.year();
        match lang {
            Language::Ro => format!("{day} {} {year}", MONTHS_RO[month]),
            Language::Es => {
                let weekday = self.0.weekday().num_days_from_sunday() as usize;
                format!("{}, {day} de {} de {year}", WEEKDAYS_ES[weekday], MONTHS_ES[month])
            }
        }
    }

    /// `DD/MM/YYYY`, the short editing-surface form.
    pub fn format_compact(&self) -> String {
        format!("{:02}/{:02}/{}", self.0.day(), self.0.month(), self.0.year())
    }

    /// `DD-MM-YYYY`, used to derive document filenames.
    pub fn format_filename(&self) -> String {
        format!("{:02}-{:02}-{}", self.0.day(), self.0.month(), self.0.year())
    }
}

impl std::fmt::Display for MenuDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_iso_dates() {
        let date = MenuDate::parse("2025-03-15").unwrap();
        assert_eq!(date.to_string(), "2025-03-15");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            MenuDate::parse("not-a-date"),
            Err(DateError::Unparseable("not-a-date".to_string()))
        );
        assert!(MenuDate::parse("15/03/2025").is_err());
        assert!(MenuDate::parse("").is_err());
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(MenuDate::parse("2025-02-30").is_err());
        assert_eq!(
            MenuDate::from_ymd(2025, 13, 1),
            Err(DateError::OutOfRange { year: 2025, month: 13, day: 1 })
        );
    }

    #[test]
    fn romanian_long_format() {
        let date = MenuDate::from_ymd(2025, 3, 15).unwrap();
        assert_eq!(date.format_long(Language::Ro), "15 martie 2025");
    }

    #[test]
    fn spanish_long_format() {
        // 2025-03-15 is a Saturday.
        let date = MenuDate::from_ymd(2025, 3, 15).unwrap();
        assert_eq!(date.format_long(Language::Es), "sábado, 15 de marzo de 2025");
    }

    #[test]
    fn spanish_long_format_contains_day_and_year() {
        let date = MenuDate::from_ymd(2026, 1, 1).unwrap();
        let formatted = date.format_long(Language::Es);
        assert!(!formatted.is_empty());
        assert!(formatted.contains('1'));
        assert!(formatted.contains("2026"));
    }

    #[test]
    fn compact_and_filename_forms() {
        let date = MenuDate::from_ymd(2025, 3, 5).unwrap();
        assert_eq!(date.format_compact(), "05/03/2025");
        assert_eq!(date.format_filename(), "05-03-2025");
    }

    #[test]
    fn first_and_last_month_indices() {
        let january = MenuDate::from_ymd(2025, 1, 3).unwrap();
        let december = MenuDate::from_ymd(2025, 12, 24).unwrap();
        assert_eq!(january.format_long(Language::Ro), "3 ianuarie 2025");
        assert_eq!(december.format_long(Language::Ro), "24 decembrie 2025");
    }

    #[test]
    fn serde_roundtrip_is_iso() {
        let date = MenuDate::from_ymd(2025, 3, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-03-15\"");
        let parsed: MenuDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn serde_rejects_invalid_date_strings() {
        assert!(serde_json::from_str::<MenuDate>("\"2025-02-30\"").is_err());
    }
}
