//! # Menu Payload
//!
//! The transmission-ready structure derived from the menu state at
//! publish time. Building the payload is where publication
//! preconditions are enforced: a selected date and at least one
//! non-empty name in each section. The payload is never persisted.

use serde::{Deserialize, Serialize};

use menu_core::{Language, MenuState};

use crate::error::PublishError;

/// Structured menu data as the CMS expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPayload {
    /// Long localized date string (e.g. `sábado, 15 de marzo de 2025`).
    pub date: String,
    /// Non-empty first-course names, in order.
    pub first_courses: Vec<String>,
    /// Non-empty second-course names, in order.
    pub second_courses: Vec<String>,
    /// Publication language.
    pub language: Language,
}

/// Wire body of the proxy write call.
///
/// `menu_content` is the rendered block markup, transmitted as an
/// opaque string next to the structured fields. The proxy forwards
/// this shape to the CMS unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMenuRequest {
    /// Rendered block markup for the CMS page body.
    pub menu_content: String,
    /// Long localized date string.
    pub date: String,
    /// Publication language.
    pub language: Language,
}

/// Validate the state and derive the payload.
///
/// Fails with [`PublishError::MissingDate`] when no date is selected
/// and with [`PublishError::EmptySection`] when either section has no
/// non-empty names after trimming. Never touches the network.
pub fn build_payload(state: &MenuState) -> Result<MenuPayload, PublishError> {
    let date = state.selected_date.ok_or(PublishError::MissingDate)?;

    let first_courses = state.first_course_names();
    let second_courses = state.second_course_names();
    if first_courses.is_empty() || second_courses.is_empty() {
        return Err(PublishError::EmptySection);
    }

    Ok(MenuPayload {
        date: date.format_long(state.language),
        first_courses,
        second_courses,
        language: state.language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::MenuDate;

    fn populated_state() -> MenuState {
        let mut state = MenuState::default();
        state.update_first_course(0, "Sopa");
        state.update_second_course(0, "Pollo");
        state.set_selected_date(Some(MenuDate::from_ymd(2025, 3, 15).unwrap()));
        state
    }

    #[test]
    fn builds_the_expected_payload() {
        let payload = build_payload(&populated_state()).unwrap();
        assert_eq!(payload.first_courses, vec!["Sopa".to_string()]);
        assert_eq!(payload.second_courses, vec!["Pollo".to_string()]);
        assert_eq!(payload.language, Language::Es);
        assert_eq!(payload.date, "sábado, 15 de marzo de 2025");
    }

    #[test]
    fn missing_date_is_rejected_even_with_populated_sections() {
        let mut state = populated_state();
        state.set_selected_date(None);
        assert!(matches!(build_payload(&state), Err(PublishError::MissingDate)));
    }

    #[test]
    fn whitespace_only_section_is_rejected() {
        let mut state = populated_state();
        state.update_first_course(0, "   ");
        assert!(matches!(build_payload(&state), Err(PublishError::EmptySection)));
    }

    #[test]
    fn empty_second_section_is_rejected() {
        let mut state = populated_state();
        state.update_second_course(0, "");
        assert!(matches!(build_payload(&state), Err(PublishError::EmptySection)));
    }

    #[test]
    fn names_are_trimmed_and_blank_slots_dropped() {
        let mut state = populated_state();
        state.add_first_course();
        state.update_first_course(1, "  Ensalada mixta  ");
        state.add_first_course();
        let payload = build_payload(&state).unwrap();
        assert_eq!(
            payload.first_courses,
            vec!["Sopa".to_string(), "Ensalada mixta".to_string()]
        );
    }

    #[test]
    fn romanian_payload_uses_the_romanian_date_form() {
        let mut state = populated_state();
        state.set_language(Language::Ro);
        let payload = build_payload(&state).unwrap();
        assert_eq!(payload.date, "15 martie 2025");
        assert_eq!(payload.language, Language::Ro);
    }

    #[test]
    fn wire_body_serializes_with_snake_case_fields() {
        let request = UpdateMenuRequest {
            menu_content: "<div/>".to_string(),
            date: "15 martie 2025".to_string(),
            language: Language::Ro,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["menu_content"], "<div/>");
        assert_eq!(json["date"], "15 martie 2025");
        assert_eq!(json["language"], "ro");
    }
}
