//! # Menu State Aggregate
//!
//! The editable menu: two ordered course lists, an optional date, and
//! the publication language. Mutations are synchronous methods on the
//! aggregate; snapshots are plain values (`Clone + PartialEq`) so
//! observers diff by value.
//!
//! ## Invariants
//!
//! - Both course lists hold at least one item at all times. Removal
//!   that would empty a list is refused inside the store itself, so
//!   headless callers get the same guarantee the editing surface
//!   enforces with a disabled control.
//! - Empty names are permitted here; consumers filter them (the
//!   renderer skips them, the publisher rejects sections left empty
//!   after filtering).

use serde::{Deserialize, Serialize};

use crate::date::MenuDate;
use crate::language::Language;

/// One named dish within a course section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseItem {
    /// Free-form dish name; may be empty while the operator is typing.
    pub name: String,
}

impl CourseItem {
    /// A fresh, unnamed course slot.
    pub fn empty() -> Self {
        Self { name: String::new() }
    }

    /// Whether the name is non-empty after trimming.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// The full editable menu aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuState {
    /// Publication language.
    pub language: Language,
    /// First-course section, never empty.
    pub first_courses: Vec<CourseItem>,
    /// Second-course section, never empty.
    pub second_courses: Vec<CourseItem>,
    /// Menu date; absent until the operator picks one.
    pub selected_date: Option<MenuDate>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            first_courses: vec![CourseItem::empty()],
            second_courses: vec![CourseItem::empty()],
            selected_date: None,
        }
    }
}

impl MenuState {
    /// Switch the publication language.
    pub fn set_language(&mut self, lang: Language) {
        self.language = lang;
    }

    /// Select or clear the menu date.
    pub fn set_selected_date(&mut self, date: Option<MenuDate>) {
        self.selected_date = date;
    }

    /// Append an empty slot to the first-course section.
    pub fn add_first_course(&mut self) {
        self.first_courses.push(CourseItem::empty());
    }

    /// Append an empty slot to the second-course section.
    pub fn add_second_course(&mut self) {
        self.second_courses.push(CourseItem::empty());
    }

    /// Replace the name at `index` in the first-course section.
    ///
    /// Out-of-range indices are a no-op; returns whether a slot was
    /// updated.
    pub fn update_first_course(&mut self, index: usize, value: impl Into<String>) -> bool {
        update_at(&mut self.first_courses, index, value.into())
    }

    /// Replace the name at `index` in the second-course section.
    pub fn update_second_course(&mut self, index: usize, value: impl Into<String>) -> bool {
        update_at(&mut self.second_courses, index, value.into())
    }

    /// Remove the slot at `index` from the first-course section.
    ///
    /// Refused (returns `false`) when the index is out of range or the
    /// section would drop below one slot.
    pub fn remove_first_course(&mut self, index: usize) -> bool {
        remove_at(&mut self.first_courses, index)
    }

    /// Remove the slot at `index` from the second-course section.
    pub fn remove_second_course(&mut self, index: usize) -> bool {
        remove_at(&mut self.second_courses, index)
    }

    /// Restore both sections to a single empty slot and clear the date.
    /// The language is left untouched.
    pub fn reset_courses(&mut self) {
        self.first_courses = vec![CourseItem::empty()];
        self.second_courses = vec![CourseItem::empty()];
        self.selected_date = None;
    }

    /// Non-empty (after trim) names of the first-course section, in order.
    pub fn first_course_names(&self) -> Vec<String> {
        named(&self.first_courses)
    }

    /// Non-empty (after trim) names of the second-course section, in order.
    pub fn second_course_names(&self) -> Vec<String> {
        named(&self.second_courses)
    }
}

fn update_at(courses: &mut [CourseItem], index: usize, value: String) -> bool {
    match courses.get_mut(index) {
        Some(slot) => {
            slot.name = value;
            true
        }
        None => false,
    }
}

fn remove_at(courses: &mut Vec<CourseItem>, index: usize) -> bool {
    if courses.len() <= 1 || index >= courses.len() {
        return false;
    }
    courses.remove(index);
    true
}

fn named(courses: &[CourseItem]) -> Vec<String> {
    courses
        .iter()
        .filter(|c| c.has_name())
        .map(|c| c.name.trim().to_string())
        .collect()
}
