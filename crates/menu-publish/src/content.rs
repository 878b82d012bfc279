//! # Block Markup Rendering
//!
//! Renders the payload as WordPress block markup (`wp:group`,
//! `wp:heading`, `wp:list`) with the language-tagged section labels.
//! The CMS receives this as an opaque string and places it as the
//! page body; the class names are what the site theme styles against.

use menu_core::labels;

use crate::payload::MenuPayload;

/// Render the sectioned block markup for the CMS page body.
pub fn render_menu_content(payload: &MenuPayload) -> String {
    let lang = payload.language;
    format!(
        r#"<!-- wp:group {{"className":"menu-dia-content"}} -->
<div class="wp-block-group menu-dia-content">
  <!-- wp:heading {{"level":2,"className":"menu-dia-title"}} -->
  <h2 class="menu-dia-title">{title}</h2>
  <!-- /wp:heading -->

  <!-- wp:paragraph {{"className":"menu-dia-date"}} -->
  <p class="menu-dia-date">{date}</p>
  <!-- /wp:paragraph -->

  <!-- wp:heading {{"level":3,"className":"menu-section-title"}} -->
  <h3 class="menu-section-title">{first_heading}</h3>
  <!-- /wp:heading -->

  <!-- wp:list {{"className":"menu-items"}} -->
  <ul class="menu-items">{first_items}</ul>
  <!-- /wp:list -->

  <!-- wp:heading {{"level":3,"className":"menu-section-title"}} -->
  <h3 class="menu-section-title">{second_heading}</h3>
  <!-- /wp:heading -->

  <!-- wp:list {{"className":"menu-items"}} -->
  <ul class="menu-items">{second_items}</ul>
  <!-- /wp:list -->
</div>
<!-- /wp:group -->"#,
        title = labels::menu_of_the_day(lang),
        date = payload.date,
        first_heading = labels::first_courses_heading(lang),
        first_items = list_items(&payload.first_courses),
        second_heading = labels::second_courses_heading(lang),
        second_items = list_items(&payload.second_courses),
    )
}

fn list_items(courses: &[String]) -> String {
    courses
        .iter()
        .map(|course| format!("<li>{course}</li>"))
        .collect()
}
