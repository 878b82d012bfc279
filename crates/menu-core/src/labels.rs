//! # Localized Labels and Operator Messages
//!
//! Fixed bilingual string tables for every user-facing label the system
//! prints or embeds in generated documents. Centralized here so the
//! renderer, the publisher, and the CLI agree on the exact wording in
//! both languages.

use crate::language::Language;

/// Restaurant title shown in the document header and footer.
pub fn restaurant_title() -> &'static str {
    "El Reino de Drácula"
}

/// "Menu of the Day" section label.
pub fn menu_of_the_day(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Menú del Día",
        Language::Ro => "Meniu Zilei",
    }
}

/// Heading for the first-course section.
pub fn first_courses_heading(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Primeros Platos",
        Language::Ro => "Felul Întâi",
    }
}

/// Heading for the second-course section.
pub fn second_courses_heading(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Segundos Platos",
        Language::Ro => "Felul Doi",
    }
}

// ── Operator messages ───────────────────────────────────────────────

pub fn msg_missing_date(lang: Language) -> &'static str {
    match lang {
        Language::Es => "No se ha seleccionado una fecha para el menú",
        Language::Ro => "Nu a fost selectată o dată pentru meniu",
    }
}

pub fn msg_invalid_date(lang: Language) -> &'static str {
    match lang {
        Language::Es => "La fecha seleccionada no es válida",
        Language::Ro => "Data selectată nu este validă",
    }
}

pub fn msg_empty_section(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Debes incluir al menos un plato en cada sección",
        Language::Ro => "Trebuie să incluzi cel puțin un fel de mâncare în fiecare secțiune",
    }
}

pub fn msg_connection_failed(lang: Language) -> &'static str {
    match lang {
        Language::Es => "No se pudo conectar con el servidor",
        Language::Ro => "Nu s-a putut contacta serverul",
    }
}

pub fn msg_pdf_generated(lang: Language) -> &'static str {
    match lang {
        Language::Es => "PDF generado",
        Language::Ro => "PDF generat",
    }
}

pub fn msg_pdf_failed(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Error al generar PDF",
        Language::Ro => "Eroare la generarea PDF",
    }
}

pub fn msg_menu_reset(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Menú reseteado",
        Language::Ro => "Meniul a fost resetat",
    }
}

pub fn msg_menu_published(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Menú actualizado correctamente",
        Language::Ro => "Meniul a fost actualizat cu succes",
    }
}

pub fn msg_view_on_web(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Ver en la web",
        Language::Ro => "Vezi pe web",
    }
}

pub fn msg_cannot_remove_last(lang: Language) -> &'static str {
    match lang {
        Language::Es => "Cada sección debe conservar al menos un plato",
        Language::Ro => "Fiecare secțiune trebuie să păstreze cel puțin un fel",
    }
}
