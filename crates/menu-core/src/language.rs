//! # Menu Languages
//!
//! The two languages the menu is published in. The wire and persisted
//! representation is the lowercase two-letter code (`"es"` / `"ro"`);
//! no other value is representable.

use serde::{Deserialize, Serialize};

/// Language of the menu: Spanish or Romanian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish (the default).
    #[default]
    Es,
    /// Romanian.
    Ro,
}

impl Language {
    /// The two-letter code used on the wire and in persisted state.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::Ro => "ro",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Language::Es),
            "ro" => Ok(Language::Ro),
            other => Err(format!("unknown language {other:?}: expected \"es\" or \"ro\"")),
        }
    }
}
