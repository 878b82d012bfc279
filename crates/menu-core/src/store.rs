//! # Menu Store — Versioned On-Disk Persistence
//!
//! Explicit persistence for the menu snapshot: the caller loads once at
//! startup and saves after each mutation. The persisted form is a JSON
//! object with a `version` tag; entries written before versioning was
//! introduced (version `0`) load with per-field defaulting, and entries
//! from a newer writer are rejected with a typed error instead of being
//! silently misread.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date::MenuDate;
use crate::language::Language;
use crate::state::{CourseItem, MenuState};

/// Current persisted-schema version.
pub const STATE_VERSION: u32 = 1;

/// Fixed file name under the platform data directory.
const STATE_FILE_NAME: &str = "menu-storage.json";

/// Error loading or saving the menu snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("io error on {path:?}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The entry is not valid JSON for the persisted shape.
    #[error("corrupt state file {path:?}: {source}")]
    Corrupt {
        /// The file involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The entry was written by a newer schema than this build knows.
    #[error("state file version {found} is newer than supported version {STATE_VERSION}")]
    UnsupportedVersion {
        /// Version tag found in the file.
        found: u32,
    },

    /// No platform data directory could be resolved.
    #[error("no platform data directory available for menu storage")]
    NoDataDir,
}

/// On-disk shape of the menu snapshot.
///
/// Every field defaults, so a version-0 entry (the pre-versioning
/// shape) or a partially written one loads as a usable state instead
/// of failing.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    language: Language,
    #[serde(default = "single_empty_section")]
    first_courses: Vec<CourseItem>,
    #[serde(default = "single_empty_section")]
    second_courses: Vec<CourseItem>,
    #[serde(default)]
    selected_date: Option<MenuDate>,
}

fn single_empty_section() -> Vec<CourseItem> {
    vec![CourseItem::empty()]
}

/// File-backed store for the menu snapshot.
#[derive(Debug, Clone)]
pub struct MenuStore {
    path: PathBuf,
}

impl MenuStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `menu-storage.json` under the platform data dir.
    pub fn at_default_path() -> Result<Self, StoreError> {
        let dirs = directories::ProjectDirs::from("com", "ElReinoDeDracula", "menu-diario")
            .ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join(STATE_FILE_NAME)))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last snapshot, or defaults when no file exists yet.
    pub fn load_or_default(&self) -> Result<MenuState, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(MenuState::default());
            }
            Err(source) => {
                return Err(StoreError::Io { path: self.path.clone(), source });
            }
        };

        let persisted: PersistedState =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        if persisted.version > STATE_VERSION {
            return Err(StoreError::UnsupportedVersion { found: persisted.version });
        }

        Ok(normalize(persisted))
    }

    /// Write the snapshot, creating parent directories as needed.
    pub fn save(&self, state: &MenuState) -> Result<(), StoreError> {
        let persisted = PersistedState {
            version: STATE_VERSION,
            language: state.language,
            first_courses: state.first_courses.clone(),
            second_courses: state.second_courses.clone(),
            selected_date: state.selected_date,
        };
        let json = serde_json::to_string_pretty(&persisted).map_err(|source| {
            StoreError::Corrupt { path: self.path.clone(), source }
        })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Re-establish the aggregate invariants on whatever was on disk:
/// a section that deserialized empty gets its single empty slot back.
fn normalize(persisted: PersistedState) -> MenuState {
    let mut state = MenuState {
        language: persisted.language,
        first_courses: persisted.first_courses,
        second_courses: persisted.second_courses,
        selected_date: persisted.selected_date,
    };
    if state.first_courses.is_empty() {
        state.first_courses.push(CourseItem::empty());
    }
    if state.second_courses.is_empty() {
        state.second_courses.push(CourseItem::empty());
    }
    state
}
