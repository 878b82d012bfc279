//! # menu-cli — Menu Editing and Publishing CLI
//!
//! The presentation layer of the daily-menu system: every store
//! mutation is a subcommand, plus `pdf` and `publish` for the two
//! consumers of the state. Persistence is explicit here (the state
//! file is loaded before a command runs and saved after a successful
//! mutation), so the domain crates stay storage-free.

pub mod edit;
pub mod publish;
pub mod render;
