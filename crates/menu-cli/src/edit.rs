//! # State-Editing Commands
//!
//! One subcommand per store operation. Each command loads the
//! snapshot, applies exactly one mutation, saves, and prints the
//! result in the menu's active language.

use clap::{Args, ValueEnum};

use menu_core::{labels, Language, MenuDate, MenuState, MenuStore};

/// Which course section a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// First courses.
    First,
    /// Second courses.
    Second,
}

#[derive(Debug, Args)]
pub struct LangArgs {
    /// Menu language: "es" or "ro".
    #[arg(value_parser = parse_language)]
    pub language: Language,
}

#[derive(Debug, Args)]
pub struct DateArgs {
    /// Menu date as YYYY-MM-DD.
    #[arg(required_unless_present = "clear")]
    pub date: Option<String>,

    /// Clear the selected date instead.
    #[arg(long, conflicts_with = "date")]
    pub clear: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Section to append to.
    #[arg(value_enum)]
    pub section: Section,

    /// Name for the new course; defaults to an empty slot.
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Section to edit.
    #[arg(value_enum)]
    pub section: Section,

    /// Zero-based course index.
    pub index: usize,

    /// New course name.
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Section to remove from.
    #[arg(value_enum)]
    pub section: Section,

    /// Zero-based course index.
    pub index: usize,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse()
}

pub fn run_show(store: &MenuStore) -> anyhow::Result<()> {
    let state = store.load_or_default()?;
    print_state(&state);
    Ok(())
}

pub fn run_lang(args: &LangArgs, store: &MenuStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default()?;
    state.set_language(args.language);
    store.save(&state)?;
    println!("{}", state.language);
    Ok(())
}

pub fn run_date(args: &DateArgs, store: &MenuStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default()?;
    if args.clear {
        state.set_selected_date(None);
        store.save(&state)?;
        println!("--");
        return Ok(());
    }

    let raw = args.date.as_deref().expect("clap enforces date unless --clear");
    let date = match MenuDate::parse(raw) {
        Ok(date) => date,
        Err(e) => {
            tracing::debug!(error = %e, "rejected date input");
            anyhow::bail!("{}", labels::msg_invalid_date(state.language));
        }
    };
    state.set_selected_date(Some(date));
    store.save(&state)?;
    println!("{}", date.format_long(state.language));
    Ok(())
}

pub fn run_add(args: &AddArgs, store: &MenuStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default()?;
    match args.section {
        Section::First => {
            state.add_first_course();
            if let Some(name) = &args.name {
                let index = state.first_courses.len() - 1;
                state.update_first_course(index, name.clone());
            }
        }
        Section::Second => {
            state.add_second_course();
            if let Some(name) = &args.name {
                let index = state.second_courses.len() - 1;
                state.update_second_course(index, name.clone());
            }
        }
    }
    store.save(&state)?;
    print_state(&state);
    Ok(())
}

pub fn run_set(args: &SetArgs, store: &MenuStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default()?;
    let updated = match args.section {
        Section::First => state.update_first_course(args.index, args.name.clone()),
        Section::Second => state.update_second_course(args.index, args.name.clone()),
    };
    if !updated {
        anyhow::bail!("no course at index {}", args.index);
    }
    store.save(&state)?;
    print_state(&state);
    Ok(())
}

pub fn run_remove(args: &RemoveArgs, store: &MenuStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default()?;
    let removed = match args.section {
        Section::First => state.remove_first_course(args.index),
        Section::Second => state.remove_second_course(args.index),
    };
    if !removed {
        anyhow::bail!("{}", labels::msg_cannot_remove_last(state.language));
    }
    store.save(&state)?;
    print_state(&state);
    Ok(())
}

pub fn run_reset(store: &MenuStore) -> anyhow::Result<()> {
    let mut state = store.load_or_default()?;
    state.reset_courses();
    store.save(&state)?;
    println!("{}", labels::msg_menu_reset(state.language));
    Ok(())
}

fn print_state(state: &MenuState) {
    let date = state
        .selected_date
        .map(|d| d.format_compact())
        .unwrap_or_else(|| "--".to_string());
    println!("{} [{}] {}", labels::menu_of_the_day(state.language), state.language, date);

    println!("  {}:", labels::first_courses_heading(state.language));
    for (i, course) in state.first_courses.iter().enumerate() {
        println!("    {i}. {}", course.name);
    }
    println!("  {}:", labels::second_courses_heading(state.language));
    for (i, course) in state.second_courses.iter().enumerate() {
        println!("    {i}. {}", course.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> MenuStore {
        MenuStore::new(dir.path().join("menu-storage.json"))
    }

    #[test]
    fn lang_persists_the_language() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        run_lang(&LangArgs { language: Language::Ro }, &store).unwrap();
        assert_eq!(store.load_or_default().unwrap().language, Language::Ro);
    }

    #[test]
    fn date_persists_a_valid_date() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        run_date(&DateArgs { date: Some("2025-03-15".into()), clear: false }, &store).unwrap();
        let state = store.load_or_default().unwrap();
        assert_eq!(state.selected_date, Some(MenuDate::from_ymd(2025, 3, 15).unwrap()));
    }

    #[test]
    fn date_rejects_invalid_input_with_the_localized_message() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let err = run_date(&DateArgs { date: Some("2025-02-30".into()), clear: false }, &store)
            .unwrap_err();
        assert_eq!(err.to_string(), "La fecha seleccionada no es válida");
        assert!(store.load_or_default().unwrap().selected_date.is_none());
    }

    #[test]
    fn date_clear_removes_the_selection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        run_date(&DateArgs { date: Some("2025-03-15".into()), clear: false }, &store).unwrap();
        run_date(&DateArgs { date: None, clear: true }, &store).unwrap();
        assert!(store.load_or_default().unwrap().selected_date.is_none());
    }

    #[test]
    fn add_with_name_fills_the_new_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        run_add(&AddArgs { section: Section::First, name: Some("Sopa".into()) }, &store).unwrap();
        let state = store.load_or_default().unwrap();
        assert_eq!(state.first_courses.len(), 2);
        assert_eq!(state.first_courses[1].name, "Sopa");
    }

    #[test]
    fn set_rewrites_an_existing_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        run_set(
            &SetArgs { section: Section::Second, index: 0, name: "Pollo".into() },
            &store,
        )
        .unwrap();
        assert_eq!(store.load_or_default().unwrap().second_courses[0].name, "Pollo");
    }

    #[test]
    fn set_out_of_range_fails_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let err = run_set(
            &SetArgs { section: Section::First, index: 3, name: "Nada".into() },
            &store,
        )
        .unwrap_err();
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn remove_refuses_to_empty_a_section() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let err =
            run_remove(&RemoveArgs { section: Section::First, index: 0 }, &store).unwrap_err();
        assert_eq!(err.to_string(), "Cada sección debe conservar al menos un plato");
        assert_eq!(store.load_or_default().unwrap().first_courses.len(), 1);
    }

    #[test]
    fn reset_keeps_language_but_clears_courses_and_date() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        run_lang(&LangArgs { language: Language::Ro }, &store).unwrap();
        run_add(&AddArgs { section: Section::First, name: Some("Ciorbă".into()) }, &store)
            .unwrap();
        run_date(&DateArgs { date: Some("2025-03-15".into()), clear: false }, &store).unwrap();

        run_reset(&store).unwrap();

        let state = store.load_or_default().unwrap();
        assert_eq!(state.language, Language::Ro);
        assert_eq!(state.first_courses.len(), 1);
        assert_eq!(state.first_courses[0].name, "");
        assert!(state.selected_date.is_none());
    }
}
