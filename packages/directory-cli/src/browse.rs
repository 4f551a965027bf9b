//! Interactive browsing session with back/forward history

use anyhow::Result;
use colored::Colorize;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use directory_core::{
    BaseProviderSource, ConsultMode, DirectoryEngine, InMemoryHistory, SortKey,
};

use crate::render::{format_address, format_status_bar, print_suggestions, print_view};

type Engine = DirectoryEngine<InMemoryHistory>;

#[derive(Debug, Clone, Copy)]
enum BrowseAction {
    Search,
    ConsultMode,
    Specialities,
    Sort,
    ClearAll,
    Back,
    Forward,
    ShareLink,
    Quit,
}

impl BrowseAction {
    fn all() -> &'static [BrowseAction] {
        &[
            BrowseAction::Search,
            BrowseAction::ConsultMode,
            BrowseAction::Specialities,
            BrowseAction::Sort,
            BrowseAction::ClearAll,
            BrowseAction::Back,
            BrowseAction::Forward,
            BrowseAction::ShareLink,
            BrowseAction::Quit,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            BrowseAction::Search => "🔎 Search by name",
            BrowseAction::ConsultMode => "📹 Consult mode",
            BrowseAction::Specialities => "🩺 Specialities",
            BrowseAction::Sort => "↕  Sort",
            BrowseAction::ClearAll => "🧹 Clear all filters",
            BrowseAction::Back => "◀  Back",
            BrowseAction::Forward => "▶  Forward",
            BrowseAction::ShareLink => "🔗 Show shareable link",
            BrowseAction::Quit => "🛑 Exit",
        }
    }
}

/// Start a session and browse until the user quits.
///
/// A failed load ends the session; the user may restart it from scratch.
pub async fn run_browse(source: &dyn BaseProviderSource, initial_address: &str) -> Result<()> {
    let history = InMemoryHistory::new(initial_address);

    let mut engine = loop {
        println!("{}", "Loading providers...".bright_yellow());
        let (engine, result) = DirectoryEngine::start_session(source, history.clone()).await;

        match result {
            Ok(()) => break engine,
            Err(e) => {
                println!("{} {}", "✗".bright_red(), e);
                drop(engine);

                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt("Retry?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Err(e.into());
                }
            }
        }
    };

    show(&engine);

    loop {
        let actions = BrowseAction::all();
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            BrowseAction::Search => search(&mut engine)?,
            BrowseAction::ConsultMode => choose_consult_mode(&mut engine)?,
            BrowseAction::Specialities => choose_specialities(&mut engine)?,
            BrowseAction::Sort => choose_sort(&mut engine)?,
            BrowseAction::ClearAll => engine.clear_all(),
            BrowseAction::Back => {
                if !history.back() {
                    println!("{}", "Already at the oldest view.".yellow());
                }
                engine.sync_navigation();
            }
            BrowseAction::Forward => {
                if !history.forward() {
                    println!("{}", "Already at the newest view.".yellow());
                }
                engine.sync_navigation();
            }
            BrowseAction::ShareLink => {
                println!("{} {}", "Link:".bright_blue(), format_address(&engine.address()));
                continue;
            }
            BrowseAction::Quit => {
                println!("{}", "👋 Goodbye!".bright_blue());
                break;
            }
        }

        show(&engine);
    }

    Ok(())
}

fn show(engine: &Engine) {
    println!();
    print_view(engine.view());
    println!(
        "{}",
        style(format_status_bar(engine.state(), engine.view().len())).bold()
    );
    println!("{}", style(format_address(&engine.address())).dim());
    println!();
}

fn search(engine: &mut Engine) -> Result<()> {
    engine.focus_search();

    let term: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Name")
        .with_initial_text(engine.state().search_term.clone())
        .allow_empty(true)
        .interact_text()?;
    engine.set_search_term(term);

    let suggestions = engine.suggestions();
    if !suggestions.shows_candidates() {
        engine.submit_search();
        return Ok(());
    }

    print_suggestions(&suggestions);

    let mut options: Vec<String> = suggestions
        .candidates
        .iter()
        .map(|r| r.name.clone())
        .collect();
    options.push("Keep what I typed".to_string());

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Suggestions")
        .items(&options)
        .default(options.len() - 1)
        .interact_opt()?;

    match picked {
        Some(index) if index < suggestions.candidates.len() => engine.select_suggestion(index),
        Some(_) => engine.submit_search(),
        None => engine.escape(),
    }
    Ok(())
}

fn choose_consult_mode(engine: &mut Engine) -> Result<()> {
    let modes = ConsultMode::variants();
    let labels: Vec<&str> = modes.iter().map(|m| m.label()).collect();
    let current = modes
        .iter()
        .position(|m| *m == engine.state().consult_mode)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Consult mode")
        .items(&labels)
        .default(current)
        .interact()?;

    engine.set_consult_mode(modes[selection]);
    Ok(())
}

fn choose_specialities(engine: &mut Engine) -> Result<()> {
    let available = engine.specialities();
    if available.is_empty() {
        println!("{}", "No specialities listed.".yellow());
        return Ok(());
    }

    let checked: Vec<bool> = available
        .iter()
        .map(|name| engine.state().selected_specialities.contains(name))
        .collect();

    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Specialities (space to toggle)")
        .items(&available)
        .defaults(&checked)
        .interact()?;

    for (index, name) in available.iter().enumerate() {
        if chosen.contains(&index) != checked[index] {
            engine.toggle_speciality(name);
        }
    }
    Ok(())
}

fn choose_sort(engine: &mut Engine) -> Result<()> {
    let keys = SortKey::variants();
    let labels: Vec<&str> = keys.iter().map(|k| k.label()).collect();
    let current = keys
        .iter()
        .position(|k| *k == engine.state().sort_key)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Sort by")
        .items(&labels)
        .default(current)
        .interact()?;

    engine.set_sort_key(keys[selection]);
    Ok(())
}
