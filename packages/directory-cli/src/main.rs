//! Provider directory CLI
//!
//! Reads the provider feed once and renders the directory for a shareable
//! address, or browses it interactively with back/forward history.
//!
//! ## Running
//!
//! ```bash
//! directory view "?consult=video&sort=fees"
//! directory suggest sharma
//! directory --file providers.json browse
//! ```

mod browse;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use directory_core::{
    query_codec, ConsultMode, Config, DirectoryEngine, FilterState, InMemoryHistory, SortKey,
};

#[derive(Debug, Parser)]
#[command(name = "directory", about = "Search, filter and share views of the provider directory")]
struct Cli {
    /// Provider feed URL (overrides DIRECTORY_SOURCE_URL)
    #[arg(long, global = true)]
    source_url: Option<String>,

    /// Read providers from a local JSON file instead of the feed
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the providers matching an address
    View {
        /// Address or query string, e.g. "?consult=video&sort=fees"
        address: Option<String>,
    },

    /// Print up to three name suggestions for a search term
    Suggest { term: String },

    /// List the distinct specialities in the feed
    Specialities,

    /// Build a shareable address from filter options
    Encode {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        consult: Option<ConsultMode>,
        #[arg(long = "speciality")]
        specialities: Vec<String>,
        #[arg(long)]
        sort: Option<SortKey>,
    },

    /// Browse interactively
    Browse {
        /// Address to start from
        address: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,directory_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = cli.source_url {
        config.source_url = url;
        config.source_file = None;
    }
    if let Some(path) = cli.file {
        config.source_file = Some(path);
    }
    tracing::debug!(?config, "Configuration loaded");

    // Accept full URLs or paths on the command line; the history holds the bare query
    let initial = |address: Option<String>| {
        address
            .or_else(|| config.initial_address.clone())
            .map(|address| query_codec::encode(&query_codec::decode(&address)))
            .unwrap_or_default()
    };

    match cli.command {
        Command::Encode {
            search,
            consult,
            specialities,
            sort,
        } => {
            let mut state = FilterState::new()
                .with_search_term(search.unwrap_or_default())
                .with_consult_mode(consult.unwrap_or_default())
                .with_sort_key(sort.unwrap_or_default());
            for name in &specialities {
                state.toggle_speciality(name);
            }
            println!("{}", render::format_address(&query_codec::encode(&state)));
        }
        Command::View { address } => {
            let engine = load(&config, &initial(address)).await?;
            render::print_view(engine.view());
            println!(
                "{}",
                render::format_status_bar(engine.state(), engine.view().len()).bold()
            );
        }
        Command::Suggest { term } => {
            let mut engine = load(&config, "").await?;
            engine.set_search_term(term);
            let suggestions = engine.suggestions();
            if suggestions.candidates.is_empty() {
                println!("{}", "No matching providers.".yellow());
            }
            render::print_suggestions(&suggestions);
        }
        Command::Specialities => {
            let engine = load(&config, "").await?;
            for name in engine.specialities() {
                println!("{}", name);
            }
        }
        Command::Browse { address } => {
            let source = config.provider_source()?;
            browse::run_browse(source.as_ref(), &initial(address)).await?;
        }
    }

    Ok(())
}

/// Run one session and fail if the feed cannot be read
async fn load(config: &Config, address: &str) -> Result<DirectoryEngine<InMemoryHistory>> {
    let source = config.provider_source()?;
    let (engine, result) =
        DirectoryEngine::start_session(source.as_ref(), InMemoryHistory::new(address)).await;
    result.context("Could not load providers")?;
    Ok(engine)
}
