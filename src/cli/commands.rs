use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::content::ContentStore;
use crate::logging::{self, LogTarget};
use crate::models::Feature;
use crate::portal::{FilteredView, build_cards};
use crate::tui::run_interactive;
use crate::utils::default_log_file;

#[derive(Parser)]
#[command(name = "career-portal")]
#[command(version = "0.1.0")]
#[command(about = "Browse practice questions, job requirements, roadmaps and interview experiences", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, env = "CAREER_PORTAL_VERBOSE")]
    pub verbose: bool,

    /// Write JSON logs next to this path, suffixed with the date
    #[arg(long, global = true, env = "CAREER_PORTAL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a collection, optionally filtered
    List {
        /// Collection to print
        #[arg(value_enum)]
        feature: Feature,

        /// Case-insensitive substring to match
        #[arg(short, long, default_value = "")]
        query: String,

        /// Field to search (repeatable); defaults depend on the collection
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// Emit JSON instead of text cards
        #[arg(long)]
        json: bool,
    },
    /// Show record counts per collection
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns stderr, so interactive sessions log to a file only
    let target = match &cli.command {
        None => LogTarget { stderr: false, file: cli.log_file.clone().or(default_log_file().ok()) },
        Some(_) => LogTarget { stderr: true, file: cli.log_file.clone() },
    };
    logging::init(cli.verbose, target)?;

    let store = ContentStore::builtin();

    match &cli.command {
        Some(Commands::List { feature, query, fields, json }) => {
            list(&store, *feature, query, fields, *json)?;
        }
        Some(Commands::Stats) => {
            show_stats(&store);
        }
        None => {
            run_interactive(store)?;
        }
    }

    Ok(())
}

fn list(
    store: &ContentStore,
    feature: Feature,
    query: &str,
    fields: &[String],
    json: bool,
) -> Result<()> {
    let view = FilteredView::with_fields(store, feature, query, fields)?;
    info!(feature = feature.id(), query, matched = view.len(), "listing collection");

    if json {
        let value = view.to_json().context("Failed to serialize records")?;
        let text = serde_json::to_string_pretty(&value).context("Failed to format JSON")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", feature.heading());
    println!("{}", "=".repeat(feature.heading().len()));

    let cards = build_cards(&view);
    if cards.is_empty() {
        println!("No matches");
        return Ok(());
    }

    for card in &cards {
        println!();
        println!("{}", card.to_plain_text());
        if card.connector {
            println!("   |");
            println!("   v");
        }
    }
    debug!(cards = cards.len(), "cards printed");

    Ok(())
}

fn show_stats(store: &ContentStore) {
    info!(records = store.total_len(), "showing stats");
    println!("Career Portal Content");
    println!("=====================");
    println!("Total records: {}", store.total_len());
    for feature in Feature::ALL {
        println!("  {}: {}", feature.title(), store.len_of(feature));
    }
}
