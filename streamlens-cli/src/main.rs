//! streamlens CLI
//!
//! Command-line interface for analytical queries over a streaming title
//! catalog dataset.

mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use streamlens_catalog::CatalogTitle;
use streamlens_data::{TitleStore, settings};
use streamlens_query::{FieldCount, SEARCH_CAP};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "streamlens")]
#[command(about = "Analytical queries over a streaming title catalog", long_about = None)]
struct Cli {
    /// Dataset CSV path (overrides environment and saved settings)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overall catalog statistics
    Summary,

    /// Top countries by title count
    ByCountry {
        /// Number of countries to show
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=50))]
        top: u32,
    },

    /// Top genres by title count
    ByGenre {
        /// Number of genres to show
        #[arg(short, long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=100))]
        top: u32,
    },

    /// Title counts per release year
    ByYear {
        /// Earliest release year to include (inclusive)
        #[arg(short, long)]
        start: Option<i32>,

        /// Latest release year to include (inclusive)
        #[arg(short, long)]
        end: Option<i32>,
    },

    /// Search titles by text, optionally restricted to one category
    Search {
        /// Text matched against title, director, cast, genres, and description
        #[arg(default_value = "")]
        query: String,

        /// Category label to match exactly (e.g. "Movie", "TV Show")
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file contents
    Show,

    /// Save the dataset CSV path
    SetPath {
        /// Path to the catalog CSV file
        path: PathBuf,
    },

    /// Remove the saved dataset CSV path
    ClearPath,

    /// Print the settings file path
    Path,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary => run_summary(cli.csv, cli.json),
        Commands::ByCountry { top } => run_by_country(cli.csv, cli.json, top as usize),
        Commands::ByGenre { top } => run_by_genre(cli.csv, cli.json, top as usize),
        Commands::ByYear { start, end } => run_by_year(cli.csv, cli.json, start, end),
        Commands::Search { query, kind } => run_search(cli.csv, cli.json, &query, kind.as_deref()),
        Commands::Config { action } => run_config(action),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Create a store for the resolved dataset path.
fn open_store(csv_override: Option<PathBuf>) -> TitleStore {
    TitleStore::new(settings::resolve_csv_path(csv_override))
}

/// Load the dataset behind a spinner, since the first access may fall back
/// to a remote fetch.
fn load_titles(store: &TitleStore) -> Result<&[CatalogTitle], CliError> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );
    pb.set_message("Loading catalog dataset...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = store.titles();
    pb.finish_and_clear();
    result.map_err(|e| CliError::data(e.to_string()))
}

/// Render an optional value, showing "n/a" when absent.
fn fmt_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}

/// Run the summary command.
fn run_summary(csv: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let store = open_store(csv);
    let titles = load_titles(&store)?;
    let summary = streamlens_query::summary(titles);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{}",
        "Catalog Summary".if_supports_color(Stdout, |t| t.bold()),
    );
    println!(
        "  Dataset: {}",
        store
            .csv_path()
            .display()
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!();
    println!("  Titles:         {:>6}", summary.total_titles);
    println!("  Movies:         {:>6}", summary.movies);
    println!("  TV shows:       {:>6}", summary.tv_shows);
    println!(
        "  Release years:  {} to {}",
        fmt_opt(&summary.earliest_release_year),
        fmt_opt(&summary.latest_release_year),
    );
    println!("  First added:    {}", fmt_opt(&summary.first_added_date));
    println!("  Last added:     {}", fmt_opt(&summary.last_added_date));

    Ok(())
}

/// Run the by-country command.
fn run_by_country(csv: Option<PathBuf>, json: bool, top: usize) -> Result<(), CliError> {
    let store = open_store(csv);
    let titles = load_titles(&store)?;
    let counts = streamlens_query::count_by_country(titles, top);
    print_counts("Top countries", &counts, json)
}

/// Run the by-genre command.
fn run_by_genre(csv: Option<PathBuf>, json: bool, top: usize) -> Result<(), CliError> {
    let store = open_store(csv);
    let titles = load_titles(&store)?;
    let counts = streamlens_query::count_by_genre(titles, top);
    print_counts("Top genres", &counts, json)
}

/// Print a ranked count list.
fn print_counts(heading: &str, counts: &[FieldCount], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(counts)?);
        return Ok(());
    }

    if counts.is_empty() {
        println!(
            "{}",
            "No data.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    println!("{}", heading.if_supports_color(Stdout, |t| t.bold()));
    println!();
    for (i, entry) in counts.iter().enumerate() {
        println!(
            "  {:>3}. {} {:>6}",
            i + 1,
            format!("{:<32}", entry.name).if_supports_color(Stdout, |t| t.cyan()),
            entry.count,
        );
    }

    Ok(())
}

/// Run the by-year command.
fn run_by_year(
    csv: Option<PathBuf>,
    json: bool,
    start: Option<i32>,
    end: Option<i32>,
) -> Result<(), CliError> {
    let store = open_store(csv);
    let titles = load_titles(&store)?;
    let years = streamlens_query::count_by_year(titles, start, end);

    if json {
        println!("{}", serde_json::to_string_pretty(&years)?);
        return Ok(());
    }

    if years.is_empty() {
        println!(
            "{}",
            "No titles in range.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    println!(
        "{}",
        "Titles by release year".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();
    for entry in &years {
        println!("  {}  {:>6}", entry.year, entry.count);
    }

    Ok(())
}

/// Run the search command.
fn run_search(
    csv: Option<PathBuf>,
    json: bool,
    query: &str,
    kind: Option<&str>,
) -> Result<(), CliError> {
    let store = open_store(csv);
    let titles = load_titles(&store)?;
    let hits = streamlens_query::search(titles, query, kind);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!(
            "{}",
            "No matching titles.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for hit in &hits {
        println!(
            "  {} {} {}",
            format!("{}:", hit.id).if_supports_color(Stdout, |t| t.dimmed()),
            hit.title.if_supports_color(Stdout, |t| t.bold()),
            format!("({}) [{}]", fmt_opt(&hit.release_year), hit.kind)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        if let Some(date) = hit.date_added {
            println!(
                "    {}    {}",
                "Added:".if_supports_color(Stdout, |t| t.cyan()),
                date,
            );
        }
        if !hit.country.is_empty() {
            println!(
                "    {}  {}",
                "Country:".if_supports_color(Stdout, |t| t.cyan()),
                hit.country,
            );
        }
        if !hit.rating.is_empty() || !hit.duration.is_empty() {
            println!(
                "    {}   {} {}",
                "Rating:".if_supports_color(Stdout, |t| t.cyan()),
                hit.rating,
                hit.duration,
            );
        }
        if !hit.listed_in.is_empty() {
            println!(
                "    {}   {}",
                "Genres:".if_supports_color(Stdout, |t| t.cyan()),
                hit.listed_in,
            );
        }
        if !hit.description.is_empty() {
            println!(
                "    {}",
                hit.description.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        println!();
    }

    if hits.len() == SEARCH_CAP {
        println!(
            "{}",
            format!("Showing the first {SEARCH_CAP} matches")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Run the config command.
fn run_config(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            match settings::load_settings_string() {
                Some(contents) => print!("{contents}"),
                None => println!(
                    "{}",
                    "No settings file.".if_supports_color(Stdout, |t| t.dimmed()),
                ),
            }
            Ok(())
        }
        ConfigAction::SetPath { path } => {
            settings::save_csv_path(Some(&path))?;
            println!(
                "{} Dataset path saved: {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
            Ok(())
        }
        ConfigAction::ClearPath => {
            settings::save_csv_path(None)?;
            println!(
                "{} Saved dataset path removed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", settings::settings_path().display());
            Ok(())
        }
    }
}
