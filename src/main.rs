//! evlist CLI
//!
//! Command-line interface for the event browser.
//! Provides both one-shot listing commands and an interactive TUI mode.

use clap::{Parser, Subcommand};
use console::style;
use evlist::{
    fetch_events, fit_to_width, ExportFormat, ListView, OutputFormat, PetsFilter,
    DEFAULT_EVENTS_URL,
};
use indicatif::HumanDuration;
use std::io::Write;
use std::time::Instant;

/// evlist - Terminal browser for a remote community event listing
///
/// Fetches the event collection once from a read-only JSON endpoint and
/// searches, filters and pages through it entirely client-side.
#[derive(Parser)]
#[command(name = "evlist")]
#[command(author = "evlist Contributors")]
#[command(version)]
#[command(about = "Browse a remote community event listing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse events interactively in the terminal
    Browse {
        /// Endpoint serving the event collection
        #[arg(long, default_value = DEFAULT_EVENTS_URL)]
        url: String,
    },

    /// Fetch events and print one page
    List {
        /// Search text matched against title or description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Pets-allowed filter (all, yes, no)
        #[arg(short, long, default_value = "all")]
        pets: PetsFilter,

        /// Page to show (1-based, clamped into range)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Endpoint serving the event collection
        #[arg(long, default_value = DEFAULT_EVENTS_URL)]
        url: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Export the filtered event set to a file
    Export {
        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Search text matched against title or description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Pets-allowed filter (all, yes, no)
        #[arg(short, long, default_value = "all")]
        pets: PetsFilter,

        /// Endpoint serving the event collection
        #[arg(long, default_value = DEFAULT_EVENTS_URL)]
        url: String,
    },
}

fn main() {
    // Initialize logging
    evlist::logging::init();
    evlist::logging::info("MAIN", "evlist starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Browse { url } => evlist::tui::run(&url),

        Commands::List {
            search,
            pets,
            page,
            url,
            output,
        } => cmd_list(&search, pets, page, &url, output),

        Commands::Export {
            output,
            format,
            search,
            pets,
            url,
        } => cmd_export(&output, format, &search, pets, &url),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        if e.is_fetch_error() {
            eprintln!("Check the network connection or pass a different --url.");
        }
        std::process::exit(1);
    }
}

/// List command implementation
fn cmd_list(
    search: &str,
    pets: PetsFilter,
    page: usize,
    url: &str,
    output_format: OutputFormat,
) -> evlist::Result<()> {
    let start = Instant::now();

    if output_format != OutputFormat::Json {
        println!(
            "{} Fetching events from {}",
            style("→").cyan().bold(),
            style(url).yellow()
        );
    }

    let events = fetch_events(url)?;
    let elapsed = start.elapsed();

    let mut view = ListView::new();
    view.set_events(events);
    view.set_query(search);
    view.set_pets_filter(pets);
    view.set_page(page);

    if output_format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({
                "page": view.page(),
                "total_pages": view.total_pages(),
                "filtered": view.filtered_count(),
                "total": view.total_count(),
                "events": view.page_window(),
            })
        );
        return Ok(());
    }

    println!(
        "{} Fetched {} events in {}",
        style("✓").green().bold(),
        view.total_count(),
        style(HumanDuration(elapsed)).cyan()
    );
    println!();

    if view.is_empty() {
        println!("  No events found.");
        return Ok(());
    }

    for event in view.page_window() {
        println!(
            "  {} {}",
            style(format!("[{}]", event.category)).magenta(),
            style(&event.title).bold()
        );
        println!("      {}", fit_to_width(&event.description, 70));
        println!(
            "      {} {} {} | Pets: {} | {}",
            style("at").dim(),
            style(&event.location).cyan(),
            style(format!("on {} {}", event.display_date(), event.time)).green(),
            event.pets_label(),
            style(&event.organizer).dim()
        );
        println!();
    }

    println!(
        "  Page {} of {} ({} of {} events match)",
        style(view.page()).bold(),
        view.total_pages(),
        view.filtered_count(),
        view.total_count()
    );

    Ok(())
}

/// Export command implementation
fn cmd_export(
    output: &str,
    format: ExportFormat,
    search: &str,
    pets: PetsFilter,
    url: &str,
) -> evlist::Result<()> {
    println!(
        "{} Exporting events to {}",
        style("→").cyan().bold(),
        style(output).yellow()
    );

    let events = fetch_events(url)?;

    let mut view = ListView::new();
    view.set_events(events);
    view.set_query(search);
    view.set_pets_filter(pets);

    let filtered = view.filtered_events();
    let mut file = std::fs::File::create(output)?;

    match format {
        ExportFormat::Csv => {
            evlist::export::write_csv(&mut file, &filtered)?;
        }
        ExportFormat::Json => {
            let body = serde_json::to_string_pretty(&filtered)?;
            writeln!(file, "{}", body)?;
        }
    }

    println!(
        "{} Exported {} events to {}",
        style("✓").green().bold(),
        filtered.len(),
        output
    );

    Ok(())
}
