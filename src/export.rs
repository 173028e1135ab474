//! Output formats and file writers for the filtered set
//!
//! The endpoint serves prose dates like "January 28, 2022", so every
//! string-ish column, date and time included, must be quoted or the
//! embedded comma shifts the remaining fields of the row.

use std::io::Write;

use crate::events::Event;

/// How `list` prints its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("expected text or json, got '{}'", other)),
        }
    }
}

/// How `export` writes the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("expected json or csv, got '{}'", other)),
        }
    }
}

/// Write the records as CSV, one row per record plus a header.
pub fn write_csv<W: Write>(out: &mut W, events: &[&Event]) -> std::io::Result<()> {
    writeln!(
        out,
        "Id,Category,Title,Description,Location,Date,Time,PetsAllowed,Organizer"
    )?;
    for event in events {
        writeln!(
            out,
            "{},\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",{},\"{}\"",
            event.id,
            csv_escape(&event.category),
            csv_escape(&event.title),
            csv_escape(&event.description),
            csv_escape(&event.location),
            csv_escape(&event.date),
            csv_escape(&event.time),
            event.pets_allowed,
            csv_escape(&event.organizer)
        )?;
    }
    Ok(())
}

fn csv_escape(field: &str) -> String {
    field.replace('"', "\"\"")
}
