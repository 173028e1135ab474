//! Event record model and filter predicates
//!
//! Records arrive from the remote endpoint as a JSON array of camelCase
//! objects and are treated as immutable once fetched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One event listing as served by the remote endpoint.
///
/// `id` is assumed unique by the server and is only used as a display
/// field; nothing here enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub category: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub pets_allowed: bool,
    pub organizer: String,
}

impl Event {
    /// Parse the `date` field (YYYY-MM-DD) for friendlier display.
    /// Returns None for anything the endpoint sends that doesn't parse;
    /// callers fall back to the verbatim string.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Date formatted like "Sat, Aug 14 2021", or the raw field if it
    /// doesn't parse.
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(d) => d.format("%a, %b %-d %Y").to_string(),
            None => self.date.clone(),
        }
    }

    pub fn pets_label(&self) -> &'static str {
        if self.pets_allowed {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Tri-state pets-allowed selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetsFilter {
    #[default]
    All,
    Yes,
    No,
}

impl PetsFilter {
    pub fn label(&self) -> &'static str {
        match self {
            PetsFilter::All => "All Events",
            PetsFilter::Yes => "Pets Allowed",
            PetsFilter::No => "No Pets",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            PetsFilter::All => PetsFilter::Yes,
            PetsFilter::Yes => PetsFilter::No,
            PetsFilter::No => PetsFilter::All,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            PetsFilter::All => PetsFilter::No,
            PetsFilter::Yes => PetsFilter::All,
            PetsFilter::No => PetsFilter::Yes,
        }
    }

    /// Does this selector pass the given record through?
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            PetsFilter::All => true,
            PetsFilter::Yes => event.pets_allowed,
            PetsFilter::No => !event.pets_allowed,
        }
    }
}

impl std::str::FromStr for PetsFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(PetsFilter::All),
            "yes" => Ok(PetsFilter::Yes),
            "no" => Ok(PetsFilter::No),
            other => Err(format!("expected all, yes or no, got '{}'", other)),
        }
    }
}

/// Case-insensitive substring match against title OR description.
///
/// A query that is blank after trimming matches everything; otherwise the
/// full (untrimmed) query is lowercased and used as the needle.
pub fn matches_query(event: &Event, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    event.title.to_lowercase().contains(&needle)
        || event.description.to_lowercase().contains(&needle)
}
