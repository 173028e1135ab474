//! evlist - Terminal browser for a remote community event listing
//!
//! Pulls the event collection from a read-only JSON endpoint once, then
//! does everything client-side: case-insensitive search over title and
//! description, a tri-state pets-allowed filter, and fixed-size paging
//! over the filtered set.
//!
//! # Example
//!
//! ```no_run
//! use evlist::{fetch_events, ListView, PetsFilter, DEFAULT_EVENTS_URL};
//!
//! fn main() -> evlist::Result<()> {
//!     let events = fetch_events(DEFAULT_EVENTS_URL)?;
//!
//!     let mut view = ListView::new();
//!     view.set_events(events);
//!     view.set_query("park");
//!     view.set_pets_filter(PetsFilter::Yes);
//!
//!     for event in view.page_window() {
//!         println!("{}: {} @ {}", event.category, event.title, event.location);
//!     }
//!     println!("Page {} of {}", view.page(), view.total_pages());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod events;
pub mod export;
pub mod logging;
pub mod tui;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export main types
pub use client::{fetch_events, DEFAULT_EVENTS_URL};
pub use error::{EvlistError, Result};
pub use events::{matches_query, Event, PetsFilter};
pub use export::{ExportFormat, OutputFormat};
pub use view::{ListView, PAGE_SIZE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Trim a string to at most `max` display columns, appending an ellipsis
/// when anything was cut. Width is measured in terminal columns, not
/// chars, so wide glyphs count double.
pub fn fit_to_width(text: &str, max: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if max == 0 {
        return String::new();
    }

    let mut width = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            let mut cut: String = text[..i].to_string();
            // Make room for the ellipsis
            while !cut.is_empty() {
                let total: usize = cut.chars().filter_map(|c| c.width()).sum();
                if total + 1 <= max {
                    break;
                }
                cut.pop();
            }
            cut.push('\u{2026}');
            return cut;
        }
        width += w;
    }

    text.to_string()
}
