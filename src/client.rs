//! Remote event endpoint client
//!
//! One blocking GET against a fixed read-only endpoint. There is no retry,
//! no caching and no server-side filtering; the whole collection comes down
//! in a single response and everything else happens client-side.

use std::time::Duration;

use crate::error::{EvlistError, Result};
use crate::events::Event;
use crate::logging;

/// The read-only endpoint serving the event collection.
pub const DEFAULT_EVENTS_URL: &str =
    "https://my-json-server.typicode.com/Code-Pop/Touring-Vue-Router/events";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Fetch the full event collection from `url`.
pub fn fetch_events(url: &str) -> Result<Vec<Event>> {
    logging::info("CLIENT", &format!("Fetching events from {}", url));

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("evlist/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| EvlistError::Http(url.to_string(), e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| EvlistError::Http(url.to_string(), e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(EvlistError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| EvlistError::Http(url.to_string(), e.to_string()))?;

    let events: Vec<Event> = serde_json::from_str(&body)?;

    logging::info("CLIENT", &format!("Fetched {} events", events.len()));
    Ok(events)
}
