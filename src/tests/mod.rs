use crate::events::{matches_query, Event, PetsFilter};
use crate::export::{write_csv, ExportFormat, OutputFormat};
use crate::view::{ListView, PAGE_SIZE};

fn event(id: u64, title: &str, description: &str, pets_allowed: bool) -> Event {
    Event {
        id,
        category: "community".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: "Town Hall".to_string(),
        date: "2021-08-14".to_string(),
        time: "12:00".to_string(),
        pets_allowed,
        organizer: "Parks Dept".to_string(),
    }
}

/// Seven records, three of them pets-allowed.
fn sample_events() -> Vec<Event> {
    vec![
        event(1, "Park Cleanup", "Tidy up the north park", true),
        event(2, "Beach Day", "Sandcastles and sunscreen", false),
        event(3, "Adopt a Puppy", "Meet dogs looking for a home", true),
        event(4, "Food Drive", "Collect canned goods", false),
        event(5, "Tree Planting", "Saplings along the river", true),
        event(6, "Book Swap", "Bring one, take one", false),
        event(7, "Night Market", "Local vendors and street food", false),
    ]
}

#[test]
fn query_matches_title_or_description_case_insensitive() {
    let events = sample_events();
    assert!(matches_query(&events[0], "park"));
    assert!(matches_query(&events[0], "PARK"));
    // "Beach Day" has no "park" in title or description
    assert!(!matches_query(&events[1], "park"));
    // Description-only hit
    assert!(matches_query(&events[2], "dogs"));
}

#[test]
fn blank_query_matches_everything() {
    let events = sample_events();
    assert!(matches_query(&events[1], ""));
    assert!(matches_query(&events[1], "   "));
}

#[test]
fn filtered_set_is_subset_satisfying_both_predicates() {
    let mut view = ListView::new();
    view.set_events(sample_events());

    for (query, pets) in [
        ("", PetsFilter::All),
        ("park", PetsFilter::All),
        ("", PetsFilter::Yes),
        ("a", PetsFilter::No),
        ("zzz-no-match", PetsFilter::Yes),
    ] {
        view.set_query(query);
        view.set_pets_filter(pets);

        assert!(view.filtered_count() <= view.total_count());
        for e in view.filtered_events() {
            assert!(matches_query(e, query));
            assert!(pets.matches(e));
        }
    }
}

#[test]
fn query_change_resets_page() {
    let mut view = ListView::new();
    view.set_events(sample_events());
    view.next_page();
    assert_eq!(view.page(), 2);

    view.set_query("a");
    assert_eq!(view.page(), 1);
}

#[test]
fn pets_filter_change_resets_page() {
    let mut view = ListView::new();
    view.set_events(sample_events());
    view.next_page();
    assert_eq!(view.page(), 2);

    view.set_pets_filter(PetsFilter::No);
    assert_eq!(view.page(), 1);

    view.set_page(1);
    view.cycle_pets_filter();
    assert_eq!(view.page(), 1);
}

#[test]
fn seven_events_split_five_and_two() {
    let mut view = ListView::new();
    view.set_events(sample_events());

    assert_eq!(view.total_pages(), 2);
    assert!(view.has_pagination());

    let first: Vec<u64> = view.page_window().iter().map(|e| e.id).collect();
    assert_eq!(first, vec![1, 2, 3, 4, 5]);

    view.next_page();
    let second: Vec<u64> = view.page_window().iter().map(|e| e.id).collect();
    assert_eq!(second, vec![6, 7]);

    // Next is a no-op on the last page
    view.next_page();
    assert_eq!(view.page(), 2);
}

#[test]
fn prev_is_noop_on_first_page() {
    let mut view = ListView::new();
    view.set_events(sample_events());

    view.prev_page();
    assert_eq!(view.page(), 1);
}

#[test]
fn page_window_is_full_except_last() {
    let mut view = ListView::new();
    view.set_events(sample_events());

    let pages = view.total_pages();
    for p in 1..=pages {
        view.set_page(p);
        let len = view.page_window().len();
        assert!(len <= PAGE_SIZE);
        if p < pages {
            assert_eq!(len, PAGE_SIZE);
        }
    }
}

#[test]
fn pets_yes_fits_one_page_without_pagination() {
    let mut view = ListView::new();
    view.set_events(sample_events());
    view.set_pets_filter(PetsFilter::Yes);

    let ids: Vec<u64> = view.page_window().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);
    assert_eq!(view.total_pages(), 1);
    assert!(!view.has_pagination());
}

#[test]
fn empty_collection_has_no_pages() {
    let mut view = ListView::new();
    view.set_events(Vec::new());

    assert!(view.is_empty());
    assert_eq!(view.total_pages(), 0);
    assert!(view.page_window().is_empty());

    // Paging is inert while empty
    view.next_page();
    view.prev_page();
    assert_eq!(view.page(), 1);
}

#[test]
fn set_page_clamps_into_range() {
    let mut view = ListView::new();
    view.set_events(sample_events());

    view.set_page(99);
    assert_eq!(view.page(), 2);
    view.set_page(0);
    assert_eq!(view.page(), 1);
}

#[test]
fn pets_filter_cycles_and_parses() {
    assert_eq!(PetsFilter::All.next(), PetsFilter::Yes);
    assert_eq!(PetsFilter::Yes.next(), PetsFilter::No);
    assert_eq!(PetsFilter::No.next(), PetsFilter::All);
    assert_eq!(PetsFilter::All.prev(), PetsFilter::No);

    assert_eq!("yes".parse::<PetsFilter>().unwrap(), PetsFilter::Yes);
    assert_eq!("ALL".parse::<PetsFilter>().unwrap(), PetsFilter::All);
    assert!("maybe".parse::<PetsFilter>().is_err());
}

#[test]
fn csv_keeps_prose_dates_in_one_column() {
    let mut e = event(123, "Cat Adoption Day", "Find your new feline friend.", true);
    e.category = "animal welfare".to_string();
    e.location = "Meow Town".to_string();
    // The real endpoint serves prose dates with embedded commas
    e.date = "January 28, 2022".to_string();
    e.organizer = "Kat Laydee".to_string();

    let mut out = Vec::new();
    write_csv(&mut out, &[&e]).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    let header = lines.next().unwrap();
    assert_eq!(header.split(',').count(), 9);

    let row = lines.next().unwrap();
    assert_eq!(
        row,
        "123,\"animal welfare\",\"Cat Adoption Day\",\"Find your new feline friend.\",\
         \"Meow Town\",\"January 28, 2022\",\"12:00\",true,\"Kat Laydee\""
    );
    // Splitting on unquoted commas only must yield exactly the 9 columns
    let naive_splits = row.split(',').count();
    let quoted_commas = 1; // the one inside "January 28, 2022"
    assert_eq!(naive_splits - quoted_commas, 9);
}

#[test]
fn csv_escapes_embedded_quotes() {
    let mut e = event(1, "Say \"hi\"", "desc", false);
    e.organizer = "The \"A\" Team".to_string();

    let mut out = Vec::new();
    write_csv(&mut out, &[&e]).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("\"Say \"\"hi\"\"\""));
    assert!(text.contains("\"The \"\"A\"\" Team\""));
}

#[test]
fn status_line_uses_counts_once_fetch_settles() {
    use crate::tui::ui::status_left;

    // In flight: the fetch notice wins
    let fetching = status_left(true, "Fetching events...", 0, 0, "All Events");
    assert!(fetching.contains("Fetching events..."));

    // Settled (success or failure): counts only, stale fetch text ignored
    let settled = status_left(false, "Fetching events...", 3, 7, "Pets Allowed");
    assert_eq!(settled, " 3 of 7 events | Pets Allowed");
    assert!(!settled.contains("Fetching"));
}

#[test]
fn output_and_export_formats_parse_strictly() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("bogus".parse::<OutputFormat>().is_err());

    assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert!("yaml".parse::<ExportFormat>().is_err());
}

#[test]
fn fetch_errors_are_classified() {
    use crate::error::EvlistError;

    assert!(EvlistError::Status(404).is_fetch_error());
    assert!(EvlistError::Http("http://x".into(), "timed out".into()).is_fetch_error());
    let io = EvlistError::Io(std::io::Error::other("disk"));
    assert!(!io.is_fetch_error());
}

#[test]
fn decodes_endpoint_payload() {
    let body = r#"[
        {
            "id": 123,
            "category": "animal welfare",
            "title": "Cat Adoption Day",
            "description": "Find your new feline friend at this event.",
            "location": "Meow Town",
            "date": "January 28, 2022",
            "time": "12:00",
            "petsAllowed": true,
            "organizer": "Kat Laydee"
        }
    ]"#;

    let events: Vec<Event> = serde_json::from_str(body).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, 123);
    assert!(events[0].pets_allowed);
    assert_eq!(events[0].category, "animal welfare");
    // Unparseable dates fall back to the raw string
    assert_eq!(events[0].display_date(), "January 28, 2022");
}

#[test]
fn display_date_formats_iso_dates() {
    let e = event(1, "Park Cleanup", "Tidy up", true);
    assert_eq!(e.display_date(), "Sat, Aug 14 2021");
}

#[test]
fn fit_to_width_truncates_on_display_columns() {
    assert_eq!(crate::fit_to_width("short", 10), "short");
    let cut = crate::fit_to_width("a rather long description", 10);
    assert!(cut.ends_with('\u{2026}'));
    assert!(cut.chars().count() <= 10);
    assert_eq!(crate::fit_to_width("anything", 0), "");
}
