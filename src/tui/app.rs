use crate::client;
use crate::events::Event;
use crate::logging;
use crate::tui::search::SearchState;
use crate::tui::ui;
use crate::view::ListView;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Messages from the background fetch thread
pub enum BgMessage {
    FetchComplete(Vec<Event>),
    FetchError(String),
}

pub struct App {
    // Data
    pub view: ListView,

    // Sub-states
    pub search: SearchState,

    // Fetch state
    pub is_fetching: bool,
    pub status_message: String,

    // Channel
    bg_receiver: Option<Receiver<BgMessage>>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(url: String) -> Self {
        let mut app = Self {
            view: ListView::new(),
            search: SearchState::default(),
            is_fetching: false,
            status_message: "Ready".to_string(),
            bg_receiver: None,
            should_quit: false,
        };

        app.start_fetch(url);
        app
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend<Error = std::io::Error>>) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(TermEvent::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                if self.search.needs_filter {
                    self.view.set_query(&self.search.query);
                    self.search.needs_filter = false;
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// One fetch, once, at startup. No retry.
    fn start_fetch(&mut self, url: String) {
        if self.is_fetching {
            return;
        }

        self.is_fetching = true;
        self.status_message = "Fetching events...".to_string();

        let (tx, rx) = channel();
        self.bg_receiver = Some(rx);

        thread::spawn(move || match client::fetch_events(&url) {
            Ok(events) => {
                let _ = tx.send(BgMessage::FetchComplete(events));
            }
            Err(e) => {
                let _ = tx.send(BgMessage::FetchError(e.to_string()));
            }
        });
    }

    fn process_messages(&mut self) {
        let rx = match &self.bg_receiver {
            Some(rx) => rx,
            None => return,
        };

        while let Ok(msg) = rx.try_recv() {
            match msg {
                BgMessage::FetchComplete(events) => {
                    self.view.set_events(events);
                    self.is_fetching = false;
                }
                BgMessage::FetchError(msg) => {
                    // Logged and swallowed; the view stays empty, the table
                    // renders "No events found." and the status bar falls
                    // back to the live counts.
                    logging::error("TUI", &format!("Fetch failed: {}", msg));
                    self.is_fetching = false;
                }
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    self.search.query.clear();
                    self.search.cursor_pos = 0;
                    self.search.needs_filter = true;
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::F(2) => {
                self.view.cycle_pets_filter();
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.search.query.insert(self.search.cursor_pos, c);
                self.search.cursor_pos += c.len_utf8();
                self.search.needs_filter = true;
            }
            KeyCode::Backspace => {
                if self.search.cursor_pos > 0 {
                    // Find the previous character boundary
                    let prev = self.search.query[..self.search.cursor_pos]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.search.query.remove(prev);
                    self.search.cursor_pos = prev;
                    self.search.needs_filter = true;
                }
            }
            KeyCode::Delete => {
                if self.search.cursor_pos < self.search.query.len() {
                    self.search.query.remove(self.search.cursor_pos);
                    self.search.needs_filter = true;
                }
            }
            KeyCode::Left => {
                if self.search.cursor_pos > 0 {
                    let prev = self.search.query[..self.search.cursor_pos]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.search.cursor_pos = prev;
                }
            }
            KeyCode::Right => {
                if self.search.cursor_pos < self.search.query.len() {
                    let next = self.search.query[self.search.cursor_pos..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.search.cursor_pos + i)
                        .unwrap_or(self.search.query.len());
                    self.search.cursor_pos = next;
                }
            }
            KeyCode::Home => {
                self.search.cursor_pos = 0;
            }
            KeyCode::End => {
                self.search.cursor_pos = self.search.query.len();
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n') => self.view.next_page(),
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p') => self.view.prev_page(),
            KeyCode::Home => self.view.set_page(1),
            KeyCode::End => {
                let last = self.view.total_pages();
                self.view.set_page(last.max(1));
            }

            KeyCode::Char('f') => self.view.cycle_pets_filter(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.query.push(c);
                self.search.cursor_pos = self.search.query.len();
                self.search.needs_filter = true;
            }

            _ => {}
        }
    }
}
