use crate::fit_to_width;
use crate::tui::app::App;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Pets filter strip
            Constraint::Min(5),    // Event table
            Constraint::Length(1), // Pagination controls
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_filter_strip(frame, app, chunks[1]);
    draw_table(frame, app, chunks[2]);
    draw_pagination(frame, app, chunks[3]);
    draw_status_bar(frame, app, chunks[4]);

    // Show cursor in search bar when focused
    if app.search.focused {
        // Account for border (1) + space (1) + search icon " \u{1F50D} " (approx 4 display cols)
        let prefix_width = app.search.query[..app.search.cursor_pos].width();
        let cursor_x = chunks[0].x + 1 + 4 + prefix_width as u16;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search by title or description ");

    let search_text = format!(" \u{1F50D} {}", app.search.query);
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_filter_strip(frame: &mut Frame, app: &App, area: Rect) {
    let label = app.view.pets_filter().label();
    let line = Line::from(vec![
        Span::styled(" Pets:", Style::default().fg(Color::Gray)),
        Span::styled(
            format!(" < {:^12} > ", label),
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(40, 40, 50)),
        ),
        Span::styled("  F2 to cycle", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    if app.view.is_empty() && !app.is_fetching {
        let msg = Paragraph::new("No events found.")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        // Drop it roughly a third of the way down the empty table area
        let y = area.y + (area.height / 3).max(1);
        let msg_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
        frame.render_widget(msg, msg_area);
        return;
    }

    let header_columns = [
        "Category",
        "Title",
        "Description",
        "Location",
        "Date",
        "Time",
        "Pets",
        "Organizer",
    ];

    let header = Row::new(header_columns.iter().map(|name| {
        Cell::from(*name).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 95, 135))
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let desc_width = (area.width as usize).saturating_sub(100).max(20);

    let rows: Vec<Row> = app
        .view
        .page_window()
        .iter()
        .enumerate()
        .map(|(visual_idx, event)| {
            // Alternating row background
            let bg = if visual_idx % 2 == 1 {
                Color::Rgb(25, 25, 35)
            } else {
                Color::Reset
            };

            let category_cell = Cell::from(event.category.clone()).style(
                Style::default()
                    .fg(colors::color_for_category(&event.category))
                    .bg(bg),
            );
            let title_cell = Cell::from(event.title.clone()).style(
                Style::default()
                    .fg(Color::White)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            );
            let desc_cell = Cell::from(fit_to_width(&event.description, desc_width))
                .style(Style::default().fg(Color::Gray).bg(bg));
            let location_cell = Cell::from(event.location.clone())
                .style(Style::default().fg(Color::Cyan).bg(bg));
            let date_cell = Cell::from(event.display_date())
                .style(Style::default().fg(Color::Green).bg(bg));
            let time_cell =
                Cell::from(event.time.clone()).style(Style::default().fg(Color::Green).bg(bg));
            let pets_cell = Cell::from(colors::pets_icon(event.pets_allowed))
                .style(Style::default().fg(Color::Magenta).bg(bg));
            let organizer_cell = Cell::from(event.organizer.clone()).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            );

            Row::new(vec![
                category_cell,
                title_cell,
                desc_cell,
                location_cell,
                date_cell,
                time_cell,
                pets_cell,
                organizer_cell,
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(22),
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(table, area);
}

fn draw_pagination(frame: &mut Frame, app: &App, area: Rect) {
    // Controls only exist when the filtered set spills past one page
    if !app.view.has_pagination() {
        return;
    }

    let page = app.view.page();
    let total = app.view.total_pages();

    let prev_style = if page > 1 {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let next_style = if page < total {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(" [\u{2190} Prev] ", prev_style),
        Span::styled(
            format!(" Page {} of {} ", page, total),
            Style::default().fg(Color::White),
        ),
        Span::styled(" [Next \u{2192}] ", next_style),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Left half of the status bar; the fetch notice wins only while the
/// fetch is still in flight, afterwards the live counts are the single
/// source of truth.
pub(crate) fn status_left(
    is_fetching: bool,
    status_message: &str,
    filtered: usize,
    total: usize,
    filter_label: &str,
) -> String {
    if is_fetching {
        format!(" \u{23F3} {}", status_message)
    } else {
        format!(" {} of {} events | {}", filtered, total, filter_label)
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = status_left(
        app.is_fetching,
        &app.status_message,
        app.view.filtered_count(),
        app.view.total_count(),
        app.view.pets_filter().label(),
    );

    let right_text = " Tab:Search  \u{2190}\u{2192}:Page  F2:Pets Filter  Esc/Ctrl+Q:Quit ";

    // Build the status line: left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135)));

    frame.render_widget(status, area);
}
