//! Operations console: record search, filters, and the detail panel.

use crate::state::{App, InputFocus};
use crate::theme::{bucket_color, direction_color, risk_color};
use crate::views::two_column;
use crate::widgets::{FilterBar, FilterOption};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filter_bar(f, app, layout[0]);

    let (list_area, detail_area) = two_column(layout[1], 45);
    render_record_list(f, app, list_area);
    render_record_detail(f, app, detail_area);
}

fn render_filter_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let query_label = if app.operations.query.is_empty() && app.input_focus != InputFocus::Search {
        "/ search".to_string()
    } else {
        format!("/ {}", app.operations.query)
    };
    let date_label = match (&app.operations.search_date, app.input_focus) {
        (_, InputFocus::Date) => format!("d {}", app.operations.date_input),
        (Some(date), _) => format!("d {}", date),
        (None, _) => "d date".to_string(),
    };
    let bucket_label = match app.operations.bucket {
        Some(bucket) => format!("b {}", bucket),
        None => "b all".to_string(),
    };

    let filters = [
        FilterOption::new(
            query_label,
            !app.operations.query.is_empty() || app.input_focus == InputFocus::Search,
        ),
        FilterOption::new(
            date_label,
            app.operations.search_date.is_some() || app.input_focus == InputFocus::Date,
        ),
        FilterOption::new(bucket_label, app.operations.bucket.is_some()),
    ];

    FilterBar {
        title: "Filters (c clears)",
        filters: &filters,
        active_style: Style::default()
            .fg(app.theme.bg)
            .bg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
        inactive_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, area);
}

fn render_record_list(f: &mut Frame<'_>, app: &App, area: Rect) {
    let visible = app.visible_records();
    let noun = app.profile().entity_noun;

    if visible.is_empty() {
        let placeholder = Paragraph::new(format!("No {}s found.", noun.to_lowercase()))
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Records").borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", record.record_id),
                    Style::default().fg(app.theme.text),
                ),
                Span::styled(
                    format!("{:<20}", record.contact_name),
                    Style::default().fg(app.theme.text_dim),
                ),
                Span::styled(
                    record.status.to_string(),
                    Style::default().fg(bucket_color(record.status.bucket(), &app.theme)),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if let Some(id) = app.operations.selected.as_deref() {
        if let Some(index) = visible.iter().position(|r| r.record_id == id) {
            state.select(Some(index));
        }
    }

    let title = format!("Records ({})", visible.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, area, &mut state);
}

fn render_record_detail(f: &mut Frame<'_>, app: &App, area: Rect) {
    let record = match app.selected_record() {
        Some(record) => record,
        None => {
            let hint = Paragraph::new("j/k to select, Enter to open, a for actions")
                .style(Style::default().fg(app.theme.text_dim))
                .block(Block::default().title("Detail").borders(Borders::ALL));
            f.render_widget(hint, area);
            return;
        }
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    let noun = app.profile().entity_noun;
    let risk = record.risk_score.get();
    let fields = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", noun), Style::default().fg(app.theme.secondary)),
            Span::raw(record.contact_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Phone: ", Style::default().fg(app.theme.secondary)),
            Span::raw(record.phone.clone()),
        ]),
        Line::from(vec![
            Span::styled("Slot: ", Style::default().fg(app.theme.secondary)),
            Span::raw(record.slot.clone()),
        ]),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(app.theme.secondary)),
            Span::raw(record.date.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(app.theme.secondary)),
            Span::styled(
                record.status.to_string(),
                Style::default().fg(bucket_color(record.status.bucket(), &app.theme)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Risk: ", Style::default().fg(app.theme.secondary)),
            Span::styled(
                record.risk_score.to_string(),
                Style::default().fg(risk_color(risk, &app.theme)),
            ),
        ]),
    ];
    let header = Paragraph::new(fields)
        .block(
            Block::default()
                .title(record.record_id.as_str())
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(header, rows[0]);

    let timeline_lines: Vec<Line> = record
        .timeline
        .iter()
        .flat_map(|ev| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:<10}", ev.at),
                    Style::default().fg(app.theme.text_dim),
                ),
                Span::styled(
                    format!("{:<9}", ev.direction.to_string()),
                    Style::default().fg(direction_color(ev.direction, &app.theme)),
                ),
                Span::styled(
                    format!("{:<12}", ev.action),
                    Style::default().fg(app.theme.text),
                ),
                Span::raw(ev.message.clone()),
            ])];
            if let Some(decision) = &ev.decision {
                lines.push(Line::from(Span::styled(
                    format!(
                        "           └ {} ({} by {})",
                        decision.reason, decision.confidence, decision.agent
                    ),
                    Style::default().fg(app.theme.text_dim),
                )));
            }
            lines
        })
        .collect();
    let timeline = Paragraph::new(timeline_lines)
        .block(Block::default().title("Timeline").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(timeline, rows[1]);

    let notes = if record.notes.is_empty() {
        "—".to_string()
    } else {
        record.notes.join(" • ")
    };
    let notes_widget = Paragraph::new(notes)
        .style(Style::default().fg(app.theme.text_dim))
        .block(Block::default().title("Notes").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(notes_widget, rows[2]);
}
