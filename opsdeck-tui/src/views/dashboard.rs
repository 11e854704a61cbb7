//! Dashboard view: four-deep drill-down from summary to conversations.

use crate::state::App;
use crate::theme::{bucket_color, direction_color, risk_color};
use crate::views::two_column;
use crate::widgets::{DetailPanel, RatioGauge, StatusBadge};
use opsdeck_core::{total_conversion_rate, StatusBucket};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_breadcrumb(f, app, layout[0]);

    match app.dashboard.level.as_u8() {
        1 => render_summary(f, app, layout[1]),
        2 => render_capacity(f, app, layout[1]),
        3 => render_channels(f, app, layout[1]),
        _ => render_conversations(f, app, layout[1]),
    }
}

fn render_breadcrumb(f: &mut Frame<'_>, app: &App, area: Rect) {
    let level = app.dashboard.level;
    let crumb = format!(
        "{} • period: {} • l deeper, h back",
        level, app.dashboard.period
    );
    let widget = Paragraph::new(crumb)
        .style(Style::default().fg(app.theme.text_dim))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_summary(f: &mut Frame<'_>, app: &App, area: Rect) {
    let records = app.records();
    let counts = |bucket: StatusBucket| {
        records
            .iter()
            .filter(|r| r.status.bucket() == bucket)
            .count()
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let badges = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    for (i, bucket) in StatusBucket::all().iter().enumerate() {
        StatusBadge {
            title: bucket.to_string(),
            text: counts(*bucket).to_string(),
            style: Style::default().fg(bucket_color(*bucket, &app.theme)),
        }
        .render(f, badges[i]);
    }

    let stats = app.channel_stats();
    RatioGauge {
        title: format!("Conversion ({})", app.dashboard.period),
        value: total_conversion_rate(
            &stats.iter().map(|s| **s).collect::<Vec<_>>(),
        ),
        // Four channels, each capped at 100%.
        max: 400.0,
        style: Style::default().fg(app.theme.primary),
    }
    .render(f, rows[1]);

    let noun = app.profile().entity_noun;
    let hint = Paragraph::new(format!(
        "{} {}s on file. Press l to inspect capacity.",
        records.len(),
        noun.to_lowercase()
    ))
    .style(Style::default().fg(app.theme.text_dim))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(hint, rows[2]);
}

fn render_capacity(f: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .records()
        .iter()
        .map(|record| {
            let risk = record.risk_score.get();
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<10}", record.record_id),
                    Style::default().fg(app.theme.text),
                ),
                Span::styled(
                    format!("{:<22}", record.slot.chars().take(20).collect::<String>()),
                    Style::default().fg(app.theme.text_dim),
                ),
                Span::styled(
                    format!("risk {:>3}", risk),
                    Style::default().fg(risk_color(risk, &app.theme)),
                ),
                Span::styled(
                    format!("  {}", record.status),
                    Style::default().fg(bucket_color(record.status.bucket(), &app.theme)),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Capacity & slots")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_channels(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (list_area, detail_area) = two_column(area, 55);

    let items: Vec<ListItem> = app
        .channel_stats()
        .iter()
        .map(|stat| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<10}", stat.channel.as_label()),
                    Style::default().fg(app.theme.text),
                ),
                Span::styled(
                    format!(
                        "sent {:>5}  read {:>5}  conv {:>4} ({:.1}%)",
                        stat.sent,
                        stat.read,
                        stat.converted,
                        stat.conversion_rate()
                    ),
                    Style::default().fg(app.theme.text_dim),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    if let Some(channel) = app.dashboard.selected_channel {
        if let Some(index) = app
            .channel_stats()
            .iter()
            .position(|s| s.channel == channel)
        {
            state.select(Some(index));
        }
    }

    let list = List::new(items)
        .block(Block::default().title("Channels").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, list_area, &mut state);

    let mut detail = DetailPanel::new("Channel", Style::default().fg(app.theme.secondary));
    if let Some(channel) = app.dashboard.selected_channel {
        if let Some(stat) = app.channel_stats().iter().find(|s| s.channel == channel) {
            detail = detail
                .field("Channel", channel.as_label())
                .field("Period", app.dashboard.period.to_string())
                .field("Sent", stat.sent.to_string())
                .field("Read", stat.read.to_string())
                .field("Converted", stat.converted.to_string())
                .field("Conversion", format!("{:.1}%", stat.conversion_rate()));
        }
    } else {
        detail = detail.field("Hint", "j/k to pick a channel, l to drill in");
    }
    detail.render(f, detail_area);
}

fn render_conversations(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (list_area, detail_area) = two_column(area, 45);

    let records = app.drill_records();
    let items: Vec<ListItem> = records
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", record.record_id),
                    Style::default().fg(app.theme.text),
                ),
                Span::styled(
                    record.contact_name.clone(),
                    Style::default().fg(app.theme.text_dim),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if let Some(id) = app.dashboard.selected_record.as_deref() {
        if let Some(index) = records.iter().position(|r| r.record_id == id) {
            state.select(Some(index));
        }
    }

    let title = match app.dashboard.selected_channel {
        Some(channel) => format!("Conversations via {}", channel.as_label()),
        None => "Conversations".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let timeline_target = app
        .dashboard
        .selected_record
        .as_deref()
        .and_then(|id| records.iter().find(|r| r.record_id == id).copied())
        .or_else(|| records.first().copied());

    let lines: Vec<Line> = match timeline_target {
        Some(record) => record
            .timeline
            .iter()
            .map(|ev| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<10}", ev.at),
                        Style::default().fg(app.theme.text_dim),
                    ),
                    Span::styled(
                        format!("{:<9}", ev.direction.to_string()),
                        Style::default().fg(direction_color(ev.direction, &app.theme)),
                    ),
                    Span::raw(ev.message.clone()),
                ])
            })
            .collect(),
        None => vec![Line::from("No conversations in scope.")],
    };
    let timeline = Paragraph::new(lines).block(
        Block::default()
            .title("Timeline")
            .borders(Borders::ALL),
    );
    f.render_widget(timeline, detail_area);
}
