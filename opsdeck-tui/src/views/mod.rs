//! View rendering dispatch.

pub mod dashboard;
pub mod operations;
pub mod studio;

use crate::nav::Screen;
use crate::notifications::NotificationLevel;
use crate::state::{App, InputFocus};
use opsdeck_core::ActionKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_screen {
        Screen::Dashboard => dashboard::render(f, app, layout[1]),
        Screen::Operations => operations::render(f, app, layout[1]),
        Screen::Studio => studio::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if let Some(modal) = &app.action_modal {
        render_action_modal(f, app, modal.selected);
    }
    if app.help_open {
        render_help(f, app);
    }
}

/// Split an area into a list column and a detail column.
pub fn two_column(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let profile = app.profile();
    let accent = app.theme.accent(profile.accent);

    let mut spans = vec![
        Span::styled("OPSDECK ", Style::default().fg(app.theme.primary)),
        Span::styled(
            format!("{} ", profile.display_name),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
    ];
    for screen in Screen::all() {
        let style = if *screen == app.active_screen {
            Style::default().fg(app.theme.border_focus)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", screen.index() + 1, screen.title()),
            style,
        ));
    }

    let block = Block::default().borders(Borders::ALL);
    let header = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.input_focus {
        InputFocus::None => {
            "Tab screen • i industry • j/k move • Enter open • a actions • / search • d date • b bucket • q quit"
        }
        InputFocus::Search | InputFocus::Date => "type to edit • Enter apply • Esc cancel",
        InputFocus::Chat => "type message • Enter send • Esc leave chat",
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let (label, color) = match note.level {
            NotificationLevel::Info => ("INFO", app.theme.info),
            NotificationLevel::Warning => ("WARN", app.theme.warning),
            NotificationLevel::Error => ("ERROR", app.theme.error),
            NotificationLevel::Success => ("OK", app.theme.success),
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_action_modal(f: &mut Frame<'_>, app: &App, selected: usize) {
    let area = centered_rect(32, 10, f.size());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = ActionKind::all()
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let style = if i == selected {
                Style::default()
                    .fg(app.theme.bg)
                    .bg(app.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text)
            };
            ListItem::new(Span::styled(format!(" {} ", action.as_label()), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("Actions")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(list, area);
}

fn render_help(f: &mut Frame<'_>, app: &App) {
    let area = centered_rect(52, 12, f.size());
    f.render_widget(Clear, area);

    let lines = [
        "Tab / Shift-Tab   switch screen",
        "1..3              jump to screen",
        "i                 cycle industry",
        "j/k or arrows     move selection",
        "h/l               drill out / in (dashboard)",
        "Enter             open / confirm",
        "/  d  b  p        search, date, bucket, period",
        "a                 action modal for selected record",
        "t                 next studio tab",
        "q                 quit",
    ];
    let text: Vec<Line> = lines.iter().map(|l| Line::from(*l)).collect();
    let help = Paragraph::new(text).block(
        Block::default()
            .title("Keys")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(help, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
