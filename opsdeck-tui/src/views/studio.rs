//! Studio view: agent roster, workflow sketches, and the test chat.

use crate::nav::StudioTab;
use crate::state::{App, ChatRole, InputFocus};
use crate::theme::agent_status_color;
use crate::views::two_column;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_tabs(f, app, layout[0]);

    match app.studio.tab {
        StudioTab::Agents => render_agents(f, app, layout[1]),
        StudioTab::Workflows => render_workflows(f, app, layout[1]),
        StudioTab::TestChat => render_test_chat(f, app, layout[1]),
    }
}

fn render_tabs(f: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line> = StudioTab::all()
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.studio.tab.index())
        .style(Style::default().fg(app.theme.text_dim))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title("Studio (t)").borders(Borders::ALL));
    f.render_widget(tabs, area);
}

fn render_agents(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (list_area, detail_area) = two_column(area, 40);

    let items: Vec<ListItem> = app
        .studio
        .agents
        .iter()
        .map(|agent| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<26}", agent.name),
                    Style::default().fg(app.theme.text),
                ),
                Span::styled(
                    agent.status.to_string(),
                    Style::default().fg(agent_status_color(agent.status, &app.theme)),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(app.studio.selected_agent);

    let list = List::new(items)
        .block(Block::default().title("Agents").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, list_area, &mut state);

    let mut detail = DetailPanel::new("Agent", Style::default().fg(app.theme.secondary));
    match app
        .studio
        .selected_agent
        .and_then(|i| app.studio.agents.get(i))
    {
        Some(agent) => {
            detail = detail
                .field("Name", agent.name.as_str())
                .field("Model", agent.model.as_str())
                .field("Modality", agent.modality.to_string())
                .field("Status", agent.status.to_string())
                .field("Tools", agent.tools.join(", "))
                .field("Max tokens", agent.max_tokens.to_string())
                .field("Temperature", format!("{:.1}", agent.temperature))
                .field("Instructions", agent.instructions.as_str())
                .field("Hint", "space pauses or resumes");
        }
        None => {
            detail = detail.field("Hint", "j/k to pick an agent, space to toggle");
        }
    }
    detail.render(f, detail_area);
}

fn render_workflows(f: &mut Frame<'_>, app: &App, area: Rect) {
    let noun = app.profile().entity_noun.to_lowercase();
    let lines = vec![
        Line::from(Span::styled(
            format!("Inbound message → classify intent → route to {} agent", noun),
            Style::default().fg(app.theme.text),
        )),
        Line::from(Span::styled(
            "Reminder cadence → T-24h nudge → T-2h confirm → escalate on silence",
            Style::default().fg(app.theme.text),
        )),
        Line::from(Span::styled(
            "Delivery failure → retry alternate channel → flag for staff",
            Style::default().fg(app.theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Workflow editing is not available in this console.",
            Style::default().fg(app.theme.text_dim),
        )),
    ];
    let widget = Paragraph::new(lines)
        .block(Block::default().title("Workflows").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_test_chat(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = app
        .studio
        .transcript
        .iter()
        .map(|turn| {
            let (label, color) = match turn.role {
                ChatRole::Operator => ("you", app.theme.primary),
                ChatRole::Agent => ("agent", app.theme.secondary),
            };
            Line::from(vec![
                Span::styled(format!("{:>6}  ", label), Style::default().fg(color)),
                Span::styled(turn.text.clone(), Style::default().fg(app.theme.text)),
            ])
        })
        .collect();
    if app.studio.reply_pending {
        lines.push(Line::from(Span::styled(
            " agent  …",
            Style::default().fg(app.theme.text_dim),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Send a message to try the agent. Replies are simulated.",
            Style::default().fg(app.theme.text_dim),
        )));
    }
    let transcript = Paragraph::new(lines)
        .block(Block::default().title("Test chat").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(transcript, rows[0]);

    let focused = app.input_focus == InputFocus::Chat;
    let border = if focused {
        Style::default().fg(app.theme.border_focus)
    } else {
        Style::default().fg(app.theme.border)
    };
    let text = if app.studio.chat_input.is_empty() && !focused {
        Span::styled(
            "Press Enter to type a message",
            Style::default().fg(app.theme.text_dim),
        )
    } else {
        Span::styled(
            format!("{}▏", app.studio.chat_input),
            Style::default().fg(app.theme.text),
        )
    };
    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title("Message")
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(input, rows[1]);
}
