//! Label/value panel backing the detail column of each screen.
//!
//! Built with the `field` builder so callers can assemble rows
//! conditionally; rows render in insertion order.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailPanel<'a> {
    title: &'a str,
    rows: Vec<(&'a str, String)>,
    label_style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn new(title: &'a str, label_style: Style) -> Self {
        Self {
            title,
            rows: Vec::new(),
            label_style,
        }
    }

    pub fn field(mut self, label: &'a str, value: impl Into<String>) -> Self {
        self.rows.push((label, value.into()));
        self
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = Vec::with_capacity(self.rows.len());
        for (label, value) in &self.rows {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), self.label_style),
                Span::raw(value.as_str()),
            ]));
        }

        let panel = Paragraph::new(lines)
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(panel, area);
    }
}
