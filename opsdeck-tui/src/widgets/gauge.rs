//! Ratio gauge for channel read/conversion rates and risk scores.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

pub struct RatioGauge {
    pub title: String,
    pub value: f32,
    pub max: f32,
    pub style: Style,
}

impl RatioGauge {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let ratio = if self.max <= 0.0 {
            0.0
        } else {
            (self.value / self.max).clamp(0.0, 1.0)
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(self.title.as_str())
                    .borders(Borders::ALL),
            )
            .gauge_style(self.style)
            .label(format!("{:.1}%", ratio * 100.0))
            .ratio(ratio as f64);
        f.render_widget(gauge, area);
    }
}
