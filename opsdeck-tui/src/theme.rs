//! Opsdeck theme and color utilities.

use opsdeck_core::{AgentRunStatus, DeliveryStatus, EventDirection, StatusBucket};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct OpsdeckTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl OpsdeckTheme {
    pub fn opsdeck() -> Self {
        Self {
            bg: Color::Rgb(14, 16, 20),
            bg_highlight: Color::Rgb(36, 40, 48),
            primary: Color::Rgb(94, 203, 189),
            secondary: Color::Rgb(186, 142, 255),
            success: Color::Rgb(120, 220, 120),
            warning: Color::Rgb(240, 190, 80),
            error: Color::Rgb(235, 100, 100),
            info: Color::Rgb(110, 170, 240),
            text: Color::Rgb(225, 228, 232),
            text_dim: Color::Rgb(130, 138, 150),
            border: Color::Rgb(70, 76, 86),
            border_focus: Color::Rgb(94, 203, 189),
        }
    }

    /// Resolve an industry profile's accent token.
    pub fn accent(&self, token: &str) -> Color {
        match token {
            "teal" => Color::Rgb(94, 203, 189),
            "amber" => Color::Rgb(240, 190, 80),
            "violet" => Color::Rgb(186, 142, 255),
            "blue" => Color::Rgb(110, 170, 240),
            _ => self.primary,
        }
    }
}

pub fn bucket_color(bucket: StatusBucket, theme: &OpsdeckTheme) -> Color {
    match bucket {
        StatusBucket::Resolved => theme.success,
        StatusBucket::Escalated => theme.warning,
        StatusBucket::Pending => theme.info,
        StatusBucket::Error => theme.error,
    }
}

pub fn direction_color(direction: EventDirection, theme: &OpsdeckTheme) -> Color {
    match direction {
        EventDirection::Inbound => theme.info,
        EventDirection::Outbound => theme.primary,
        EventDirection::System => theme.text_dim,
    }
}

pub fn delivery_color(delivery: DeliveryStatus, theme: &OpsdeckTheme) -> Color {
    match delivery {
        DeliveryStatus::Delivered => theme.text,
        DeliveryStatus::Read => theme.success,
        DeliveryStatus::Failed => theme.error,
        DeliveryStatus::Internal => theme.text_dim,
    }
}

pub fn agent_status_color(status: AgentRunStatus, theme: &OpsdeckTheme) -> Color {
    match status {
        AgentRunStatus::Active => theme.success,
        AgentRunStatus::Paused => theme.warning,
    }
}

pub fn risk_color(risk: u8, theme: &OpsdeckTheme) -> Color {
    if risk < 40 {
        theme.success
    } else if risk < 70 {
        theme.warning
    } else {
        theme.error
    }
}
