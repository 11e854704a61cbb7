//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    /// Canned studio chat reply, delivered after the configured latency.
    ChatReply(String),
}
