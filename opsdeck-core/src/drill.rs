//! Dashboard drill-down depth.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Drill-down depth within the dashboard: summary (1), capacity (2),
/// channels (3), conversations (4). Construction and navigation clamp to
/// the valid range; the level can never leave 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrillLevel(u8);

impl DrillLevel {
    pub const MIN: DrillLevel = DrillLevel(1);
    pub const MAX: DrillLevel = DrillLevel(4);

    /// Clamp an arbitrary input into the valid range.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn deeper(&self) -> DrillLevel {
        Self::clamped(self.0.saturating_add(1))
    }

    pub fn shallower(&self) -> DrillLevel {
        Self::clamped(self.0.saturating_sub(1))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn title(&self) -> &'static str {
        match self.0 {
            1 => "Summary",
            2 => "Capacity",
            3 => "Channels",
            _ => "Conversations",
        }
    }
}

impl Default for DrillLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for DrillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{} {}", self.0, self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_bounds_input() {
        assert_eq!(DrillLevel::clamped(0), DrillLevel::MIN);
        assert_eq!(DrillLevel::clamped(1).as_u8(), 1);
        assert_eq!(DrillLevel::clamped(4).as_u8(), 4);
        assert_eq!(DrillLevel::clamped(250), DrillLevel::MAX);
    }

    #[test]
    fn deeper_stops_at_max() {
        let mut level = DrillLevel::default();
        for _ in 0..10 {
            level = level.deeper();
        }
        assert_eq!(level, DrillLevel::MAX);
    }

    #[test]
    fn shallower_stops_at_min() {
        let mut level = DrillLevel::MAX;
        for _ in 0..10 {
            level = level.shallower();
        }
        assert_eq!(level, DrillLevel::MIN);
    }

    #[test]
    fn titles_follow_depth() {
        assert_eq!(DrillLevel::clamped(1).title(), "Summary");
        assert_eq!(DrillLevel::clamped(2).title(), "Capacity");
        assert_eq!(DrillLevel::clamped(3).title(), "Channels");
        assert_eq!(DrillLevel::clamped(4).title(), "Conversations");
    }
}
