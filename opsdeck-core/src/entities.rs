//! Core entity structs for the Opsdeck console.
//!
//! Plain data carriers. Derived values (conversion rates, bucket
//! membership) are computed, never stored.

use crate::enums::{
    AgentRunStatus, Channel, DeliveryStatus, EventDirection, Industry, Modality, Period,
    RecordStatus,
};
use crate::error::CoreError;
use crate::CoreResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer percentage constrained to 0..=100.
///
/// Used for record risk scores and decision confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub fn new(value: u8) -> CoreResult<Self> {
        if value > 100 {
            return Err(CoreError::PercentOutOfRange {
                value: value as u16,
            });
        }
        Ok(Self(value))
    }

    /// Const constructor for literal values. Panics at compile time when
    /// used in a const context with a value above 100.
    pub const fn new_const(value: u8) -> Self {
        assert!(value <= 100);
        Self(value)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Static presentation profile for a vertical industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryProfile {
    pub industry: Industry,
    /// Human-facing name, e.g. "MediCare Clinic".
    pub display_name: &'static str,
    /// Theme accent token resolved by the TUI theme.
    pub accent: &'static str,
    /// What this vertical calls a contact: "Patient", "Guest", ...
    pub entity_noun: &'static str,
    /// Record id prefix: APT, BKG, DEAL, POL.
    pub id_prefix: &'static str,
}

/// One entity (patient/guest/client/customer) with its automation timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalRecord {
    /// Human-readable id, e.g. `APT-001`.
    pub record_id: String,
    pub contact_name: String,
    pub phone: String,
    /// Scheduled-slot description, free text.
    pub slot: String,
    pub date: NaiveDate,
    pub status: RecordStatus,
    pub risk_score: Percent,
    /// Ordered chronologically; position is the ordering.
    pub timeline: Vec<TimelineEvent>,
    pub notes: Vec<String>,
}

impl OperationalRecord {
    /// Validate the cross-field invariants a seed dataset must uphold.
    pub fn validate(&self) -> CoreResult<()> {
        if self.record_id.trim().is_empty() {
            return Err(CoreError::EmptyField {
                record_id: self.record_id.clone(),
                field: "record_id",
            });
        }
        if self.contact_name.trim().is_empty() {
            return Err(CoreError::EmptyField {
                record_id: self.record_id.clone(),
                field: "contact_name",
            });
        }
        Ok(())
    }
}

/// One event on a record's automation timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Display label like "Mon 09:14". Not machine-parseable; ordering is
    /// carried by position in the timeline.
    pub at: String,
    /// Short action tag, e.g. "reminder", "reply", "escalation".
    pub action: String,
    pub direction: EventDirection,
    pub delivery: DeliveryStatus,
    pub message: String,
    pub decision: Option<DecisionTrace>,
}

/// Metadata attached to events where an agent made a routing decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    pub reason: String,
    pub confidence: Percent,
    pub agent: String,
}

/// Per-channel outreach counts for one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStat {
    pub channel: Channel,
    pub period: Period,
    pub sent: u32,
    pub read: u32,
    pub converted: u32,
}

impl ChannelStat {
    /// Converted as a fraction of sent, in percent. Zero sent yields zero.
    pub fn conversion_rate(&self) -> f32 {
        if self.sent == 0 {
            0.0
        } else {
            self.converted as f32 / self.sent as f32 * 100.0
        }
    }
}

/// Sum of per-channel conversion rates, the dashboard's headline figure.
pub fn total_conversion_rate(stats: &[ChannelStat]) -> f32 {
    stats.iter().map(ChannelStat::conversion_rate).sum()
}

/// A configured automation agent shown in the studio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: String,
    pub model: String,
    pub modality: Modality,
    pub status: AgentRunStatus,
    pub instructions: String,
    pub tools: Vec<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rejects_out_of_range() {
        assert!(Percent::new(101).is_err());
        assert_eq!(Percent::new(100).unwrap().get(), 100);
        assert_eq!(Percent::new(0).unwrap().get(), 0);
    }

    #[test]
    fn percent_displays_with_sign() {
        assert_eq!(Percent::new_const(72).to_string(), "72%");
    }

    #[test]
    fn conversion_rate_handles_zero_sent() {
        let stat = ChannelStat {
            channel: Channel::Sms,
            period: Period::Today,
            sent: 0,
            read: 0,
            converted: 0,
        };
        assert_eq!(stat.conversion_rate(), 0.0);
    }

    #[test]
    fn conversion_rate_is_percentage_of_sent() {
        let stat = ChannelStat {
            channel: Channel::WhatsApp,
            period: Period::Week,
            sent: 200,
            read: 150,
            converted: 50,
        };
        assert!((stat.conversion_rate() - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn total_conversion_rate_sums_channels() {
        let stats = vec![
            ChannelStat {
                channel: Channel::WhatsApp,
                period: Period::Today,
                sent: 100,
                read: 80,
                converted: 10,
            },
            ChannelStat {
                channel: Channel::Email,
                period: Period::Today,
                sent: 50,
                read: 20,
                converted: 5,
            },
        ];
        assert!((total_conversion_rate(&stats) - 20.0).abs() < 0.001);
    }

    #[test]
    fn record_validate_rejects_blank_contact() {
        let record = OperationalRecord {
            record_id: "APT-900".to_string(),
            contact_name: "  ".to_string(),
            phone: "+1 555 0100".to_string(),
            slot: "Tue 10:00 consult".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            status: RecordStatus::Pending,
            risk_score: Percent::new_const(10),
            timeline: vec![],
            notes: vec![],
        };
        assert!(record.validate().is_err());
    }
}
