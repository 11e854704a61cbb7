//! Enum types for Opsdeck entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// INDUSTRY
// ============================================================================

/// Vertical industry served by the automation platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Clinic,
    Hotel,
    Sales,
    Insurance,
}

impl Industry {
    /// Stable key used in config files and persisted UI state.
    pub fn as_key(&self) -> &'static str {
        match self {
            Industry::Clinic => "clinic",
            Industry::Hotel => "hotel",
            Industry::Sales => "sales",
            Industry::Insurance => "insurance",
        }
    }

    pub fn all() -> &'static [Industry] {
        &[
            Industry::Clinic,
            Industry::Hotel,
            Industry::Sales,
            Industry::Insurance,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|i| i == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Industry> {
        Self::all().get(index).copied()
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for Industry {
    type Err = IndustryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clinic" => Ok(Industry::Clinic),
            "hotel" => Ok(Industry::Hotel),
            "sales" => Ok(Industry::Sales),
            "insurance" => Ok(Industry::Insurance),
            _ => Err(IndustryParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid industry key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryParseError(pub String);

impl fmt::Display for IndustryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid industry: {}", self.0)
    }
}

impl std::error::Error for IndustryParseError {}

// ============================================================================
// RECORD STATUS AND BUCKETS
// ============================================================================

/// Status of an operational record. One fixed enumeration shared across
/// industries; per-industry surface labels are a rendering concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    Confirmed,
    CheckedIn,
    Completed,
    Escalated,
    NeedsFollowUp,
    Pending,
    AwaitingReply,
    NoResponse,
    DeliveryFailed,
    Cancelled,
}

impl RecordStatus {
    /// Map a status to its console filter bucket.
    ///
    /// This table is the single source of truth for bucket membership;
    /// views and filters must not re-derive it.
    pub fn bucket(&self) -> StatusBucket {
        match self {
            RecordStatus::Confirmed | RecordStatus::CheckedIn | RecordStatus::Completed => {
                StatusBucket::Resolved
            }
            RecordStatus::Escalated | RecordStatus::NeedsFollowUp => StatusBucket::Escalated,
            RecordStatus::Pending | RecordStatus::AwaitingReply => StatusBucket::Pending,
            RecordStatus::NoResponse | RecordStatus::DeliveryFailed | RecordStatus::Cancelled => {
                StatusBucket::Error
            }
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            RecordStatus::Confirmed => "Confirmed",
            RecordStatus::CheckedIn => "Checked In",
            RecordStatus::Completed => "Completed",
            RecordStatus::Escalated => "Escalated",
            RecordStatus::NeedsFollowUp => "Needs Follow-Up",
            RecordStatus::Pending => "Pending",
            RecordStatus::AwaitingReply => "Awaiting Reply",
            RecordStatus::NoResponse => "No Response",
            RecordStatus::DeliveryFailed => "Delivery Failed",
            RecordStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> &'static [RecordStatus] {
        &[
            RecordStatus::Confirmed,
            RecordStatus::CheckedIn,
            RecordStatus::Completed,
            RecordStatus::Escalated,
            RecordStatus::NeedsFollowUp,
            RecordStatus::Pending,
            RecordStatus::AwaitingReply,
            RecordStatus::NoResponse,
            RecordStatus::DeliveryFailed,
            RecordStatus::Cancelled,
        ]
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Console filter bucket grouping record statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBucket {
    Resolved,
    Escalated,
    Pending,
    Error,
}

impl StatusBucket {
    pub fn as_key(&self) -> &'static str {
        match self {
            StatusBucket::Resolved => "resolved",
            StatusBucket::Escalated => "escalated",
            StatusBucket::Pending => "pending",
            StatusBucket::Error => "error",
        }
    }

    pub fn all() -> &'static [StatusBucket] {
        &[
            StatusBucket::Resolved,
            StatusBucket::Escalated,
            StatusBucket::Pending,
            StatusBucket::Error,
        ]
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for StatusBucket {
    type Err = StatusBucketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resolved" => Ok(StatusBucket::Resolved),
            "escalated" => Ok(StatusBucket::Escalated),
            "pending" => Ok(StatusBucket::Pending),
            "error" => Ok(StatusBucket::Error),
            _ => Err(StatusBucketParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid status bucket key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBucketParseError(pub String);

impl fmt::Display for StatusBucketParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid status bucket: {}", self.0)
    }
}

impl std::error::Error for StatusBucketParseError {}

// ============================================================================
// TIMELINE EVENTS
// ============================================================================

/// Direction of a timeline event relative to the platform.
///
/// Explicit by design: event classification must never be inferred from
/// action-tag substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventDirection {
    /// Message or call received from the contact.
    Inbound,
    /// Message or call sent by the platform or a human operator.
    Outbound,
    /// Internal platform event (decision, reassignment, flag).
    System,
}

impl fmt::Display for EventDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventDirection::Inbound => "inbound",
            EventDirection::Outbound => "outbound",
            EventDirection::System => "system",
        };
        write!(f, "{}", label)
    }
}

/// Delivery outcome of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Delivered,
    Read,
    Failed,
    /// Internal events have no delivery semantics.
    Internal,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Read => "read",
            DeliveryStatus::Failed => "failed",
            DeliveryStatus::Internal => "internal",
        };
        write!(f, "{}", label)
    }
}

// ============================================================================
// CHANNELS AND PERIODS
// ============================================================================

/// Outreach channel tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Sms,
    Email,
    Voice,
}

impl Channel {
    pub fn as_label(&self) -> &'static str {
        match self {
            Channel::WhatsApp => "WhatsApp",
            Channel::Sms => "SMS",
            Channel::Email => "Email",
            Channel::Voice => "Voice",
        }
    }

    pub fn all() -> &'static [Channel] {
        &[Channel::WhatsApp, Channel::Sms, Channel::Email, Channel::Voice]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl FromStr for Channel {
    type Err = ChannelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whatsapp" => Ok(Channel::WhatsApp),
            "sms" => Ok(Channel::Sms),
            "email" => Ok(Channel::Email),
            "voice" => Ok(Channel::Voice),
            _ => Err(ChannelParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid channel key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelParseError(pub String);

impl fmt::Display for ChannelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid channel: {}", self.0)
    }
}

impl std::error::Error for ChannelParseError {}

/// Reporting period selector for channel statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Today,
    Week,
    Month,
}

impl Period {
    pub fn as_key(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    pub fn all() -> &'static [Period] {
        &[Period::Today, Period::Week, Period::Month]
    }

    pub fn next(&self) -> Period {
        match self {
            Period::Today => Period::Week,
            Period::Week => Period::Month,
            Period::Month => Period::Today,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Period::Today),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid period key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid period: {}", self.0)
    }
}

impl std::error::Error for PeriodParseError {}

// ============================================================================
// AGENTS
// ============================================================================

/// Interaction modality of a configured agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Voice,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Modality::Text => "text",
            Modality::Voice => "voice",
        };
        write!(f, "{}", label)
    }
}

/// Run status of a configured agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentRunStatus {
    #[default]
    Active,
    Paused,
}

impl AgentRunStatus {
    /// The opposite status. Used by the studio's pause/resume toggle.
    pub fn toggled(&self) -> AgentRunStatus {
        match self {
            AgentRunStatus::Active => AgentRunStatus::Paused,
            AgentRunStatus::Paused => AgentRunStatus::Active,
        }
    }
}

impl fmt::Display for AgentRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgentRunStatus::Active => "active",
            AgentRunStatus::Paused => "paused",
        };
        write!(f, "{}", label)
    }
}

// ============================================================================
// CONSOLE ACTIONS
// ============================================================================

/// Operator action available from the console's action modal.
///
/// Submitting any of these is cosmetic: the intent is logged and the modal
/// closes. No record is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Call,
    Message,
    Confirm,
    Reassign,
    Note,
    Flag,
}

impl ActionKind {
    pub fn as_label(&self) -> &'static str {
        match self {
            ActionKind::Call => "Call",
            ActionKind::Message => "Message",
            ActionKind::Confirm => "Confirm",
            ActionKind::Reassign => "Reassign",
            ActionKind::Note => "Note",
            ActionKind::Flag => "Flag",
        }
    }

    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::Call,
            ActionKind::Message,
            ActionKind::Confirm,
            ActionKind::Reassign,
            ActionKind::Note,
            ActionKind::Flag,
        ]
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
