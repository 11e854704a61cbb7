//! Opsdeck Core - Entity Types and Filter Logic
//!
//! Pure data structures and pure functions with no I/O and no UI concerns.
//! The TUI crate depends on this; nothing here depends on the TUI.

pub mod drill;
pub mod entities;
pub mod enums;
pub mod error;
pub mod filter;
pub mod seed;

pub use drill::DrillLevel;
pub use entities::{
    total_conversion_rate, AgentDefinition, ChannelStat, DecisionTrace, IndustryProfile,
    OperationalRecord, Percent, TimelineEvent,
};
pub use enums::{
    ActionKind, AgentRunStatus, Channel, DeliveryStatus, EventDirection, Industry, Modality,
    Period, RecordStatus, StatusBucket,
};
pub use error::CoreError;
pub use filter::{filter_records, record_matches_query};
pub use seed::{dataset, profile, IndustryDataset};

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
