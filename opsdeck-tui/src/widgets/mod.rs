//! Reusable widget components.

pub mod detail;
pub mod filter;
pub mod gauge;
pub mod status;

pub use detail::DetailPanel;
pub use filter::{FilterBar, FilterOption};
pub use gauge::RatioGauge;
pub use status::StatusBadge;
