//! Mock platform metrics.
//!
//! A snapshot is a fixed bundle of metric values replacing the previous
//! one wholesale; it is regenerated from a fixed baseline plus bounded
//! uniform jitter, never mutated field-by-field. The refresh check is a
//! pure elapsed-time comparison; the caller owns the clock and the
//! stored timestamp.

pub mod generator;
pub mod refresh;
pub mod types;

pub use generator::regenerate;
pub use refresh::should_refresh;
pub use types::MetricsSnapshot;
