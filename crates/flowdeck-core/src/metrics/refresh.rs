//! Elapsed-time refresh check.

use chrono::{DateTime, Duration, Utc};

/// Whether enough time has passed to regenerate the snapshot.
///
/// True iff `now - last_update >= interval_secs`. Pure; the caller is
/// responsible for replacing the stored snapshot and resetting the
/// timestamp when this returns true.
pub fn should_refresh(now: DateTime<Utc>, last_update: DateTime<Utc>, interval_secs: u64) -> bool {
    now.signed_duration_since(last_update) >= Duration::seconds(interval_secs as i64)
}
