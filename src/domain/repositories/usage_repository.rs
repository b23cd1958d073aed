//! Repository trait for usage events and activity counters.

use crate::domain::entities::{NewUsageEvent, UsageEvent};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the usage log and per-app activity tracking.
///
/// Recording an event and updating the app's aggregate counters is one
/// atomic step; the counters are maintained at write time and never rebuilt
/// from the log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRegistry`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Appends a usage event and updates the app's counters.
    ///
    /// First contact from a user (any action) adds them to the app's active
    /// set. `open` from a new user increments `total_users` and refreshes
    /// `daily_active`; `interact` from a new user refreshes `daily_active`
    /// only; `pay` always adds `amount` to `total_revenue`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the app id does not exist.
    async fn record_usage(&self, app_id: &str, event: NewUsageEvent) -> Result<(), AppError>;

    /// Returns the recorded events for an app, oldest first.
    ///
    /// Apps with no recorded usage yield an empty list.
    async fn usage_events(&self, app_id: &str) -> Result<Vec<UsageEvent>, AppError>;

    /// Clears the app's active-user set and zeroes `daily_active`.
    ///
    /// The active set otherwise accumulates for the lifetime of the store;
    /// this is the rotation hook a scheduler would call at day boundaries.
    /// `total_users` and the event log are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the app id does not exist.
    async fn reset_daily_active(&self, app_id: &str) -> Result<(), AppError>;
}
