//! Usage reporting service feeding the per-app analytics counters.

use std::sync::Arc;

use crate::domain::entities::{NewUsageEvent, UsageAction};
use crate::domain::repositories::UsageRepository;
use crate::error::AppError;

/// Raw usage report as accepted at the API boundary.
///
/// Everything is optional; missing or junk values fall back to defaults
/// rather than rejecting the report.
#[derive(Debug, Clone, Default)]
pub struct RecordUsageInput {
    pub user_id: Option<String>,
    pub action: Option<String>,
    pub amount: Option<f64>,
}

/// Service recording app usage and keeping activity counters current.
///
/// Known limitation carried over from the platform contract: the per-app
/// active-user set is never rotated by a clock, so `daily_active` counts
/// distinct users over the store's lifetime. [`Self::reset_daily_active`]
/// is the hook a future scheduler would call at day boundaries.
pub struct UsageService<R: UsageRepository> {
    repository: Arc<R>,
}

impl<R: UsageRepository> UsageService<R> {
    /// Creates a new usage service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records one usage event against an app.
    ///
    /// Defaults: action `open`, user `anonymous`, amount 0. Amounts are
    /// clamped to be non-negative and NaN is treated as 0, so a `pay` report
    /// can never reduce revenue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the app id does not exist.
    pub async fn record(&self, app_id: &str, input: RecordUsageInput) -> Result<(), AppError> {
        let user_id = input
            .user_id
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "anonymous".to_string());
        let action = UsageAction::parse_lenient(input.action.as_deref());

        let raw_amount = input.amount.unwrap_or(0.0);
        let amount = if raw_amount.is_nan() {
            0.0
        } else {
            raw_amount.max(0.0)
        };

        self.repository
            .record_usage(
                app_id,
                NewUsageEvent {
                    user_id,
                    action,
                    amount,
                },
            )
            .await
    }

    /// Clears an app's active-user set and zeroes its `daily_active` counter.
    ///
    /// Not exposed over HTTP; intended for a day-rollover scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the app id does not exist.
    pub async fn reset_daily_active(&self, app_id: &str) -> Result<(), AppError> {
        self.repository.reset_daily_active(app_id).await
    }
}
