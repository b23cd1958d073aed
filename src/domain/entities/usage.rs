//! Usage event entity for the append-only analytics log.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind of interaction a usage event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageAction {
    Open,
    Interact,
    Pay,
}

impl UsageAction {
    /// Parses a client-supplied action string.
    ///
    /// Unknown or missing values count as `open`; usage reporting never
    /// rejects a request over an unrecognized action.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("interact") => Self::Interact,
            Some("pay") => Self::Pay,
            _ => Self::Open,
        }
    }
}

/// One recorded interaction with an app.
///
/// Events are append-only; aggregate counters on the app are derived at
/// write time and never recomputed from this log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    pub id: String,
    pub app_id: String,
    pub user_id: String,
    pub action: UsageAction,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Conditioned input for recording a usage event.
///
/// The service layer has already defaulted `user_id` and `action` and
/// clamped `amount` to be non-negative.
#[derive(Debug, Clone)]
pub struct NewUsageEvent {
    pub user_id: String,
    pub action: UsageAction,
    pub amount: f64,
}
