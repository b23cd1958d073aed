//! Domain entity representing a registered platform subdomain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pricing tier of a registered domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Free,
    Premium,
}

impl DomainType {
    /// Parses a client-supplied type string.
    ///
    /// Anything other than the exact string `premium` is treated as `free`.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("premium") => Self::Premium,
            _ => Self::Free,
        }
    }

    /// One-off registration price for a domain name in this tier.
    ///
    /// Free names cost nothing. Premium names are tiered by length: short
    /// names (up to four characters) cost 100, longer ones 30.
    pub fn price(self, name: &str) -> u32 {
        match self {
            Self::Free => 0,
            Self::Premium => {
                if name.chars().count() <= 4 {
                    100
                } else {
                    30
                }
            }
        }
    }
}

/// A registered subdomain and its ownership record.
///
/// The normalized `name` is the uniqueness key: at most one record per name
/// exists in the registry. `app_id` is set when the domain was claimed as
/// part of publishing an app.
#[derive(Debug, Clone)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub app_id: Option<String>,
    pub domain_type: DomainType,
    pub price_paid: u32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a domain.
///
/// `name` must already be normalized and validated. The store computes
/// `price_paid` from the tier and name at insert time.
#[derive(Debug, Clone)]
pub struct NewDomain {
    pub name: String,
    pub owner_id: String,
    pub domain_type: DomainType,
    pub app_id: Option<String>,
}

/// Result of an availability check for a candidate name.
///
/// `reason` is present exactly when `available` is false. `price` is the
/// registration price for an available name and zero otherwise.
#[derive(Debug, Clone)]
pub struct DomainAvailability {
    pub available: bool,
    pub price: u32,
    pub reason: Option<String>,
}

impl DomainAvailability {
    pub fn available(price: u32) -> Self {
        Self {
            available: true,
            price,
            reason: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            available: false,
            price: 0,
            reason: Some(reason.into()),
        }
    }
}
