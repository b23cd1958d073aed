//! App entity: a published mini-app and its public projection.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::DomainType;
use super::review::Review;
use crate::utils::sanitize::round2;
use crate::utils::token_display::{derive_token_price, derive_token_symbol};

/// Catalog category of an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Lottery,
    Vote,
    Game,
    Tool,
    Display,
    Other,
}

impl AppCategory {
    /// Parses a client-supplied category string.
    ///
    /// Matching is exact (no trimming or case folding); unknown values fall
    /// back to `other`.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("lottery") => Self::Lottery,
            Some("vote") => Self::Vote,
            Some("game") => Self::Game,
            Some("tool") => Self::Tool,
            Some("display") => Self::Display,
            _ => Self::Other,
        }
    }

    /// Wire name of the category, as stored and serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lottery => "lottery",
            Self::Vote => "vote",
            Self::Game => "game",
            Self::Tool => "tool",
            Self::Display => "display",
            Self::Other => "other",
        }
    }
}

/// Lifecycle status of an app. Only published apps are publicly visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppStatus {
    Draft,
    Published,
    Suspended,
}

/// Catalog sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSort {
    Hot,
    New,
    Rating,
    Revenue,
}

impl AppSort {
    /// Parses an already trimmed and lowercased sort string.
    ///
    /// Unknown values fall back to `hot`, the default ordering.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "new" => Self::New,
            "rating" => Self::Rating,
            "revenue" => Self::Revenue,
            _ => Self::Hot,
        }
    }
}

/// A mini-app as stored in the registry.
///
/// Aggregate counters (`total_users`, `daily_active`, `total_revenue`,
/// `rating`, `rating_count`) are updated in place by usage and review
/// operations. `code_hash` keys the raw code payload held separately in the
/// store and never leaves the backend.
#[derive(Debug, Clone)]
pub struct App {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AppCategory,
    pub creator_id: String,
    pub creator_name: String,
    pub code_hash: String,
    pub subdomain: String,
    pub domain_type: DomainType,
    pub token_id: Option<String>,
    pub total_users: i64,
    pub daily_active: i64,
    pub total_revenue: f64,
    pub rating: f64,
    pub rating_count: i64,
    pub reviews: Vec<Review>,
    pub status: AppStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub icon: Option<String>,
}

impl App {
    /// Returns true if the app is visible in public listings.
    pub fn is_published(&self) -> bool {
        self.status == AppStatus::Published
    }

    /// Popularity score for the default catalog ordering.
    ///
    /// Active users dominate; lifetime users act as a tiebreaker at a tenth
    /// of the weight.
    pub fn hot_score(&self) -> f64 {
        self.daily_active as f64 + self.total_users as f64 * 0.1
    }

    /// Projects the stored record into its public API shape.
    ///
    /// Strips the code hash and status, derives the app URL from the
    /// platform domain, sorts reviews newest-first and rounds monetary and
    /// rating values to two decimals. Token display attributes are derived
    /// from the token id on the fly.
    pub fn to_public(&self, platform_domain: &str) -> PublicApp {
        let mut reviews = self.reviews.clone();
        reviews.sort_by(|a, b| b.date.cmp(&a.date));

        PublicApp {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            url: format!("https://{}.{}", self.subdomain, platform_domain),
            creator: PublicCreator {
                id: self.creator_id.clone(),
                name: self.creator_name.clone(),
            },
            token: self.token_id.as_deref().map(|token_id| PublicTokenInfo {
                id: token_id.to_string(),
                symbol: derive_token_symbol(token_id),
                price: derive_token_price(token_id),
            }),
            stats: PublicStats {
                users: self.total_users,
                dau: self.daily_active,
                revenue: round2(self.total_revenue),
            },
            rating: round2(self.rating),
            rating_count: self.rating_count,
            reviews,
            created_at: self.created_at,
            icon: self.icon.clone(),
        }
    }
}

/// Conditioned input for inserting a freshly published app.
///
/// Text fields are already sanitized, truncated and defaulted by the
/// service layer; `subdomain` is normalized and validated. The store mints
/// the id, code hash and timestamps and registers the domain atomically.
#[derive(Debug, Clone)]
pub struct NewApp {
    pub name: String,
    pub description: String,
    pub category: AppCategory,
    pub creator_id: String,
    pub creator_name: String,
    pub subdomain: String,
    pub domain_type: DomainType,
    pub token_id: Option<String>,
    pub icon: String,
    pub code: String,
}

/// Raw publish request as accepted by the service layer.
///
/// Optional fields carry client omissions through to the conditioning
/// rules; `subdomain` and `code` presence is enforced at the API boundary.
#[derive(Debug, Clone)]
pub struct PublishAppInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: AppCategory,
    pub code: String,
    pub subdomain: String,
    pub domain_type: DomainType,
    pub token_id: Option<String>,
    pub creator_id: Option<String>,
    pub creator_name: Option<String>,
    pub icon: Option<String>,
}

/// Public projection of an [`App`].
///
/// This is the only shape that leaves the API: internal fields are gone and
/// aggregates are rounded for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicApp {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AppCategory,
    pub url: String,
    pub creator: PublicCreator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<PublicTokenInfo>,
    pub stats: PublicStats,
    pub rating: f64,
    pub rating_count: i64,
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Creator block of the public projection.
#[derive(Debug, Clone, Serialize)]
pub struct PublicCreator {
    pub id: String,
    pub name: String,
}

/// Token display block, derived deterministically from the token id.
#[derive(Debug, Clone, Serialize)]
pub struct PublicTokenInfo {
    pub id: String,
    pub symbol: String,
    pub price: f64,
}

/// Usage counters of the public projection.
#[derive(Debug, Clone, Serialize)]
pub struct PublicStats {
    pub users: i64,
    pub dau: i64,
    pub revenue: f64,
}
