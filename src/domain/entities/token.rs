//! Deployed token entity.
//!
//! Deployment is simulated: no chain is contacted and the address is a
//! deterministic function of the minted token id.

use chrono::{DateTime, Utc};

/// A token deployment record.
#[derive(Debug, Clone)]
pub struct DeployedToken {
    pub token_id: String,
    pub address: String,
    pub explorer_url: String,
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub initial_supply: i64,
    pub created_at: DateTime<Utc>,
}

/// Conditioned input for deploying a token.
///
/// Text fields are sanitized, truncated and defaulted by the service layer;
/// `initial_supply` is already floored to a whole number of at least one.
#[derive(Debug, Clone)]
pub struct NewToken {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub initial_supply: i64,
}
