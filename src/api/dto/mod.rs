//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Query and body
//! fields that clients historically send as junk (non-numeric pages, string
//! ratings) deserialize leniently via `serde_with::DefaultOnError` instead of
//! rejecting the request.

pub mod apps;
pub mod domain;
pub mod health;
pub mod publish;
pub mod review;
pub mod token;
pub mod usage;
