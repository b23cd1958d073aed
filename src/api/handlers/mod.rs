//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod apps;
pub mod domains;
pub mod health;
pub mod publish;
pub mod reviews;
pub mod tokens;
pub mod usage;

pub use apps::{get_app_handler, list_apps_handler, search_apps_handler};
pub use domains::{check_domain_handler, register_domain_handler};
pub use health::health_handler;
pub use publish::publish_handler;
pub use reviews::review_app_handler;
pub use tokens::deploy_token_handler;
pub use usage::use_app_handler;
