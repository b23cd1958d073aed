//! Utility functions for id generation, text conditioning, and derived values.
//!
//! This module provides helper functions used across the application:
//!
//! - [`ids`] - Sequential identifier generation
//! - [`sanitize`] - Text stripping, truncation and decimal rounding
//! - [`subdomain`] - Subdomain name validation
//! - [`token_display`] - Symbol and price derivation for token ids

pub mod ids;
pub mod sanitize;
pub mod subdomain;
pub mod token_display;
