//! Subdomain name validation.
//!
//! Subdomains double as platform domain names, so the same rules apply to
//! both `domain/register` and app publication.

use regex::Regex;
use std::sync::LazyLock;

/// Names reserved for platform infrastructure.
pub const RESERVED_SUBDOMAINS: &[&str] = &["admin", "api", "root", "store", "builder"];

/// Compiled pattern for acceptable subdomain names.
///
/// Lowercase letters, digits and hyphens, starting and ending with a letter
/// or digit, up to 32 characters. The optional group makes a single
/// character valid while two characters are not; the client-facing message
/// advertises 3-32 but the pattern is authoritative.
static SUBDOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]{1,30}[a-z0-9])?$").unwrap());

/// Reasons a subdomain name is rejected.
///
/// Display strings are part of the public API contract; clients match on
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubdomainError {
    #[error("Domain name is required")]
    Empty,

    #[error("Domain must be 3-32 chars of lowercase letters, numbers, hyphen")]
    InvalidPattern,

    #[error("Reserved domain")]
    Reserved,
}

/// Normalizes a raw subdomain to its canonical stored form.
pub fn normalize_subdomain(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validates an already-normalized subdomain name.
///
/// # Rules
///
/// 1. Must be non-empty
/// 2. Must match [`SUBDOMAIN_REGEX`]
/// 3. Must not be a reserved platform name
///
/// Availability against already-registered names is a storage concern and is
/// checked separately under the store lock.
///
/// # Errors
///
/// Returns the first failing [`SubdomainError`] in rule order.
pub fn validate_subdomain(name: &str) -> Result<(), SubdomainError> {
    if name.is_empty() {
        return Err(SubdomainError::Empty);
    }

    if !SUBDOMAIN_REGEX.is_match(name) {
        return Err(SubdomainError::InvalidPattern);
    }

    if RESERVED_SUBDOMAINS.contains(&name) {
        return Err(SubdomainError::Reserved);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_subdomain("  MyApp  "), "myapp");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_subdomain("   "), "");
    }

    #[test]
    fn test_validate_simple_name() {
        assert!(validate_subdomain("lottery").is_ok());
    }

    #[test]
    fn test_validate_with_digits_and_hyphens() {
        assert!(validate_subdomain("my-app-2026").is_ok());
    }

    #[test]
    fn test_validate_short_names() {
        assert!(validate_subdomain("abc").is_ok());
        assert_eq!(validate_subdomain("ab"), Err(SubdomainError::InvalidPattern));
        // The optional tail group leaves bare single characters valid.
        assert!(validate_subdomain("a").is_ok());
    }

    #[test]
    fn test_validate_maximum_length_thirty_two() {
        let max = "a".repeat(32);
        let too_long = "a".repeat(33);

        assert!(validate_subdomain(&max).is_ok());
        assert_eq!(validate_subdomain(&too_long), Err(SubdomainError::InvalidPattern));
    }

    #[test]
    fn test_validate_empty_name() {
        assert_eq!(validate_subdomain(""), Err(SubdomainError::Empty));
    }

    #[test]
    fn test_validate_uppercase_rejected() {
        assert_eq!(validate_subdomain("MyApp"), Err(SubdomainError::InvalidPattern));
    }

    #[test]
    fn test_validate_leading_hyphen_rejected() {
        assert_eq!(validate_subdomain("-app"), Err(SubdomainError::InvalidPattern));
    }

    #[test]
    fn test_validate_trailing_hyphen_rejected() {
        assert_eq!(validate_subdomain("app-"), Err(SubdomainError::InvalidPattern));
    }

    #[test]
    fn test_validate_inner_hyphens_ok() {
        assert!(validate_subdomain("a-b-c").is_ok());
    }

    #[test]
    fn test_validate_special_characters_rejected() {
        assert_eq!(validate_subdomain("my.app"), Err(SubdomainError::InvalidPattern));
        assert_eq!(validate_subdomain("my_app"), Err(SubdomainError::InvalidPattern));
        assert_eq!(validate_subdomain("my app"), Err(SubdomainError::InvalidPattern));
    }

    #[test]
    fn test_validate_unicode_rejected() {
        assert_eq!(validate_subdomain("приложение"), Err(SubdomainError::InvalidPattern));
    }

    #[test]
    fn test_validate_all_reserved_names() {
        for &reserved in RESERVED_SUBDOMAINS {
            assert_eq!(
                validate_subdomain(reserved),
                Err(SubdomainError::Reserved),
                "'{}' should be reserved",
                reserved
            );
        }
    }

    #[test]
    fn test_reserved_check_applies_after_pattern() {
        // "api" is reserved territory but also a valid pattern; the reserved
        // error must win only once the pattern passes.
        assert_eq!(validate_subdomain("api"), Err(SubdomainError::Reserved));
    }

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            SubdomainError::Empty.to_string(),
            "Domain name is required"
        );
        assert_eq!(
            SubdomainError::InvalidPattern.to_string(),
            "Domain must be 3-32 chars of lowercase letters, numbers, hyphen"
        );
        assert_eq!(SubdomainError::Reserved.to_string(), "Reserved domain");
    }
}
