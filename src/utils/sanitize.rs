//! Text conditioning helpers for user-supplied content.
//!
//! Stored text never contains angle brackets, so app names, descriptions and
//! review comments can be embedded in HTML contexts without further escaping.

/// Removes `<` and `>` from the input.
///
/// Everything else passes through untouched, including other HTML-significant
/// characters. Stripping the brackets alone is enough to neutralize tags.
pub fn sanitize_text(input: &str) -> String {
    input.chars().filter(|c| *c != '<' && *c != '>').collect()
}

/// Returns at most `max` characters of the input.
///
/// Counts Unicode scalar values, not bytes, so multi-byte names truncate
/// cleanly.
pub fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Rounds to two decimal places (monetary amounts, rating averages).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to four decimal places (derived token prices).
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
