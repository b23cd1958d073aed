//! Display attributes derived from token identifiers.
//!
//! No token ledger exists behind the registry; the symbol and quoted price
//! shown for an app's token are pure functions of the token id. Both must
//! stay stable across releases because clients cache them.

use crate::utils::sanitize::round4;

/// Derives the display symbol for a token id.
///
/// Keeps ASCII alphanumerics, uppercases them and takes the first six;
/// an id with no usable characters falls back to `TKN`. The result is
/// right-padded with `X` to at least three characters.
pub fn derive_token_symbol(token_id: &str) -> String {
    let normalized: String = token_id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(6)
        .collect();

    let mut symbol = if normalized.is_empty() {
        "TKN".to_string()
    } else {
        normalized
    };
    while symbol.len() < 3 {
        symbol.push('X');
    }
    symbol
}

/// Derives a pseudo market price from a token id.
///
/// Hashes the id's UTF-16 code units with the classic `h*31 + c` polynomial
/// in wrapping 32-bit arithmetic, then maps the hash into
/// `[0.0005, 0.5004]` with four decimal places. Deterministic for a given
/// id on every platform.
pub fn derive_token_price(token_id: &str) -> f64 {
    let mut hash: i32 = 0;
    for unit in token_id.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }

    let price = f64::from((hash % 5000).abs()) / 10_000.0 + 0.0005;
    round4(price)
}
