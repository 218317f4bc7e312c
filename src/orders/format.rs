//! Field formatting for ORDERS segments.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::EdiError;

/// Date format of DTM and DTMLIN segments.
pub(crate) const DATE_FORMAT: &str = "%Y%m%d";

/// First `max` characters of `s`.
pub(crate) fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Newline-free text cut to `max` characters.
pub(crate) fn field(s: &str, max: usize) -> String {
    truncate(&strip_newlines(s), max).to_string()
}

/// Six decimals, then cut to `max` characters.
///
/// The cut is on the formatted text, not a numeric rounding: amounts wider
/// than `max` lose their trailing digits. Receivers rely on this layout.
pub(crate) fn format_amount(d: Decimal, max: usize) -> String {
    let mut s = d.round_dp(AMOUNT_DECIMALS).to_string();
    let decimals = match s.find('.') {
        Some(dot) => s.len() - dot - 1,
        None => {
            s.push('.');
            0
        }
    };
    for _ in decimals..AMOUNT_DECIMALS as usize {
        s.push('0');
    }
    truncate(&s, max).to_string()
}

const AMOUNT_DECIMALS: u32 = 6;

/// Fraction as a percentage without trailing zeros (0.21 -> "21").
pub(crate) fn format_percent(fraction: Decimal) -> Result<String, EdiError> {
    fraction
        .checked_mul(dec!(100))
        .map(|percent| percent.normalize().to_string())
        .ok_or_else(|| EdiError::Arithmetic(format!("percentage of {fraction} overflows")))
}

/// Quantity truncated toward zero. A missing quantity is zero.
pub(crate) fn format_quantity(quantity: Option<Decimal>) -> String {
    quantity
        .unwrap_or(Decimal::ZERO)
        .trunc()
        .normalize()
        .to_string()
}

/// Remove carriage returns and line feeds.
pub(crate) fn strip_newlines(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Fold `s` to plain ASCII (diacritics dropped, other scripts romanized).
pub fn transliterate(s: &str) -> String {
    deunicode::deunicode(s)
}
