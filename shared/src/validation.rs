//! Validation and normalization of offer form input
//!
//! Form fields arrive as raw text from inputs. Every rule reports its own
//! localized message so the user can correct the field in place.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Rejection reasons for an offer form, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OfferValidationError {
    #[error("Seleccione un proveedor.")]
    SupplierRequired,

    #[error("Precio inválido.")]
    InvalidPrice,

    #[error("Stock disponible inválido.")]
    InvalidAvailableStock,

    #[error("Stock reservado inválido.")]
    InvalidReservedStock,
}

// ============================================================================
// Numeric fields
// ============================================================================

fn parse_number(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(is_number_char) {
        return None;
    }
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

/// Parse a unit price: any number >= 0
pub fn parse_price(input: &str) -> Option<Decimal> {
    parse_number(input).filter(|price| *price >= Decimal::ZERO)
}

/// Parse a stock quantity: a whole number >= 0
///
/// `"5.0"` is accepted as 5, `"2.5"` is not. Quantities are bounded by the
/// backend's 32-bit stock columns, so anything above `i32::MAX` is rejected.
pub fn parse_stock(input: &str) -> Option<i32> {
    let value = parse_number(input)?;
    if value < Decimal::ZERO || !value.fract().is_zero() {
        return None;
    }
    value.trunc().to_i32()
}

/// Format a price with exactly two decimals
pub fn format_price(price: Decimal) -> String {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Text representation of a stored price for an input field ("20", "19.99")
pub fn price_input_value(price: Decimal) -> String {
    price.normalize().to_string()
}

// ============================================================================
// Expiration timestamps
// ============================================================================

/// Width of the `YYYY-MM-DDTHH:MM` value used by datetime inputs
pub const DATETIME_INPUT_LEN: usize = 16;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Truncate a stored timestamp to the precision of a datetime input
pub fn datetime_input_value(timestamp: &str) -> String {
    timestamp.chars().take(DATETIME_INPUT_LEN).collect()
}

/// Convert a datetime input value to an ISO-8601 instant
///
/// Blank or unparsable input yields `None`. Values without an offset are
/// read as UTC, the same zone the backend stores them in.
pub fn to_iso_or_null(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    parse_instant(input).map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

// ============================================================================
// Free text fields
// ============================================================================

/// Trim a text field, mapping blank input to `None`
pub fn trimmed_or_null(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ========================================================================
    // Price
    // ========================================================================

    #[test]
    fn test_parse_price_accepts_zero_and_decimals() {
        assert_eq!(parse_price("0"), Some(Decimal::ZERO));
        assert_eq!(parse_price("19.99"), Some(dec("19.99")));
        assert_eq!(parse_price(" 7.5 "), Some(dec("7.5")));
        assert_eq!(parse_price("1e2"), Some(Decimal::from(100)));
    }

    #[test]
    fn test_parse_price_rejects_invalid() {
        assert_eq!(parse_price("-0.01"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
        assert_eq!(parse_price("1_000"), None);
        assert_eq!(parse_price("1,5"), None);
        assert_eq!(parse_price("0x10"), None);
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Decimal::from(20)), "20.00");
        assert_eq!(format_price(dec("19.9")), "19.90");
        assert_eq!(format_price(dec("0.005")), "0.01");
        assert_eq!(format_price(dec("3.14159")), "3.14");
    }

    #[test]
    fn test_price_input_value_drops_trailing_zeros() {
        assert_eq!(price_input_value(dec("20.00")), "20");
        assert_eq!(price_input_value(dec("19.990")), "19.99");
    }

    // ========================================================================
    // Stock
    // ========================================================================

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("0"), Some(0));
        assert_eq!(parse_stock("5"), Some(5));
        assert_eq!(parse_stock("5.0"), Some(5));
        assert_eq!(parse_stock("2.5"), None);
        assert_eq!(parse_stock("-1"), None);
        assert_eq!(parse_stock(""), None);
        assert_eq!(parse_stock("diez"), None);
        assert_eq!(parse_stock("1_0"), None);
        assert_eq!(parse_stock("99999999999"), None);
    }

    // ========================================================================
    // Expiration
    // ========================================================================

    #[test]
    fn test_to_iso_or_null_from_datetime_input() {
        assert_eq!(
            to_iso_or_null("2025-03-01T10:30").as_deref(),
            Some("2025-03-01T10:30:00.000Z")
        );
    }

    #[test]
    fn test_to_iso_or_null_accepts_full_instants() {
        assert_eq!(
            to_iso_or_null("2025-03-01T10:30:00-03:00").as_deref(),
            Some("2025-03-01T13:30:00.000Z")
        );
        assert_eq!(
            to_iso_or_null("2025-03-01").as_deref(),
            Some("2025-03-01T00:00:00.000Z")
        );
    }

    #[test]
    fn test_to_iso_or_null_blank_or_garbage() {
        assert_eq!(to_iso_or_null(""), None);
        assert_eq!(to_iso_or_null("   "), None);
        assert_eq!(to_iso_or_null("mañana"), None);
        assert_eq!(to_iso_or_null("2025-13-40T99:99"), None);
    }

    #[test]
    fn test_datetime_input_value_truncates() {
        assert_eq!(datetime_input_value("2025-03-01T10:30:45.000Z"), "2025-03-01T10:30");
        assert_eq!(datetime_input_value("2025-03-01"), "2025-03-01");
    }

    #[test]
    fn test_trimmed_or_null() {
        assert_eq!(trimmed_or_null("  L-01 "), Some("L-01".to_string()));
        assert_eq!(trimmed_or_null(" \t "), None);
        assert_eq!(trimmed_or_null(""), None);
    }

    // ========================================================================
    // Properties
    // ========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any non-negative cents amount parses back to itself
        #[test]
        fn prop_non_negative_prices_accepted(cents in 0i64..100_000_000) {
            let price = Decimal::new(cents, 2);
            prop_assert_eq!(parse_price(&price.to_string()), Some(price));
        }

        /// Any negative amount is rejected
        #[test]
        fn prop_negative_prices_rejected(cents in 1i64..100_000_000) {
            let price = Decimal::new(-cents, 2);
            prop_assert_eq!(parse_price(&price.to_string()), None);
        }

        /// Whole non-negative quantities are accepted, negatives rejected
        #[test]
        fn prop_stock_integers(n in 0i32..i32::MAX) {
            prop_assert_eq!(parse_stock(&n.to_string()), Some(n));
            prop_assert_eq!(parse_stock(&format!("-{}", n.max(1))), None);
        }

        /// Quantities with a fractional part are rejected
        #[test]
        fn prop_fractional_stock_rejected(whole in 0i32..100_000, frac in 1u32..100) {
            let input = format!("{}.{:02}", whole, frac);
            prop_assert_eq!(parse_stock(&input), None);
        }

        /// Formatted prices always carry exactly two decimals
        #[test]
        fn prop_format_price_two_decimals(units in 0i64..1_000_000_000, scale in 0u32..6) {
            let formatted = format_price(Decimal::new(units, scale));
            let decimals = formatted.split('.').nth(1).map(str::len);
            prop_assert_eq!(decimals, Some(2));
        }
    }
}
