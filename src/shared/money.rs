//! Monetary amounts in laari
//!
//! All amounts in the system are stored as `i64` laari, the minor unit of
//! the Maldivian rufiyaa (1 MVR = 100 laari). Fares never go negative.

/// ISO 4217 code used on every payment and refund.
pub const CURRENCY: &str = "MVR";

/// Half of an amount, rounded half-away-from-zero to the laari.
///
/// This is the shared rounding rule behind the 50% refund policy; the
/// refund-preview endpoint and the cancellation flow both go through it.
pub fn half_rounded(amount: i64) -> i64 {
    debug_assert!(amount >= 0, "fares are non-negative");
    (amount + 1) / 2
}

/// Format an amount in laari as a human-readable MVR string.
pub fn format_mvr(amount: i64) -> String {
    format!("{}.{:02} {}", amount / 100, (amount % 100).abs(), CURRENCY)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_of_even_amount() {
        assert_eq!(half_rounded(10_000), 5_000);
        assert_eq!(half_rounded(0), 0);
    }

    #[test]
    fn half_of_odd_amount_rounds_up() {
        // 999 laari -> 499.5 -> 500
        assert_eq!(half_rounded(999), 500);
        // 101 laari -> 50.5 -> 51
        assert_eq!(half_rounded(101), 51);
    }

    #[test]
    fn half_never_exceeds_amount() {
        for f in [0i64, 1, 2, 3, 99, 100, 101, 999, 10_000, 123_457] {
            assert!(half_rounded(f) <= f);
            assert!(half_rounded(f) >= 0);
        }
    }

    #[test]
    fn format_mvr_renders_minor_units() {
        assert_eq!(format_mvr(12_345), "123.45 MVR");
        assert_eq!(format_mvr(0), "0.00 MVR");
        assert_eq!(format_mvr(5_000), "50.00 MVR");
    }
}
