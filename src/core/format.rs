//! Presentation of quote amounts in Indian Rupees.
//!
//! Calculation keeps full precision; rounding happens only here.
//! Grouping follows the Indian system: the last three integer digits, then
//! pairs (`₹28,32,000.00` rather than `₹2,832,000.00`).

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::QuoteTotals;

/// Maximum fraction digits shown for rupee amounts (paise).
const MAX_FRACTION_DIGITS: u32 = 2;

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format `amount` as rupees with Indian digit grouping.
///
/// Shows at most two fraction digits and at least `min_fraction_digits`
/// (capped at two). The detail view uses 2, the header and approval drawer use 0.
///
/// ```
/// use bijak::core::format_inr;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_inr(dec!(2832000), 2), "₹28,32,000.00");
/// assert_eq!(format_inr(dec!(2567890), 0), "₹25,67,890");
/// assert_eq!(format_inr(dec!(12.5), 0), "₹12.5");
/// ```
pub fn format_inr(amount: Decimal, min_fraction_digits: u32) -> String {
    let min_fraction_digits = min_fraction_digits.min(MAX_FRACTION_DIGITS);
    let rounded = round_half_up(amount, MAX_FRACTION_DIGITS);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.to_string();
    while frac.len() > min_fraction_digits as usize && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = String::with_capacity(fixed.len() + 8);
    if negative {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&group_indian(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Insert separators as 12,34,56,789.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a percentage without trailing zeros, e.g. `9`, `2.5`.
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}

/// Render the quote summary block with GST breakdown.
pub fn render_summary(totals: &QuoteTotals) -> String {
    let split = &totals.split;
    let lines = [
        format!("Supply: {}", totals.supply_type.label()),
        format!("Subtotal: {}", format_inr(totals.subtotal, 2)),
        format!("Taxable Amount: {}", format_inr(totals.taxable_amount, 2)),
        format!(
            "CGST ({}%): {}",
            format_rate(split.cgst),
            format_inr(totals.cgst_amount, 2)
        ),
        format!(
            "SGST ({}%): {}",
            format_rate(split.sgst),
            format_inr(totals.sgst_amount, 2)
        ),
        format!(
            "IGST ({}%): {}",
            format_rate(split.igst),
            format_inr(totals.igst_amount, 2)
        ),
        format!(
            "Total GST ({}%): {}",
            format_rate(totals.total_gst_rate),
            format_inr(totals.total_gst_amount, 2)
        ),
        format!("Grand Total: {}", format_inr(totals.grand_total, 2)),
    ];
    lines.join("\n")
}
