use rust_decimal::Decimal;

use super::calculation::{
    checked_gst_amount, checked_sum, compute_jurisdiction_split, out_of_range, try_compute_totals,
};
use super::error::{QuoteError, ValidationError, join_errors};
use super::states::is_known_state;
use super::types::*;

/// Validate line items the way the quote form does.
/// Returns all validation errors found (not just the first).
pub fn validate_line_items(line_items: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, line) in line_items.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }
    errors
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("line_items[{index}]");

    if line.description.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.description"),
            "description is required",
            "LI-01",
        ));
    }

    if line.quantity < Decimal::ONE {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.quantity"),
            format!("quantity must be at least 1, got {}", line.quantity),
            "LI-02",
        ));
    }

    if line.unit_price.is_sign_negative() && !line.unit_price.is_zero() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.unit_price"),
            format!("unit price must not be negative, got {}", line.unit_price),
            "LI-03",
        ));
    }

    if line.checked_line_total().is_none() {
        errors.push(ValidationError::with_rule(
            prefix,
            format!(
                "line total {} x {} is out of range",
                line.quantity, line.unit_price
            ),
            "LI-04",
        ));
    }
}

/// Validate jurisdictions and rate.
///
/// Both states must be known display names (see [`IndianState`](super::IndianState)).
/// Non-canonical rates pass; only negative rates are rejected.
pub fn validate_tax_configuration(config: &TaxConfiguration) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_state(&config.company_state, "company_state", "TC-01", &mut errors);
    validate_state(&config.place_of_supply, "place_of_supply", "TC-02", &mut errors);

    if config.total_gst_rate.is_sign_negative() && !config.total_gst_rate.is_zero() {
        errors.push(ValidationError::with_rule(
            "total_gst_rate",
            format!("GST rate must not be negative, got {}", config.total_gst_rate),
            "TC-03",
        ));
    }

    errors
}

fn validate_state(value: &str, field: &str, rule: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            field,
            format!("{} is required", field.replace('_', " ")),
            rule,
        ));
    } else if !is_known_state(value) {
        errors.push(ValidationError::with_rule(
            field,
            format!("'{value}' is not a known Indian state"),
            rule,
        ));
    }
}

/// Validate inputs, then compute totals.
///
/// Unlike [`compute_totals`](super::compute_totals), rejects inputs the
/// quote form would not accept instead of computing on them, and never
/// panics: sums that overflow come back as [`QuoteError::AmountOutOfRange`].
pub fn compute_totals_checked(
    line_items: &[LineItem],
    tax_config: &TaxConfiguration,
) -> Result<QuoteTotals, QuoteError> {
    let line_errors = validate_line_items(line_items);
    if !line_errors.is_empty() {
        return Err(QuoteError::InvalidLineItem(join_errors(&line_errors)));
    }

    let config_errors = validate_tax_configuration(tax_config);
    if !config_errors.is_empty() {
        return Err(QuoteError::InvalidTaxConfiguration(join_errors(
            &config_errors,
        )));
    }

    try_compute_totals(line_items, tax_config)
        .map_err(|e| QuoteError::AmountOutOfRange(e.to_string()))
}

/// Check that `totals` is consistent with the inputs it claims to derive from.
///
/// Useful for totals that arrive from outside (e.g. a decoded payload).
/// Expected figures are computed with checked arithmetic; one that does not
/// fit is reported as `QT-06` instead of compared.
pub fn validate_arithmetic(
    totals: &QuoteTotals,
    line_items: &[LineItem],
    tax_config: &TaxConfiguration,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match checked_sum(line_items.iter().map(LineItem::checked_line_total)) {
        Some(expected) if totals.subtotal != expected => {
            errors.push(ValidationError::with_rule(
                "totals.subtotal",
                format!(
                    "subtotal {} does not match sum of line totals {}",
                    totals.subtotal, expected
                ),
                "QT-01",
            ));
        }
        Some(_) => {}
        None => errors.push(out_of_range("totals.subtotal", "sum of line totals")),
    }

    let taxable_lines = line_items
        .iter()
        .filter(|l| l.taxable)
        .map(LineItem::checked_line_total);
    match checked_sum(taxable_lines) {
        Some(expected) if totals.taxable_amount != expected => {
            errors.push(ValidationError::with_rule(
                "totals.taxable_amount",
                format!(
                    "taxable amount {} does not match sum of taxable lines {}",
                    totals.taxable_amount, expected
                ),
                "QT-02",
            ));
        }
        Some(_) => {}
        None => errors.push(out_of_range("totals.taxable_amount", "sum of taxable lines")),
    }

    let expected_split = compute_jurisdiction_split(
        &tax_config.company_state,
        &tax_config.place_of_supply,
        tax_config.total_gst_rate,
    );
    if totals.split != expected_split {
        errors.push(ValidationError::with_rule(
            "totals.split",
            format!(
                "split cgst {} / sgst {} / igst {} is stale for {} -> {} at {}%",
                totals.split.cgst,
                totals.split.sgst,
                totals.split.igst,
                tax_config.company_state,
                tax_config.place_of_supply,
                tax_config.total_gst_rate
            ),
            "QT-03",
        ));
    }

    match checked_gst_amount(totals.taxable_amount, tax_config.total_gst_rate) {
        Some(expected) if totals.total_gst_amount != expected => {
            errors.push(ValidationError::with_rule(
                "totals.total_gst_amount",
                format!(
                    "GST amount {} does not match taxable {} at {}%",
                    totals.total_gst_amount, totals.taxable_amount, tax_config.total_gst_rate
                ),
                "QT-04",
            ));
        }
        Some(_) => {}
        None => errors.push(out_of_range("totals.total_gst_amount", "GST amount")),
    }

    match totals.subtotal.checked_add(totals.total_gst_amount) {
        Some(expected) if totals.grand_total != expected => {
            errors.push(ValidationError::with_rule(
                "totals.grand_total",
                format!(
                    "grand total {} does not match subtotal {} + GST {}",
                    totals.grand_total, totals.subtotal, totals.total_gst_amount
                ),
                "QT-05",
            ));
        }
        Some(_) => {}
        None => errors.push(out_of_range("totals.grand_total", "subtotal + GST")),
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute_totals;
    use rust_decimal_macros::dec;

    fn line(desc: &str, qty: Decimal, price: Decimal) -> LineItem {
        LineItem {
            description: desc.into(),
            quantity: qty,
            unit_price: price,
            taxable: true,
        }
    }

    #[test]
    fn valid_lines_pass() {
        let lines = vec![line("EHR licence", dec!(1), dec!(1500000))];
        assert!(validate_line_items(&lines).is_empty());
    }

    #[test]
    fn zero_price_allowed() {
        let lines = vec![line("Free onboarding", dec!(1), dec!(0))];
        assert!(validate_line_items(&lines).is_empty());
    }

    #[test]
    fn all_line_errors_reported() {
        let lines = vec![
            line("", dec!(0), dec!(-1)),
            line("ok", dec!(2), dec!(10)),
            line(" ", dec!(0.5), dec!(10)),
        ];
        let errors = validate_line_items(&lines);
        let rules: Vec<_> = errors.iter().map(|e| e.rule.as_deref().unwrap()).collect();
        assert_eq!(rules, vec!["LI-01", "LI-02", "LI-03", "LI-01", "LI-02"]);
        assert_eq!(errors[3].field, "line_items[2].description");
    }

    #[test]
    fn default_config_valid() {
        assert!(validate_tax_configuration(&TaxConfiguration::default()).is_empty());
    }

    #[test]
    fn unknown_and_missing_states() {
        let config = TaxConfiguration {
            company_state: "".into(),
            place_of_supply: "Atlantis".into(),
            ..TaxConfiguration::default()
        };
        let errors = validate_tax_configuration(&config);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "company state is required");
        assert!(errors[1].message.contains("Atlantis"));
    }

    #[test]
    fn arbitrary_positive_rate_passes() {
        let config = TaxConfiguration {
            total_gst_rate: dec!(7.5),
            ..TaxConfiguration::default()
        };
        assert!(validate_tax_configuration(&config).is_empty());
    }

    #[test]
    fn negative_rate_rejected() {
        let config = TaxConfiguration {
            total_gst_rate: dec!(-18),
            ..TaxConfiguration::default()
        };
        let errors = validate_tax_configuration(&config);
        assert_eq!(errors[0].rule.as_deref(), Some("TC-03"));
    }

    #[test]
    fn checked_rejects_bad_lines() {
        let lines = vec![line("x", dec!(-1), dec!(10))];
        let err = compute_totals_checked(&lines, &TaxConfiguration::default()).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidLineItem(_)));
    }

    #[test]
    fn checked_rejects_bad_config() {
        let lines = vec![line("x", dec!(1), dec!(10))];
        let config = TaxConfiguration {
            place_of_supply: "delhi".into(),
            ..TaxConfiguration::default()
        };
        let err = compute_totals_checked(&lines, &config).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidTaxConfiguration(_)));
    }

    #[test]
    fn checked_matches_unchecked_on_valid_input() {
        let lines = vec![line("x", dec!(3), dec!(999.99))];
        let config = TaxConfiguration::default();
        assert_eq!(
            compute_totals_checked(&lines, &config).unwrap(),
            compute_totals(&lines, &config)
        );
    }

    #[test]
    fn arithmetic_of_fresh_totals_is_consistent() {
        let lines = vec![line("x", dec!(40), dec!(15000))];
        let config = TaxConfiguration::default();
        let totals = compute_totals(&lines, &config);
        assert!(validate_arithmetic(&totals, &lines, &config).is_empty());
    }

    #[test]
    fn stale_split_detected() {
        let lines = vec![line("x", dec!(1), dec!(1000))];
        let mut config = TaxConfiguration::default();
        let totals = compute_totals(&lines, &config);
        config.place_of_supply = "Maharashtra".into();

        let errors = validate_arithmetic(&totals, &lines, &config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("QT-03"));
    }

    #[test]
    fn tampered_grand_total_detected() {
        let lines = vec![line("x", dec!(1), dec!(1000))];
        let config = TaxConfiguration::default();
        let mut totals = compute_totals(&lines, &config);
        totals.grand_total += dec!(1);

        let errors = validate_arithmetic(&totals, &lines, &config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "totals.grand_total");
    }

    #[test]
    fn line_total_overflow_is_a_line_error() {
        let huge = dec!(100000000000000000);
        let errors = validate_line_items(&[line("Rack", huge, huge)]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("LI-04"));
        assert_eq!(errors[0].field, "line_items[0]");
    }

    #[test]
    fn checked_reports_overflowing_sum() {
        let lines = vec![line("a", dec!(1), Decimal::MAX), line("b", dec!(1), Decimal::MAX)];
        let err = compute_totals_checked(&lines, &TaxConfiguration::default()).unwrap_err();
        match err {
            QuoteError::AmountOutOfRange(msg) => assert!(msg.contains("QT-06"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn arithmetic_of_huge_claimed_totals_reported() {
        let lines = vec![line("x", dec!(1), dec!(1000))];
        let config = TaxConfiguration::default();
        let mut totals = compute_totals(&lines, &config);
        totals.subtotal = Decimal::MAX;
        totals.total_gst_amount = Decimal::MAX;

        let errors = validate_arithmetic(&totals, &lines, &config);
        let rules: Vec<_> = errors.iter().filter_map(|e| e.rule.as_deref()).collect();
        assert_eq!(rules, vec!["QT-01", "QT-04", "QT-06"]);
    }
}
