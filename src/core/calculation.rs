use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::rates::GstRate;
use super::types::*;

/// Decide intra- vs inter-state treatment.
///
/// Exact, case-sensitive comparison of the two jurisdiction names. No
/// lookup against the known state list happens here; see
/// [`validate_tax_configuration`](super::validate_tax_configuration) for that.
pub fn determine_supply_type(company_state: &str, place_of_supply: &str) -> SupplyType {
    if company_state == place_of_supply {
        SupplyType::IntraState
    } else {
        SupplyType::InterState
    }
}

/// Split a total GST rate into CGST/SGST/IGST.
///
/// Intra-state: `cgst = sgst = rate / 2`, `igst = 0`.
/// Inter-state: `cgst = sgst = 0`, `igst = rate`.
///
/// Any rate is accepted, including non-canonical and negative ones.
pub fn compute_jurisdiction_split(
    company_state: &str,
    place_of_supply: &str,
    total_gst_rate: Decimal,
) -> GstSplit {
    match determine_supply_type(company_state, place_of_supply) {
        SupplyType::IntraState => {
            let half = total_gst_rate / dec!(2);
            GstSplit {
                cgst: half,
                sgst: half,
                igst: Decimal::ZERO,
            }
        }
        SupplyType::InterState => GstSplit {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: total_gst_rate,
        },
    }
}

/// `amount * rate / 100`, unrounded.
pub fn gst_amount(amount: Decimal, rate: Decimal) -> Decimal {
    amount * rate / dec!(100)
}

/// [`gst_amount`] returning `None` instead of panicking on overflow.
pub fn checked_gst_amount(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    amount.checked_mul(rate)?.checked_div(dec!(100))
}

/// Sum that stops at the first missing value or overflow.
pub(crate) fn checked_sum<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v?))
}

pub(crate) fn out_of_range(field: impl Into<String>, what: &str) -> ValidationError {
    ValidationError::with_rule(field, format!("{what} is out of range"), "QT-06")
}

/// Compute all quote figures from line items and tax configuration.
///
/// The jurisdiction split is recomputed from `tax_config` on every call.
/// Amounts carry full precision; round at the presentation boundary
/// (see [`format_inr`](super::format_inr)).
///
/// Negative quantities or prices are not clamped: the result stays
/// arithmetically consistent with the inputs.
///
/// # Panics
///
/// Panics if an amount overflows `Decimal` (roughly 7.9 × 10²⁸). Use
/// [`try_compute_totals`] or [`compute_totals_checked`](super::compute_totals_checked)
/// for input that has not been bounded.
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
///
/// let lines = vec![
///     LineItemBuilder::new("Implementation", dec!(1), dec!(100000)).build(),
///     LineItemBuilder::new("Training", dec!(1), dec!(50000)).taxable(false).build(),
/// ];
/// let totals = compute_totals(&lines, &TaxConfiguration::default());
///
/// assert_eq!(totals.subtotal, dec!(150000));
/// assert_eq!(totals.taxable_amount, dec!(100000));
/// assert_eq!(totals.grand_total, dec!(168000));
/// ```
pub fn compute_totals(line_items: &[LineItem], tax_config: &TaxConfiguration) -> QuoteTotals {
    let line_totals: Vec<Decimal> = line_items.iter().map(LineItem::line_total).collect();

    let subtotal: Decimal = line_totals.iter().sum();
    let taxable_amount: Decimal = line_items
        .iter()
        .zip(&line_totals)
        .filter(|(item, _)| item.taxable)
        .map(|(_, total)| *total)
        .sum();

    let supply_type = determine_supply_type(&tax_config.company_state, &tax_config.place_of_supply);
    let split = compute_jurisdiction_split(
        &tax_config.company_state,
        &tax_config.place_of_supply,
        tax_config.total_gst_rate,
    );

    let total_gst_amount = gst_amount(taxable_amount, tax_config.total_gst_rate);
    let grand_total = subtotal + total_gst_amount;

    tracing::debug!(
        lines = line_items.len(),
        %subtotal,
        %taxable_amount,
        supply_type = supply_type.label(),
        rate = %tax_config.total_gst_rate,
        canonical_rate = GstRate::from_percent(tax_config.total_gst_rate).is_some(),
        %grand_total,
        "computed quote totals"
    );

    QuoteTotals {
        line_totals,
        subtotal,
        taxable_amount,
        supply_type,
        split,
        cgst_amount: gst_amount(taxable_amount, split.cgst),
        sgst_amount: gst_amount(taxable_amount, split.sgst),
        igst_amount: gst_amount(taxable_amount, split.igst),
        total_gst_rate: tax_config.total_gst_rate,
        total_gst_amount,
        grand_total,
    }
}

/// [`compute_totals`] with overflow-checked arithmetic.
///
/// Returns the first figure that does not fit: `LI-04` for a line total,
/// `QT-06` for a sum or GST amount.
pub fn try_compute_totals(
    line_items: &[LineItem],
    tax_config: &TaxConfiguration,
) -> Result<QuoteTotals, ValidationError> {
    let mut line_totals = Vec::with_capacity(line_items.len());
    for (i, item) in line_items.iter().enumerate() {
        let total = item.checked_line_total().ok_or_else(|| {
            ValidationError::with_rule(
                format!("line_items[{i}]"),
                "line total out of range",
                "LI-04",
            )
        })?;
        line_totals.push(total);
    }

    let subtotal = checked_sum(line_totals.iter().copied().map(Some))
        .ok_or_else(|| out_of_range("totals.subtotal", "subtotal"))?;
    let taxable_amount = checked_sum(
        line_items
            .iter()
            .zip(&line_totals)
            .filter(|(item, _)| item.taxable)
            .map(|(_, total)| Some(*total)),
    )
    .ok_or_else(|| out_of_range("totals.taxable_amount", "taxable amount"))?;

    let supply_type = determine_supply_type(&tax_config.company_state, &tax_config.place_of_supply);
    let split = compute_jurisdiction_split(
        &tax_config.company_state,
        &tax_config.place_of_supply,
        tax_config.total_gst_rate,
    );

    let amount = |rate: Decimal, field: &str| {
        checked_gst_amount(taxable_amount, rate).ok_or_else(|| out_of_range(field, "GST amount"))
    };
    let total_gst_amount = amount(tax_config.total_gst_rate, "totals.total_gst_amount")?;
    let cgst_amount = amount(split.cgst, "totals.cgst_amount")?;
    let sgst_amount = amount(split.sgst, "totals.sgst_amount")?;
    let igst_amount = amount(split.igst, "totals.igst_amount")?;

    let grand_total = subtotal
        .checked_add(total_gst_amount)
        .ok_or_else(|| out_of_range("totals.grand_total", "grand total"))?;

    Ok(QuoteTotals {
        line_totals,
        subtotal,
        taxable_amount,
        supply_type,
        split,
        cgst_amount,
        sgst_amount,
        igst_amount,
        total_gst_rate: tax_config.total_gst_rate,
        total_gst_amount,
        grand_total,
    })
}
