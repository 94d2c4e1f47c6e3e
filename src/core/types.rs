use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::QuoteError;

/// A single priced entry within a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text description shown on the quote.
    pub description: String,
    /// Quantity ordered. The quote form enforces a minimum of 1.
    pub quantity: Decimal,
    /// Price per unit in rupees, full precision.
    pub unit_price: Decimal,
    /// Whether GST applies to this line.
    pub taxable: bool,
}

impl LineItem {
    /// `quantity * unit_price`, unrounded.
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// `quantity * unit_price`, or `None` if the product overflows `Decimal`.
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price)
    }
}

/// Seller/buyer jurisdictions and the GST rate to charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    /// Seller's state, e.g. "Delhi".
    pub company_state: String,
    /// Buyer's state; decides intra- vs inter-state treatment.
    pub place_of_supply: String,
    /// Total GST percentage. Usually one of 0/5/12/18/28 but any value is accepted.
    pub total_gst_rate: Decimal,
    /// Customer GSTIN, carried through untouched.
    pub gst_number: Option<String>,
}

impl Default for TaxConfiguration {
    /// Delhi to Delhi at 18%, the defaults of the quote form.
    fn default() -> Self {
        Self {
            company_state: "Delhi".to_string(),
            place_of_supply: "Delhi".to_string(),
            total_gst_rate: Decimal::from(18),
            gst_number: None,
        }
    }
}

/// Intra-state supplies pay CGST + SGST, inter-state supplies pay IGST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyType {
    /// Seller and buyer in the same state.
    IntraState,
    /// Seller and buyer in different states.
    InterState,
}

impl SupplyType {
    /// Badge label shown next to the GST breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::IntraState => "Intra-State",
            Self::InterState => "Inter-State",
        }
    }

    /// Explanatory notice for the user.
    pub fn description(&self) -> &'static str {
        match self {
            Self::IntraState => {
                "CGST + SGST will be applied as the supply is within the same state."
            }
            Self::InterState => {
                "IGST will be applied as the supply is between different states."
            }
        }
    }
}

/// GST rate split into its central, state and integrated components (percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GstSplit {
    /// Central GST rate.
    pub cgst: Decimal,
    /// State GST rate.
    pub sgst: Decimal,
    /// Integrated GST rate.
    pub igst: Decimal,
}

impl GstSplit {
    /// Sum of all three components. Always equals the configured total rate.
    pub fn total(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}

/// Computed quote figures. Derived from line items and tax configuration on
/// every call to [`compute_totals`](super::compute_totals), never stored
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Per-line `quantity * unit_price`, in input order.
    pub line_totals: Vec<Decimal>,
    /// Sum of all line totals.
    pub subtotal: Decimal,
    /// Sum of line totals flagged taxable.
    pub taxable_amount: Decimal,
    /// Intra- or inter-state treatment.
    pub supply_type: SupplyType,
    /// Rate split used for the component amounts.
    pub split: GstSplit,
    /// `taxable_amount * cgst / 100`.
    pub cgst_amount: Decimal,
    /// `taxable_amount * sgst / 100`.
    pub sgst_amount: Decimal,
    /// `taxable_amount * igst / 100`.
    pub igst_amount: Decimal,
    /// Configured total rate (percent).
    pub total_gst_rate: Decimal,
    /// `taxable_amount * total_gst_rate / 100`.
    pub total_gst_amount: Decimal,
    /// `subtotal + total_gst_amount`.
    pub grand_total: Decimal,
}

/// A quote ready for submission. Built by [`QuoteBuilder`](super::QuoteBuilder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Quote number, e.g. "QT-2024-001". Empty until assigned.
    pub number: String,
    /// Opportunity this quote belongs to.
    pub opportunity_id: String,
    /// Quote template, e.g. "standard" or "enterprise".
    pub template_id: Option<String>,
    pub issue_date: NaiveDate,
    pub valid_until: NaiveDate,
    pub line_items: Vec<LineItem>,
    pub tax_config: TaxConfiguration,
    /// Sales rep explicitly asked for an approval step.
    pub approval_required: bool,
    /// Totals computed at build time.
    pub totals: QuoteTotals,
}

impl Quote {
    /// Recompute totals from the current line items and tax configuration.
    ///
    /// Call after editing `line_items` or `tax_config` in place. On overflow
    /// the previous totals are left untouched.
    pub fn recalculate(&mut self) -> Result<(), QuoteError> {
        self.totals = super::try_compute_totals(&self.line_items, &self.tax_config)
            .map_err(|e| QuoteError::AmountOutOfRange(e.to_string()))?;
        Ok(())
    }
}
