//! Quote creation request sent to the CRM backend.
//!
//! A flat camelCase JSON object. Totals are always recomputed from the
//! quote's inputs when the payload is built, so a payload can never carry
//! figures from an earlier edit.
//!
//! ```
//! use bijak::core::*;
//! use bijak::payload::QuotePayload;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let quote = QuoteBuilder::new("1", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
//!     .add_line(LineItemBuilder::new("Analytics module", dec!(2), dec!(50000)).build())
//!     .build()
//!     .unwrap();
//!
//! let payload = QuotePayload::from_quote(&quote).unwrap();
//! assert_eq!(payload.total_amount, dec!(118000));
//!
//! let json = payload.to_json().unwrap();
//! assert!(json.contains(r#""opportunityId":"1""#));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{
    LineItem, Quote, QuoteError, TaxConfiguration, ValidationError, try_compute_totals,
    validate_arithmetic,
};

/// Line item as sent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadLineItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub taxable: bool,
}

impl From<&LineItem> for PayloadLineItem {
    fn from(line: &LineItem) -> Self {
        Self {
            description: line.description.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            taxable: line.taxable,
        }
    }
}

impl From<PayloadLineItem> for LineItem {
    fn from(line: PayloadLineItem) -> Self {
        Self {
            description: line.description,
            quantity: line.quantity,
            unit_price: line.unit_price,
            taxable: line.taxable,
        }
    }
}

/// Jurisdiction split, rate and customer GSTIN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    pub place_of_supply: String,
    /// CGST rate (percent).
    pub cgst: Decimal,
    /// SGST rate (percent).
    pub sgst: Decimal,
    /// IGST rate (percent).
    pub igst: Decimal,
    /// Total GST rate (percent), not an amount.
    pub total_gst: Decimal,
}

/// Body of the create-quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub opportunity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub line_items: Vec<PayloadLineItem>,
    pub gst_details: GstDetails,
    #[serde(default)]
    pub approval_required: bool,
    pub subtotal: Decimal,
    pub total_gst_amount: Decimal,
    pub total_amount: Decimal,
}

impl QuotePayload {
    /// Build the request body, recomputing totals from the quote's inputs.
    pub fn from_quote(quote: &Quote) -> Result<Self, QuoteError> {
        let totals = try_compute_totals(&quote.line_items, &quote.tax_config)
            .map_err(|e| QuoteError::AmountOutOfRange(e.to_string()))?;
        let config = &quote.tax_config;

        Ok(Self {
            opportunity_id: quote.opportunity_id.clone(),
            template_id: quote.template_id.clone(),
            line_items: quote.line_items.iter().map(PayloadLineItem::from).collect(),
            gst_details: GstDetails {
                gst_number: config.gst_number.clone(),
                place_of_supply: config.place_of_supply.clone(),
                cgst: totals.split.cgst,
                sgst: totals.split.sgst,
                igst: totals.split.igst,
                total_gst: config.total_gst_rate,
            },
            approval_required: quote.approval_required,
            subtotal: totals.subtotal,
            total_gst_amount: totals.total_gst_amount,
            total_amount: totals.grand_total,
        })
    }

    pub fn to_json(&self) -> Result<String, QuoteError> {
        serde_json::to_string(self).map_err(|e| QuoteError::Serialization(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, QuoteError> {
        serde_json::to_string_pretty(self).map_err(|e| QuoteError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        serde_json::from_str(json).map_err(|e| QuoteError::Serialization(e.to_string()))
    }

    /// Line items converted back to calculator input.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.line_items.iter().cloned().map(LineItem::from).collect()
    }

    /// Tax configuration implied by this payload. The payload does not carry
    /// the seller's state, so the caller supplies it.
    pub fn tax_configuration(&self, company_state: &str) -> TaxConfiguration {
        TaxConfiguration {
            company_state: company_state.to_string(),
            place_of_supply: self.gst_details.place_of_supply.clone(),
            total_gst_rate: self.gst_details.total_gst,
            gst_number: self.gst_details.gst_number.clone(),
        }
    }

    /// Recompute totals from the payload's own inputs and report every
    /// figure that disagrees.
    ///
    /// Safe on arbitrary decoded input: amounts too large to compute are
    /// reported (`LI-04`, `QT-06`) rather than panicking.
    pub fn verify(&self, company_state: &str) -> Vec<ValidationError> {
        let lines = self.line_items();
        let config = self.tax_configuration(company_state);
        let fresh = match try_compute_totals(&lines, &config) {
            Ok(totals) => totals,
            Err(e) => {
                tracing::warn!(
                    opportunity_id = %self.opportunity_id,
                    error = %e,
                    "quote payload amounts out of range"
                );
                return vec![e];
            }
        };

        let mut claimed = fresh.clone();
        claimed.subtotal = self.subtotal;
        claimed.total_gst_amount = self.total_gst_amount;
        claimed.grand_total = self.total_amount;
        claimed.split.cgst = self.gst_details.cgst;
        claimed.split.sgst = self.gst_details.sgst;
        claimed.split.igst = self.gst_details.igst;

        let errors = validate_arithmetic(&claimed, &lines, &config);
        if !errors.is_empty() {
            tracing::warn!(
                opportunity_id = %self.opportunity_id,
                problems = errors.len(),
                "quote payload totals disagree with line items"
            );
        }
        errors
    }
}
