use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::calculation::try_compute_totals;
use super::error::{QuoteError, join_errors};
use super::states::IndianState;
use super::types::*;
use super::validation;

/// Days a quote stays valid unless set explicitly.
pub const DEFAULT_VALIDITY_DAYS: u64 = 30;

/// Maximum number of line items accepted on one quote.
pub const MAX_LINE_ITEMS: usize = 10_000;

/// Builder for constructing validated quotes.
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let quote = QuoteBuilder::new("OPP-1", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .template("enterprise")
///     .tax_config(TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Delhi).build())
///     .add_line(LineItemBuilder::new("EHR Platform Licence", dec!(1), dec!(1500000)).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(quote.totals.grand_total, dec!(1770000));
/// assert_eq!(quote.valid_until, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
/// ```
pub struct QuoteBuilder {
    number: String,
    opportunity_id: String,
    template_id: Option<String>,
    issue_date: NaiveDate,
    valid_until: Option<NaiveDate>,
    line_items: Vec<LineItem>,
    tax_config: TaxConfiguration,
    approval_required: bool,
}

impl QuoteBuilder {
    pub fn new(opportunity_id: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: String::new(),
            opportunity_id: opportunity_id.into(),
            template_id: None,
            issue_date,
            valid_until: None,
            line_items: Vec::new(),
            tax_config: TaxConfiguration::default(),
            approval_required: false,
        }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn valid_until(mut self, date: NaiveDate) -> Self {
        self.valid_until = Some(date);
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.line_items.push(line);
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = LineItem>) -> Self {
        self.line_items.extend(lines);
        self
    }

    pub fn tax_config(mut self, config: TaxConfiguration) -> Self {
        self.tax_config = config;
        self
    }

    pub fn approval_required(mut self, required: bool) -> Self {
        self.approval_required = required;
        self
    }

    /// Build the quote, running validation and computing totals.
    /// Line item problems are reported before tax configuration problems.
    pub fn build(self) -> Result<Quote, QuoteError> {
        self.check_structure()?;

        let line_errors = validation::validate_line_items(&self.line_items);
        if !line_errors.is_empty() {
            return Err(QuoteError::InvalidLineItem(join_errors(&line_errors)));
        }

        let config_errors = validation::validate_tax_configuration(&self.tax_config);
        if !config_errors.is_empty() {
            return Err(QuoteError::InvalidTaxConfiguration(join_errors(
                &config_errors,
            )));
        }

        self.assemble()
    }

    /// Build without line item or state validation, for drafts or
    /// importing external data. Structural requirements still apply.
    pub fn build_unchecked(self) -> Result<Quote, QuoteError> {
        self.check_structure()?;
        self.assemble()
    }

    fn check_structure(&self) -> Result<(), QuoteError> {
        if self.opportunity_id.trim().is_empty() {
            return Err(QuoteError::Builder("opportunity is required".into()));
        }
        if self.line_items.is_empty() {
            return Err(QuoteError::Builder(
                "at least one line item is required".into(),
            ));
        }
        if self.line_items.len() > MAX_LINE_ITEMS {
            return Err(QuoteError::Builder(format!(
                "quote cannot have more than {MAX_LINE_ITEMS} line items"
            )));
        }
        if self.tax_config.place_of_supply.trim().is_empty() {
            return Err(QuoteError::Builder("place of supply is required".into()));
        }
        Ok(())
    }

    fn assemble(self) -> Result<Quote, QuoteError> {
        let valid_until = match self.valid_until {
            Some(date) => date,
            None => self
                .issue_date
                .checked_add_days(Days::new(DEFAULT_VALIDITY_DAYS))
                .ok_or_else(|| QuoteError::Builder("issue date out of range".into()))?,
        };
        if valid_until < self.issue_date {
            return Err(QuoteError::Builder(format!(
                "valid-until date {valid_until} is before issue date {}",
                self.issue_date
            )));
        }

        let totals = try_compute_totals(&self.line_items, &self.tax_config)
            .map_err(|e| QuoteError::AmountOutOfRange(e.to_string()))?;

        Ok(Quote {
            number: self.number,
            opportunity_id: self.opportunity_id,
            template_id: self.template_id,
            issue_date: self.issue_date,
            valid_until,
            line_items: self.line_items,
            tax_config: self.tax_config,
            approval_required: self.approval_required,
            totals,
        })
    }
}

/// Builder for LineItem. Lines are taxable unless set otherwise.
pub struct LineItemBuilder {
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    taxable: bool,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            taxable: true,
        }
    }

    pub fn taxable(mut self, taxable: bool) -> Self {
        self.taxable = taxable;
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            description: self.description,
            quantity: self.quantity,
            unit_price: self.unit_price,
            taxable: self.taxable,
        }
    }
}

/// Builder for TaxConfiguration from known states. Rate defaults to 18%.
pub struct TaxConfigurationBuilder {
    company_state: String,
    place_of_supply: String,
    total_gst_rate: Decimal,
    gst_number: Option<String>,
}

impl TaxConfigurationBuilder {
    pub fn new(company_state: IndianState, place_of_supply: IndianState) -> Self {
        Self {
            company_state: company_state.name().to_string(),
            place_of_supply: place_of_supply.name().to_string(),
            total_gst_rate: Decimal::from(18),
            gst_number: None,
        }
    }

    /// Start from free-text jurisdiction names.
    pub fn from_names(
        company_state: impl Into<String>,
        place_of_supply: impl Into<String>,
    ) -> Self {
        Self {
            company_state: company_state.into(),
            place_of_supply: place_of_supply.into(),
            total_gst_rate: Decimal::from(18),
            gst_number: None,
        }
    }

    pub fn rate(mut self, percent: Decimal) -> Self {
        self.total_gst_rate = percent;
        self
    }

    pub fn gst_number(mut self, gstin: impl Into<String>) -> Self {
        self.gst_number = Some(gstin.into());
        self
    }

    pub fn build(self) -> TaxConfiguration {
        TaxConfiguration {
            company_state: self.company_state,
            place_of_supply: self.place_of_supply,
            total_gst_rate: self.total_gst_rate,
            gst_number: self.gst_number,
        }
    }
}
