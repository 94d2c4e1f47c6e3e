//! Quote numbers of the form `QT-2024-001`.
//!
//! The counter restarts at 1 each calendar year. A sequence can pick up
//! where the CRM left off from the last number it issued.

use chrono::{Datelike, NaiveDate};

use super::error::QuoteError;

/// Prefix used on quote numbers unless configured otherwise.
pub const DEFAULT_PREFIX: &str = "QT-";

/// Counters are zero-padded to at least this many digits.
const COUNTER_WIDTH: usize = 3;

/// Gapless quote number sequence.
#[derive(Debug, Clone)]
pub struct QuoteNumberSequence {
    prefix: String,
    year: i32,
    next_number: u64,
}

impl QuoteNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self::starting_at(prefix, year, 1)
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, year: i32, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next_number,
        }
    }

    /// Continue after `last_issued`, e.g. the newest quote number already
    /// stored for this prefix.
    ///
    /// ```
    /// use bijak::core::QuoteNumberSequence;
    ///
    /// let mut seq = QuoteNumberSequence::resume_after("QT-", "QT-2024-017").unwrap();
    /// assert_eq!(seq.next_number(), "QT-2024-018");
    /// ```
    pub fn resume_after(prefix: impl Into<String>, last_issued: &str) -> Result<Self, QuoteError> {
        let prefix = prefix.into();
        let (year, last) = parse_quote_number(&prefix, last_issued).ok_or_else(|| {
            QuoteError::Numbering(format!(
                "'{last_issued}' is not a quote number of the form {prefix}YYYY-NNN"
            ))
        })?;
        let next = last.checked_add(1).ok_or_else(|| {
            QuoteError::Numbering(format!("counter of '{last_issued}' cannot be advanced"))
        })?;
        Ok(Self::starting_at(prefix, year, next))
    }

    /// Issue the next quote number.
    pub fn next_number(&mut self) -> String {
        let number = self.peek();
        self.next_number += 1;
        number
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            self.next_number,
            width = COUNTER_WIDTH
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Number a quote issued on `issue_date`, rolling over to its year first
    /// if that is later than the current one.
    pub fn issue_for(&mut self, issue_date: NaiveDate) -> String {
        self.auto_advance(issue_date);
        self.next_number()
    }

    /// Switch to the year of `date` if it is later. Returns true if the year changed.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let date_year = date.year();
        if date_year > self.year {
            tracing::debug!(from = self.year, to = date_year, "quote numbering rolled over");
            self.year = date_year;
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}

/// Split a quote number into its year and counter.
///
/// `parse_quote_number("QT-", "QT-2024-007")` is `Some((2024, 7))`.
pub fn parse_quote_number(prefix: &str, number: &str) -> Option<(i32, u64)> {
    let (year, counter) = number.strip_prefix(prefix)?.split_once('-')?;
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || !digits(year) || !digits(counter) {
        return None;
    }
    Some((year.parse().ok()?, counter.parse().ok()?))
}
