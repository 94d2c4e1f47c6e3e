//! Canonical GST rate slabs.
//!
//! The quote form offers these as one-click choices. Calculation accepts
//! any rate; this list only names the standard ones.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard GST rate slabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstRate {
    /// 0% (exempt goods and services).
    Exempt,
    /// 5%.
    Five,
    /// 12%.
    Twelve,
    /// 18%, the default for services.
    Eighteen,
    /// 28%.
    TwentyEight,
}

impl GstRate {
    /// All slabs in ascending order.
    pub const ALL: [GstRate; 5] = [
        Self::Exempt,
        Self::Five,
        Self::Twelve,
        Self::Eighteen,
        Self::TwentyEight,
    ];

    pub fn percent(&self) -> Decimal {
        match self {
            Self::Exempt => Decimal::ZERO,
            Self::Five => Decimal::from(5),
            Self::Twelve => Decimal::from(12),
            Self::Eighteen => Decimal::from(18),
            Self::TwentyEight => Decimal::from(28),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exempt => "0% (Exempt)",
            Self::Five => "5%",
            Self::Twelve => "12%",
            Self::Eighteen => "18%",
            Self::TwentyEight => "28%",
        }
    }

    /// Match a percentage against the standard slabs. `18.00` matches `Eighteen`.
    pub fn from_percent(percent: Decimal) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.percent() == percent)
    }
}

/// Check whether `percent` is one of the standard GST slabs.
pub fn is_canonical_rate(percent: Decimal) -> bool {
    GstRate::from_percent(percent).is_some()
}
