//! Quote approval tiers.
//!
//! Every quote value maps to the lowest role allowed to approve it:
//! - up to ₹5,00,000: Sales Manager
//! - up to ₹25,00,000: Pricing Director
//! - above ₹25,00,000: VP Sales

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::QuoteError;

/// Upper bound (inclusive) of the Sales Manager tier, in INR.
pub const SALES_MANAGER_LIMIT: Decimal = dec!(500_000);

/// Upper bound (inclusive) of the Pricing Director tier, in INR.
pub const PRICING_DIRECTOR_LIMIT: Decimal = dec!(2_500_000);

/// Role whose sign-off a quote needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApprovalTier {
    SalesManager,
    PricingDirector,
    VpSales,
}

impl ApprovalTier {
    /// Role title as shown in the approver list.
    pub fn role(&self) -> &'static str {
        match self {
            Self::SalesManager => "Sales Manager",
            Self::PricingDirector => "Pricing Director",
            Self::VpSales => "VP Sales",
        }
    }
}

impl std::fmt::Display for ApprovalTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.role())
    }
}

/// Threshold table mapping a grand total to an [`ApprovalTier`].
///
/// Deserializable so deployments can load their own limits:
///
/// ```
/// use bijak::core::ApprovalPolicy;
///
/// let policy: ApprovalPolicy = serde_json::from_str(
///     r#"{"sales_manager_limit":"100000","pricing_director_limit":"1000000"}"#,
/// ).unwrap();
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalPolicy {
    /// Totals up to and including this go to a Sales Manager.
    pub sales_manager_limit: Decimal,
    /// Totals up to and including this go to a Pricing Director.
    pub pricing_director_limit: Decimal,
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self {
            sales_manager_limit: SALES_MANAGER_LIMIT,
            pricing_director_limit: PRICING_DIRECTOR_LIMIT,
        }
    }
}

impl ApprovalPolicy {
    /// Limits must be non-negative and ascending.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.sales_manager_limit.is_sign_negative() {
            return Err(QuoteError::InvalidApprovalPolicy(format!(
                "sales manager limit {} must not be negative",
                self.sales_manager_limit
            )));
        }
        if self.pricing_director_limit < self.sales_manager_limit {
            return Err(QuoteError::InvalidApprovalPolicy(format!(
                "pricing director limit {} is below sales manager limit {}",
                self.pricing_director_limit, self.sales_manager_limit
            )));
        }
        Ok(())
    }

    /// Lowest tier allowed to approve `grand_total`. Boundaries belong to the lower tier.
    pub fn resolve(&self, grand_total: Decimal) -> ApprovalTier {
        let tier = if grand_total <= self.sales_manager_limit {
            ApprovalTier::SalesManager
        } else if grand_total <= self.pricing_director_limit {
            ApprovalTier::PricingDirector
        } else {
            ApprovalTier::VpSales
        };
        tracing::debug!(%grand_total, tier = tier.role(), "resolved approval tier");
        tier
    }

    /// Every tier from Sales Manager up to the one `grand_total` resolves to.
    pub fn approval_chain(&self, grand_total: Decimal) -> Vec<ApprovalTier> {
        let top = self.resolve(grand_total);
        [
            ApprovalTier::SalesManager,
            ApprovalTier::PricingDirector,
            ApprovalTier::VpSales,
        ]
        .into_iter()
        .filter(|t| *t <= top)
        .collect()
    }
}

/// Resolve the approval tier for `grand_total` using the standard INR table.
pub fn resolve_approval_requirement(grand_total: Decimal) -> ApprovalTier {
    ApprovalPolicy::default().resolve(grand_total)
}
