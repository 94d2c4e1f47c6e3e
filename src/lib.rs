//! # bijak
//!
//! GST quote engine for Indian B2B sales: line items in, subtotal,
//! CGST/SGST/IGST split, GST amounts, grand total and approval tier out.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Calculation keeps full precision; rounding happens only when formatting.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use rust_decimal_macros::dec;
//!
//! let lines = vec![
//!     LineItemBuilder::new("EHR Platform Licence", dec!(1), dec!(1500000)).build(),
//!     LineItemBuilder::new("Training Sessions", dec!(40), dec!(15000)).build(),
//!     LineItemBuilder::new("Data Migration", dec!(1), dec!(300000)).build(),
//! ];
//! let config = TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Delhi)
//!     .rate(dec!(18))
//!     .build();
//!
//! let totals = compute_totals(&lines, &config);
//! assert_eq!(totals.subtotal, dec!(2400000));
//! assert_eq!(totals.split.cgst, dec!(9));
//! assert_eq!(totals.grand_total, dec!(2832000));
//! assert_eq!(resolve_approval_requirement(totals.grand_total), ApprovalTier::VpSales);
//! assert_eq!(format_inr(totals.grand_total, 2), "₹28,32,000.00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Line items, GST split, totals, approval tiers, INR formatting, numbering |
//! | `gstin` | GSTIN structure and checksum validation |
//! | `payload` | JSON create-quote request body |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "gstin")]
pub mod gstin;

#[cfg(feature = "payload")]
pub mod payload;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
