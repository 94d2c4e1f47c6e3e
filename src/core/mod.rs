//! Quote line items, GST split and totals, approval tiers, numbering.
//!
//! Everything here is pure computation over owned data: no I/O, no shared
//! state, safe to call from any thread on every edit.

mod approval;
mod builder;
mod calculation;
mod error;
mod format;
mod numbering;
pub mod rates;
pub mod states;
mod types;
mod validation;

pub use approval::*;
pub use builder::*;
pub use calculation::*;
pub use error::*;
pub use format::*;
pub use numbering::*;
pub use rates::{GstRate, is_canonical_rate};
pub use states::{IndianState, is_known_state};
pub use types::*;
pub use validation::*;
