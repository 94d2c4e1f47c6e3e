//! GSTIN (GST identification number) checks.
//!
//! The calculator treats the customer GSTIN as opaque text. This module
//! adds optional structure/checksum validation and a consistency check
//! against the place of supply.
//!
//! # Example
//!
//! ```
//! use bijak::gstin::*;
//!
//! let gstin = validate_gstin_format("27AAPFU0939F1ZV").unwrap();
//! assert!(matches_place_of_supply(&gstin, "Maharashtra"));
//! assert!(!matches_place_of_supply(&gstin, "Delhi"));
//! ```

mod format;

pub use format::{Gstin, GstinError, gstin_checksum, validate_gstin_format};

use crate::core::{TaxConfiguration, ValidationError};

/// Whether the GSTIN is registered in `place_of_supply`.
///
/// Logs a warning on mismatch: GST is normally charged by the buyer's
/// registered state.
pub fn matches_place_of_supply(gstin: &Gstin, place_of_supply: &str) -> bool {
    let registered = gstin.state();
    let matches = registered.is_some_and(|s| s.name() == place_of_supply);
    if !matches {
        tracing::warn!(
            gstin = %gstin,
            state_code = gstin.state_code(),
            place_of_supply,
            "GSTIN state does not match place of supply"
        );
    }
    matches
}

/// Validate the optional GSTIN carried by a tax configuration.
///
/// Empty or absent numbers pass. Rules: `GN-01` format/checksum,
/// `GN-02` registered state differs from the place of supply.
pub fn validate_gst_number(config: &TaxConfiguration) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(number) = config.gst_number.as_deref() else {
        return errors;
    };
    if number.trim().is_empty() {
        return errors;
    }

    match validate_gstin_format(number) {
        Ok(gstin) => {
            if !matches_place_of_supply(&gstin, &config.place_of_supply) {
                errors.push(ValidationError::with_rule(
                    "gst_number",
                    format!(
                        "GSTIN state code {} does not match place of supply '{}'",
                        gstin.state_code(),
                        config.place_of_supply
                    ),
                    "GN-02",
                ));
            }
        }
        Err(e) => errors.push(ValidationError::with_rule(
            "gst_number",
            e.reason,
            "GN-01",
        )),
    }

    errors
}
