#![cfg(feature = "gstin")]

use bijak::core::*;
use bijak::gstin::*;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Format and checksum
// ---------------------------------------------------------------------------

#[test]
fn valid_gstins() {
    for g in ["07AABCU9603R1ZP", "27AAPFU0939F1ZV", "29AAGCB7383J1Z4"] {
        assert!(validate_gstin_format(g).is_ok(), "{g} should be valid");
    }
}

#[test]
fn every_state_code_accepted_with_correct_checksum() {
    for state in IndianState::ALL {
        let body = format!("{}AABCU9603R1Z", state.code());
        let check = gstin_checksum(&body).unwrap();
        let gstin = validate_gstin_format(&format!("{body}{check}")).unwrap();
        assert_eq!(gstin.state(), Some(state));
    }
}

#[test]
fn single_character_changes_break_checksum() {
    let valid = "27AAPFU0939F1ZV";
    for pos in [2usize, 5, 11] {
        let mut bytes = valid.as_bytes().to_vec();
        bytes[pos] = if bytes[pos] == b'A' { b'B' } else { b'A' };
        let mutated = String::from_utf8(bytes).unwrap();
        let err = validate_gstin_format(&mutated).unwrap_err();
        assert!(err.reason.contains("check character"), "{mutated}: {err}");
    }
}

#[test]
fn error_message_names_value() {
    let err = validate_gstin_format("XYZ").unwrap_err();
    assert_eq!(err.value, "XYZ");
    assert!(err.to_string().starts_with("invalid GSTIN 'XYZ'"));
}

#[test]
fn non_ascii_rejected() {
    assert!(validate_gstin_format("07AABCU9603R1Z₹").is_err());
}

#[test]
fn deserialize_validates() {
    assert!(serde_json::from_str::<Gstin>(r#""x""#).is_err());
    assert!(serde_json::from_str::<Gstin>(r#""07AABCU9603R1ZX""#).is_err());

    let gstin: Gstin = serde_json::from_str(r#"" 27aapfu0939f1zv""#).unwrap();
    assert_eq!(gstin.state_code(), "27");
    assert_eq!(serde_json::to_string(&gstin).unwrap(), r#""27AAPFU0939F1ZV""#);
}

// ---------------------------------------------------------------------------
// Place of supply
// ---------------------------------------------------------------------------

#[test]
fn gstin_state_drives_place_of_supply_check() {
    let gstin = validate_gstin_format("07AABCU9603R1ZP").unwrap();
    assert!(matches_place_of_supply(&gstin, "Delhi"));
    assert!(!matches_place_of_supply(&gstin, "Maharashtra"));
}

#[test]
fn tax_configuration_gst_number() {
    let ok = TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Maharashtra)
        .gst_number("27AAPFU0939F1ZV")
        .build();
    assert!(validate_gst_number(&ok).is_empty());

    let bad = TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Maharashtra)
        .gst_number("27AAPFU0939F1ZW")
        .build();
    let errors = validate_gst_number(&bad);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "gst_number");
}

#[test]
fn gst_number_does_not_affect_totals() {
    let lines = vec![LineItemBuilder::new("Item", dec!(1), dec!(1000)).build()];
    let with = TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Delhi)
        .gst_number("not a gstin")
        .build();
    let without = TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Delhi).build();
    assert_eq!(
        compute_totals(&lines, &with).grand_total,
        compute_totals(&lines, &without).grand_total
    );
}
