#![cfg(feature = "payload")]

use bijak::core::*;
use bijak::payload::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn apollo_quote(supply: IndianState) -> Quote {
    QuoteBuilder::new("1", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        .template("enterprise")
        .add_line(LineItemBuilder::new("EHR Platform Licence", dec!(1), dec!(1500000)).build())
        .add_line(LineItemBuilder::new("Implementation & Training", dec!(40), dec!(15000)).build())
        .add_line(LineItemBuilder::new("Data Migration", dec!(1), dec!(300000)).build())
        .tax_config(
            TaxConfigurationBuilder::new(IndianState::Delhi, supply)
                .gst_number("07AABCU9603R1ZP")
                .build(),
        )
        .approval_required(true)
        .build()
        .unwrap()
}

#[test]
fn payload_carries_totals_and_split() {
    let payload = QuotePayload::from_quote(&apollo_quote(IndianState::Delhi)).unwrap();

    assert_eq!(payload.opportunity_id, "1");
    assert_eq!(payload.line_items.len(), 3);
    assert_eq!(payload.subtotal, dec!(2400000));
    assert_eq!(payload.total_gst_amount, dec!(432000));
    assert_eq!(payload.total_amount, dec!(2832000));
    assert_eq!(payload.gst_details.cgst, dec!(9));
    assert_eq!(payload.gst_details.sgst, dec!(9));
    assert_eq!(payload.gst_details.igst, dec!(0));
    assert_eq!(payload.gst_details.total_gst, dec!(18));
    assert_eq!(payload.gst_details.gst_number.as_deref(), Some("07AABCU9603R1ZP"));
    assert!(payload.approval_required);
}

#[test]
fn inter_state_payload() {
    let payload = QuotePayload::from_quote(&apollo_quote(IndianState::Maharashtra)).unwrap();
    assert_eq!(payload.gst_details.place_of_supply, "Maharashtra");
    assert_eq!(payload.gst_details.igst, dec!(18));
    assert_eq!(payload.total_amount, dec!(2832000));
}

#[test]
fn json_shape() {
    let json = QuotePayload::from_quote(&apollo_quote(IndianState::Delhi))
        .unwrap()
        .to_json_pretty()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in [
        "opportunityId",
        "templateId",
        "lineItems",
        "gstDetails",
        "approvalRequired",
        "subtotal",
        "totalGstAmount",
        "totalAmount",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert!(value["gstDetails"]["totalGst"].is_string());
    assert_eq!(value["lineItems"][0]["description"], "EHR Platform Licence");
}

#[test]
fn json_round_trip_then_verify() {
    let payload = QuotePayload::from_quote(&apollo_quote(IndianState::Delhi)).unwrap();
    let decoded = QuotePayload::from_json(&payload.to_json().unwrap()).unwrap();
    assert_eq!(decoded, payload);
    assert!(decoded.verify("Delhi").is_empty());
}

#[test]
fn minimal_json_accepted() {
    let json = r#"{
        "opportunityId": "3",
        "lineItems": [
            {"description": "Analytics", "quantity": "1", "unitPrice": "100000", "taxable": true},
            {"description": "Consulting", "quantity": "1", "unitPrice": "50000", "taxable": false}
        ],
        "gstDetails": {"placeOfSupply": "Delhi", "cgst": "9", "sgst": "9", "igst": "0", "totalGst": "18"},
        "subtotal": "150000",
        "totalGstAmount": "18000",
        "totalAmount": "168000"
    }"#;
    let payload = QuotePayload::from_json(json).unwrap();
    assert!(!payload.approval_required);
    assert!(payload.template_id.is_none());
    assert!(payload.verify("Delhi").is_empty());
}

#[test]
fn verify_reports_client_side_drift() {
    let json = r#"{
        "opportunityId": "3",
        "lineItems": [{"description": "Analytics", "quantity": "1", "unitPrice": "100000", "taxable": true}],
        "gstDetails": {"placeOfSupply": "Delhi", "cgst": "9", "sgst": "9", "igst": "0", "totalGst": "18"},
        "subtotal": "100000",
        "totalGstAmount": "18000",
        "totalAmount": "118000.01"
    }"#;
    let errors = QuotePayload::from_json(json).unwrap().verify("Delhi");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "totals.grand_total");
}

fn payload_with_line(quantity: &str, unit_price: &str) -> String {
    format!(
        r#"{{
        "opportunityId": "9",
        "lineItems": [{{"description": "Racks", "quantity": "{quantity}", "unitPrice": "{unit_price}", "taxable": true}}],
        "gstDetails": {{"placeOfSupply": "Delhi", "cgst": "9", "sgst": "9", "igst": "0", "totalGst": "18"}},
        "subtotal": "0",
        "totalGstAmount": "0",
        "totalAmount": "0"
    }}"#
    )
}

#[test]
fn overflowing_line_reported_not_panicking() {
    let json = payload_with_line("100000000000000000", "100000000000000000");
    let errors = QuotePayload::from_json(&json).unwrap().verify("Delhi");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule.as_deref(), Some("LI-04"));
}

#[test]
fn near_max_amounts_reported_not_panicking() {
    let max = Decimal::MAX.to_string();
    let errors = QuotePayload::from_json(&payload_with_line("1", &max))
        .unwrap()
        .verify("Delhi");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule.as_deref(), Some("QT-06"));
    assert_eq!(errors[0].field, "totals.total_gst_amount");

    let errors = QuotePayload::from_json(&payload_with_line(&max, &max))
        .unwrap()
        .verify("Delhi");
    assert_eq!(errors[0].rule.as_deref(), Some("LI-04"));
}

#[test]
fn huge_claimed_totals_reported_not_panicking() {
    let max = Decimal::MAX.to_string();
    let json = format!(
        r#"{{
        "opportunityId": "9",
        "lineItems": [{{"description": "Racks", "quantity": "1", "unitPrice": "1000", "taxable": true}}],
        "gstDetails": {{"placeOfSupply": "Delhi", "cgst": "9", "sgst": "9", "igst": "0", "totalGst": "18"}},
        "subtotal": "{max}",
        "totalGstAmount": "{max}",
        "totalAmount": "{max}"
    }}"#
    );
    let errors = QuotePayload::from_json(&json).unwrap().verify("Delhi");
    assert!(errors.iter().any(|e| e.field == "totals.grand_total"
        && e.rule.as_deref() == Some("QT-06")));
}
