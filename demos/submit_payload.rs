use bijak::core::*;
use bijak::payload::QuotePayload;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let quote = QuoteBuilder::new("2", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .template("standard")
        .add_line(
            LineItemBuilder::new("POS Terminal", dec!(25), dec!(42000))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Annual Support", dec!(1), dec!(150000))
                .build(),
        )
        .tax_config(
            TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Maharashtra)
                .gst_number("27AAPFU0939F1ZV")
                .build(),
        )
        .approval_required(true)
        .build()
        .expect("quote should be valid");

    let payload = QuotePayload::from_quote(&quote).expect("amounts should be in range");
    match payload.to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Serialization failed: {e}"),
    }

    // The backend re-checks what the client sent
    let errors = payload.verify("Delhi");
    println!("\nServer-side check: {} problem(s)", errors.len());

    let mut tampered = payload.clone();
    tampered.total_amount -= dec!(1000);
    for e in tampered.verify("Delhi") {
        println!("  - {e}");
    }
}
