use bijak::core::*;
use bijak::gstin::*;

fn main() {
    let inputs = [
        "07AABCU9603R1ZP",
        "27aapfu0939f1zv",
        "07AABCU9603R1ZX",
        "07AABCU9603R1Y",
        "99AABCU9603R1ZP",
    ];

    for input in inputs {
        match validate_gstin_format(input) {
            Ok(gstin) => {
                let state = gstin
                    .state()
                    .map(|s| s.name().to_string())
                    .unwrap_or_else(|| format!("code {}", gstin.state_code()));
                println!("  {gstin}: valid (PAN {}, {state})", gstin.pan());
            }
            Err(e) => println!("  {e}"),
        }
    }

    println!("\n=== Place of supply ===");
    let config = TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Karnataka)
        .gst_number("27AAPFU0939F1ZV")
        .build();
    for e in validate_gst_number(&config) {
        println!("  - {e}");
    }
}
