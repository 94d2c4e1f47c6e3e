use bijak::core::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bijak=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let lines = vec![
        LineItemBuilder::new("Analytics Module", dec!(1), dec!(800000))
            .build(),
        LineItemBuilder::new("On-site Consulting", dec!(10), dec!(20000))
            .taxable(false)
            .build(),
    ];

    // Same lines, same rate, different place of supply
    for supply in [
        IndianState::Delhi,
        IndianState::Maharashtra,
        IndianState::Karnataka,
    ] {
        let config = TaxConfigurationBuilder::new(IndianState::Delhi, supply).build();
        let totals = compute_totals(&lines, &config);

        println!("=== Delhi -> {supply} ===");
        println!("{}", totals.supply_type.description());
        println!("{}", render_summary(&totals));
        println!();
    }

    // Changing only the rate re-splits the tax
    println!("=== Rate slabs ===");
    for rate in GstRate::ALL {
        let split = compute_jurisdiction_split("Delhi", "Delhi", rate.percent());
        println!(
            "  {:<12} CGST {}%  SGST {}%  IGST {}%",
            rate.label(),
            format_rate(split.cgst),
            format_rate(split.sgst),
            format_rate(split.igst)
        );
    }
}
