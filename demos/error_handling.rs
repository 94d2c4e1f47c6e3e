use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    // ── 1. Builder error: no lines ────────────────────────────────────
    println!("=== Builder Error ===");
    match QuoteBuilder::new("1", date).build() {
        Ok(_) => println!("  Built (unexpected)"),
        Err(e) => println!("  Build failed: {e}"),
    }

    // ── 2. Line validation: every problem reported ────────────────────
    println!("\n=== Line Errors ===");
    let lines = vec![
        LineItemBuilder::new("", dec!(1), dec!(1000)).build(),
        LineItemBuilder::new("Licence", dec!(0), dec!(-5)).build(),
    ];
    let errors = validate_line_items(&lines);
    println!("  Found {} validation errors:", errors.len());
    for e in &errors {
        println!("  - {e}");
    }

    // ── 3. Unknown place of supply ────────────────────────────────────
    println!("\n=== Tax Configuration ===");
    let config = TaxConfigurationBuilder::from_names("Delhi", "Atlantis").build();
    let licence = vec![LineItemBuilder::new("Licence", dec!(1), dec!(1000)).build()];
    match compute_totals_checked(&licence, &config) {
        Ok(totals) => println!("  Grand total {}", format_inr(totals.grand_total, 2)),
        Err(e) => println!("  Rejected: {e}"),
    }

    // build_unchecked skips state and value checks
    let quote = QuoteBuilder::new("1", date)
        .lines(licence)
        .tax_config(config)
        .build_unchecked();
    if let Ok(q) = quote {
        println!(
            "  Unchecked: {} ({})",
            format_inr(q.totals.grand_total, 2),
            q.totals.supply_type.label()
        );
    }

    // ── 4. Amounts too large to compute ───────────────────────────────
    println!("\n=== Out of Range ===");
    let oversized = vec![
        LineItemBuilder::new("Platform", dec!(1), Decimal::MAX)
            .build(),
    ];
    match compute_totals_checked(&oversized, &TaxConfiguration::default()) {
        Ok(_) => println!("  Computed (unexpected)"),
        Err(e) => println!("  Rejected: {e}"),
    }

    // ── 5. Stale totals after editing ─────────────────────────────────
    println!("\n=== Stale Totals ===");
    let mut quote = QuoteBuilder::new("1", date)
        .add_line(
            LineItemBuilder::new("Licence", dec!(1), dec!(100000))
                .build(),
        )
        .build()
        .unwrap();
    quote.tax_config.place_of_supply = "Maharashtra".into();
    for e in validate_arithmetic(&quote.totals, &quote.line_items, &quote.tax_config) {
        println!("  - {e}");
    }
    match quote.recalculate() {
        Ok(()) => println!("  After recalculate: {}", quote.totals.supply_type.label()),
        Err(e) => println!("  Recalculate failed: {e}"),
    }

    // ── 6. Misconfigured approval policy ──────────────────────────────
    println!("\n=== Approval Policy ===");
    let policy = ApprovalPolicy {
        sales_manager_limit: dec!(3000000),
        pricing_director_limit: dec!(1000000),
    };
    if let Err(e) = policy.validate() {
        println!("  {e}");
    }
}
