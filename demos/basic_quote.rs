use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bijak=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let issue_date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mut numbers = QuoteNumberSequence::resume_after(DEFAULT_PREFIX, "QT-2023-041")
        .expect("last issued number should parse");

    // Delhi seller quoting a Delhi hospital group: CGST + SGST
    let quote = QuoteBuilder::new("1", issue_date)
        .number(numbers.issue_for(issue_date))
        .template("enterprise")
        .add_line(
            LineItemBuilder::new("EHR Platform Licence", dec!(1), dec!(1500000))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Implementation & Training", dec!(40), dec!(15000))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Data Migration", dec!(1), dec!(300000))
                .build(),
        )
        .tax_config(
            TaxConfigurationBuilder::new(IndianState::Delhi, IndianState::Delhi)
                .rate(GstRate::Eighteen.percent())
                .build(),
        )
        .build()
        .expect("quote should be valid");

    println!("Quote:       {}", quote.number);
    println!("Opportunity: {}", quote.opportunity_id);
    println!("Valid until: {}", quote.valid_until);
    println!("---");
    for (line, total) in quote.line_items.iter().zip(&quote.totals.line_totals) {
        println!(
            "  {} x {} @ {} = {}",
            line.quantity,
            line.description,
            format_inr(line.unit_price, 0),
            format_inr(*total, 0)
        );
    }
    println!("---");
    println!("{}", render_summary(&quote.totals));

    let tier = resolve_approval_requirement(quote.totals.grand_total);
    println!("---");
    println!("Approval:    {tier}");
}
