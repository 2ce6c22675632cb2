//! NPV profile demo.
//!
//! Values a small investment project at a range of discount rates and
//! shows the session save/load round trip feeding the calculation.

use treasury_workbench::formulas::valuation::npv;
use treasury_workbench::session::field::FieldKey;
use treasury_workbench::session::store::Session;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  treasury-workbench: NPV Profile           ║");
    println!("╚════════════════════════════════════════════╝\n");

    // Enter the project the way the form would: as raw text.
    let mut session = Session::new();
    session.set(FieldKey::CashFlows, "-500000, 150000, 180000, 210000, 240000");
    session.set(FieldKey::DiscountRate, "0.10");

    // Round-trip through the persisted document before computing.
    let json = session
        .snapshot()
        .to_json_string()
        .expect("snapshot always encodes");
    println!("Persisted session document:\n{}\n", json);

    let flows = session
        .cash_flows(FieldKey::CashFlows)
        .expect("demo cash flows are numeric");

    println!("━━━ NPV by discount rate ━━━\n");
    println!("{:>8}  {:>15}", "Rate", "NPV");
    for rate in [0.0, 0.05, 0.10, 0.15, 0.20, 0.25] {
        let value = npv(rate, &flows).expect("rate is above -100%");
        let marker = if value >= 0.0 { "" } else { "  (negative)" };
        println!("{:>7.0}%  {:>15.2}{}", rate * 100.0, value, marker);
    }

    let entered = session
        .number(FieldKey::DiscountRate)
        .expect("demo rate is numeric");
    let value = npv(entered, &flows).expect("rate is above -100%");
    println!("\nAt the entered rate of {:.0}%: NPV of Project: ${:.2}", entered * 100.0, value);
}
