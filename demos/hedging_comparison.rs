//! Hedging comparison demo.
//!
//! Shows how forward hedging changes USD revenue when the CNY
//! depreciates, across a range of hedge ratios.

use treasury_workbench::formulas::fx::simulate_exchange_rate_impact;
use treasury_workbench::formulas::hedging::hedged_revenue;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  treasury-workbench: Hedging Comparison    ║");
    println!("╚════════════════════════════════════════════╝\n");

    let revenue_cny = 10_000_000.0;
    let initial_rate = 7.0; // spot today
    let new_rate = 7.5; // spot at receipt
    let forward_rate = 7.1; // locked today for receipt date

    println!("CNY revenue:      ¥{:.0}", revenue_cny);
    println!("Spot today:       {:.2} CNY/USD", initial_rate);
    println!("Spot at receipt:  {:.2} CNY/USD", new_rate);
    println!("Forward locked:   {:.2} CNY/USD\n", forward_rate);

    // --- Unhedged exposure ---
    println!("━━━ Unhedged exposure ━━━\n");
    let impact = simulate_exchange_rate_impact(revenue_cny, initial_rate, new_rate)
        .expect("rates are nonzero");
    println!("{}\n", impact);

    // --- Hedge ratio sweep ---
    println!("━━━ Revenue by hedge ratio ━━━\n");
    println!("{:>8}  {:>15}  {:>15}  {:>15}", "Hedged", "Hedged USD", "Unhedged USD", "Total USD");
    for pct in [0.0, 0.25, 0.5, 0.75, 1.0] {
        // The unhedged leg converts at the receipt-date spot.
        let result = hedged_revenue(revenue_cny, pct, forward_rate, new_rate)
            .expect("rates are nonzero");
        println!(
            "{:>7.0}%  {:>15.2}  {:>15.2}  {:>15.2}",
            pct * 100.0,
            result.hedged_usd,
            result.unhedged_usd,
            result.total_usd
        );
    }

    println!("\nLocking the forward above the receipt-date spot raises total revenue;");
    println!("a fully hedged book is immune to the depreciation entirely.");
}
