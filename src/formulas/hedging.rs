use crate::formulas::FormulaError;
use serde::Serialize;
use std::fmt;

/// Result of a forward-hedging revenue calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HedgedRevenue {
    /// USD revenue from the portion locked at the forward rate.
    pub hedged_usd: f64,
    /// USD revenue from the remainder converted at the spot rate.
    pub unhedged_usd: f64,
    /// `hedged_usd + unhedged_usd`.
    pub total_usd: f64,
}

/// Total USD revenue when `hedged_pct` of CNY revenue is locked at a
/// forward rate and the remainder converts at the initial spot rate.
///
/// `hedged_pct` is expected in `[0, 1]` but is deliberately not
/// range-checked; out-of-range values model over- or short-hedging.
pub fn hedged_revenue(
    revenue_cny: f64,
    hedged_pct: f64,
    forward_rate: f64,
    initial_rate: f64,
) -> Result<HedgedRevenue, FormulaError> {
    if forward_rate == 0.0 {
        return Err(FormulaError::DivisionByZero {
            quantity: "forward_rate",
        });
    }
    if initial_rate == 0.0 {
        return Err(FormulaError::DivisionByZero {
            quantity: "initial_rate",
        });
    }

    let hedged_usd = revenue_cny * hedged_pct / forward_rate;
    let unhedged_usd = revenue_cny * (1.0 - hedged_pct) / initial_rate;
    Ok(HedgedRevenue {
        hedged_usd,
        unhedged_usd,
        total_usd: hedged_usd + unhedged_usd,
    })
}

impl fmt::Display for HedgedRevenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Revenue with Hedging: ${:.2}", self.total_usd)
    }
}
