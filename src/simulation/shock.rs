//! Rate-shock sweeps for exchange-rate exposure analysis.
//!
//! Evaluates the impact formula across a grid of shocked rates around
//! the entered new rate, producing a scenario table instead of a single
//! point estimate.

use crate::formulas::fx::{simulate_exchange_rate_impact, ExchangeRateImpact};
use crate::formulas::FormulaError;
use serde::Serialize;

/// Grid of symmetric percentage shocks applied to the new rate.
#[derive(Debug, Clone, Copy)]
pub struct ShockGrid {
    /// Largest shock in either direction, as a fraction (0.10 = ±10%).
    pub max_shock: f64,
    /// Number of steps on each side of zero.
    pub steps: usize,
}

impl Default for ShockGrid {
    fn default() -> Self {
        Self {
            max_shock: 0.10,
            steps: 10,
        }
    }
}

/// One row of a rate-shock sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateShockImpact {
    /// Applied shock as a fraction of the new rate (negative = appreciation).
    pub shock: f64,
    /// The shocked CNY/USD rate.
    pub shocked_rate: f64,
    /// Impact at the shocked rate.
    pub impact: ExchangeRateImpact,
}

/// Evaluate the exchange-rate impact at every shock in the grid.
///
/// The grid spans `-max_shock ..= +max_shock` in `2 * steps + 1` rows;
/// the middle row carries a shock of exactly zero and reproduces the
/// unshocked impact.
pub fn rate_shock_sweep(
    revenue_cny: f64,
    initial_rate: f64,
    new_rate: f64,
    grid: &ShockGrid,
) -> Result<Vec<RateShockImpact>, FormulaError> {
    let steps = grid.steps as f64;
    let mut rows = Vec::with_capacity(2 * grid.steps + 1);

    for i in 0..=(2 * grid.steps) {
        // Exactly zero at the middle row.
        let shock = grid.max_shock * (i as f64 - steps) / steps;
        let shocked_rate = new_rate * (1.0 + shock);
        let impact = simulate_exchange_rate_impact(revenue_cny, initial_rate, shocked_rate)?;
        rows.push(RateShockImpact {
            shock,
            shocked_rate,
            impact,
        });
    }

    Ok(rows)
}
