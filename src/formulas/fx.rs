use crate::formulas::FormulaError;
use serde::Serialize;
use std::fmt;

/// Result of an exchange-rate impact simulation.
///
/// Rates are quoted CNY per USD, so USD revenue is CNY revenue divided
/// by the rate. A rate increase (CNY depreciation) lowers USD revenue
/// and the impact comes out negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExchangeRateImpact {
    /// CNY revenue converted at the initial rate.
    pub initial_usd: f64,
    /// CNY revenue converted at the new rate.
    pub new_usd: f64,
    /// `new_usd - initial_usd`.
    pub impact: f64,
}

/// Simulate the USD impact of a CNY/USD rate move on CNY revenue.
///
/// # Examples
///
/// ```
/// use treasury_workbench::formulas::fx::simulate_exchange_rate_impact;
///
/// let result = simulate_exchange_rate_impact(7_000_000.0, 7.0, 7.5).unwrap();
/// assert_eq!(result.initial_usd, 1_000_000.0);
/// assert!(result.impact < 0.0);
/// ```
pub fn simulate_exchange_rate_impact(
    revenue_cny: f64,
    initial_rate: f64,
    new_rate: f64,
) -> Result<ExchangeRateImpact, FormulaError> {
    if initial_rate == 0.0 {
        return Err(FormulaError::DivisionByZero {
            quantity: "initial_rate",
        });
    }
    if new_rate == 0.0 {
        return Err(FormulaError::DivisionByZero {
            quantity: "new_rate",
        });
    }

    let initial_usd = revenue_cny / initial_rate;
    let new_usd = revenue_cny / new_rate;
    Ok(ExchangeRateImpact {
        initial_usd,
        new_usd,
        impact: new_usd - initial_usd,
    })
}

/// Convert an amount into USD at the given CNY/USD rate.
pub fn convert_currency(amount: f64, rate: f64) -> Result<f64, FormulaError> {
    if rate == 0.0 {
        return Err(FormulaError::DivisionByZero { quantity: "rate" });
    }
    Ok(amount / rate)
}

impl fmt::Display for ExchangeRateImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial Revenue in USD: ${:.2}", self.initial_usd)?;
        writeln!(f, "New Revenue in USD: ${:.2}", self.new_usd)?;
        write!(f, "Impact of Exchange Rate Change: ${:.2}", self.impact)
    }
}
