use serde::Serialize;
use std::fmt;

/// Fraction of the investment covered by a political-risk policy.
///
/// Policy constant, not user-configurable.
pub const COVERAGE_RATIO: f64 = 0.9;

/// Result of a political-risk insurance quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoliticalRiskInsurance {
    /// Insured amount: `investment * COVERAGE_RATIO`.
    pub coverage: f64,
    /// Yearly premium: `investment * premium_rate`.
    pub annual_premium: f64,
}

/// Quote political-risk insurance for an investment.
///
/// # Examples
///
/// ```
/// use treasury_workbench::formulas::financing::political_risk_insurance;
///
/// let quote = political_risk_insurance(1000.0, 0.05);
/// assert_eq!(quote.coverage, 900.0);
/// assert_eq!(quote.annual_premium, 50.0);
/// ```
pub fn political_risk_insurance(investment: f64, premium_rate: f64) -> PoliticalRiskInsurance {
    PoliticalRiskInsurance {
        coverage: investment * COVERAGE_RATIO,
        annual_premium: investment * premium_rate,
    }
}

impl fmt::Display for PoliticalRiskInsurance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Insurance Coverage: ${:.2}", self.coverage)?;
        write!(f, "Annual Premium Cost: ${:.2}", self.annual_premium)
    }
}

/// Result of comparing domestic borrowing against eurobond issuance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestSavings {
    /// Annual interest at the domestic rate.
    pub domestic_cost: f64,
    /// Annual interest at the eurobond rate.
    pub eurobond_cost: f64,
    /// `domestic_cost - eurobond_cost`. Negative when eurobonds cost more.
    pub savings: f64,
}

/// Annual interest saved by funding via eurobonds instead of domestically.
pub fn interest_savings(capital: f64, domestic_rate: f64, eurobond_rate: f64) -> InterestSavings {
    let domestic_cost = capital * domestic_rate;
    let eurobond_cost = capital * eurobond_rate;
    InterestSavings {
        domestic_cost,
        eurobond_cost,
        savings: domestic_cost - eurobond_cost,
    }
}

impl fmt::Display for InterestSavings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Interest Savings from Eurobonds: ${:.2} annually",
            self.savings
        )
    }
}
