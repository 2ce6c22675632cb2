//! # treasury-workbench
//!
//! International treasury analytics for a CNY-revenue business.
//!
//! Given user-entered financial parameters as raw text, this crate
//! computes exchange-rate impact, hedged revenue, net present value,
//! political-risk insurance cost and eurobond interest savings, and
//! persists the full set of entered fields as a grouped JSON document.
//!
//! ## Architecture
//!
//! - **session** — Named text fields with snapshot/restore persistence
//! - **input** — Parsing of field text into numeric formula inputs
//! - **formulas** — Pure closed-form financial calculations
//! - **simulation** — Rate-shock sweeps over the exchange-rate formulas

pub mod formulas;
pub mod input;
pub mod session;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::formulas::financing::{interest_savings, political_risk_insurance};
    pub use crate::formulas::fx::{convert_currency, simulate_exchange_rate_impact};
    pub use crate::formulas::hedging::hedged_revenue;
    pub use crate::formulas::valuation::npv;
    pub use crate::formulas::FormulaError;
    pub use crate::input::parse::InputError;
    pub use crate::session::document::{DocumentError, SessionDocument};
    pub use crate::session::field::{FieldKey, ScenarioGroup};
    pub use crate::session::store::Session;
}
