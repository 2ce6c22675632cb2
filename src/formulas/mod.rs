//! Pure financial formulas.
//!
//! Every function here is a closed-form expression over already-parsed
//! `f64` inputs. Nothing in this module reads the session or performs
//! I/O; the only failure mode is a divisor that would make the result
//! undefined.

pub mod financing;
pub mod fx;
pub mod hedging;
pub mod valuation;

use thiserror::Error;

/// Errors arising from formula evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("division by zero: {quantity} must be nonzero")]
    DivisionByZero { quantity: &'static str },
}
