//! Scenario sweeps over the exchange-rate formulas.

pub mod shock;
