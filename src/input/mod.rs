//! Marshaling of raw field text into numeric formula inputs.

pub mod parse;
