use crate::session::field::FieldKey;
use thiserror::Error;

/// Errors arising from parsing field text.
///
/// This is the only failure mode on the input side: a field whose text
/// cannot be read as the number (or number list) its formula expects.
/// Parsing never mutates the session, so a failed parse leaves the
/// stored text exactly as the user entered it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("field '{field}' is empty")]
    Empty { field: FieldKey },
    #[error("field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: FieldKey, value: String },
    #[error("cash flow {index} in field '{field}' is not a valid number: '{value}'")]
    InvalidCashFlow {
        field: FieldKey,
        index: usize,
        value: String,
    },
}

/// Parse a single numeric field.
///
/// Surrounding whitespace is trimmed (entry widgets do the same), empty
/// text and non-finite values are rejected.
pub fn parse_number(field: FieldKey, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { field });
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Parse a comma-separated cash-flow list.
///
/// Each element is trimmed and parsed like [`parse_number`]; the first
/// bad element fails the whole list, reporting its 0-based position.
pub fn parse_cash_flows(field: FieldKey, text: &str) -> Result<Vec<f64>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty { field });
    }
    text.split(',')
        .enumerate()
        .map(|(index, raw)| {
            let trimmed = raw.trim();
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| InputError::InvalidCashFlow {
                    field,
                    index,
                    value: trimmed.to_string(),
                })
        })
        .collect()
}
