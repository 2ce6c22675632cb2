use crate::formulas::FormulaError;

/// Net present value of a cash-flow sequence.
///
/// `npv = Σ cash_flows[t] / (1 + discount_rate)^t`, with `t` starting at
/// 0 for the first flow, so the first flow is never discounted.
///
/// # Examples
///
/// ```
/// use treasury_workbench::formulas::valuation::npv;
///
/// // At a zero rate, NPV is just the sum.
/// assert_eq!(npv(0.0, &[100.0, 200.0, 300.0]).unwrap(), 600.0);
/// ```
pub fn npv(discount_rate: f64, cash_flows: &[f64]) -> Result<f64, FormulaError> {
    let base = 1.0 + discount_rate;
    if base == 0.0 && cash_flows.len() > 1 {
        return Err(FormulaError::DivisionByZero {
            quantity: "1 + discount_rate",
        });
    }

    Ok(cash_flows
        .iter()
        .enumerate()
        .map(|(t, flow)| flow / base.powi(t as i32))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_npv_zero_rate_is_sum() {
        let flows = [100.0, -50.0, 75.0];
        assert_eq!(npv(0.0, &flows).unwrap(), 125.0);
    }

    #[test]
    fn test_npv_known_value() {
        let value = npv(0.1, &[100.0, 100.0, 100.0]).unwrap();
        assert_relative_eq!(
            value,
            100.0 + 100.0 / 1.1 + 100.0 / 1.21,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_npv_first_flow_undiscounted() {
        assert_eq!(npv(0.5, &[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_npv_empty_is_zero() {
        assert_eq!(npv(0.1, &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_npv_negative_rate_grows_tail() {
        // A negative rate inflates later flows instead of discounting them.
        let value = npv(-0.5, &[0.0, 100.0]).unwrap();
        assert_relative_eq!(value, 200.0);
    }

    #[test]
    fn test_npv_rate_of_minus_one_rejected() {
        assert!(npv(-1.0, &[100.0, 100.0]).is_err());
        // ...unless there is nothing to discount.
        assert_eq!(npv(-1.0, &[100.0]).unwrap(), 100.0);
    }
}
