//! Tip and per-person arithmetic.
//!
//! Pure functions, no I/O. The lenient pair is what the session uses: it
//! never errors and lets non-finite values through. The `checked_*` pair
//! validates its inputs first and otherwise returns the same numbers.

/// Bills at or below this amount earn no tip.
pub const TIP_THRESHOLD: f64 = 1.0;

// ============================================================================
// LENIENT
// ============================================================================

/// Tip owed on the whole bill.
///
/// Returns `bill_amount * tip_percentage / 100` when the bill is strictly
/// above [`TIP_THRESHOLD`], otherwise 0.0. The percentage is not range
/// checked. A NaN bill fails the threshold and yields 0.0.
pub fn compute_tip(bill_amount: f64, tip_percentage: i32) -> f64 {
    if bill_amount > TIP_THRESHOLD {
        (bill_amount * f64::from(tip_percentage)) / 100.0
    } else {
        0.0
    }
}

/// Share of bill plus tip for each of `split_by` people.
///
/// `split_by` is not checked. Zero gives the IEEE result of dividing by
/// zero (infinite, or NaN for a zero numerator).
pub fn compute_total_per_person(bill_amount: f64, split_by: i32, tip_percentage: i32) -> f64 {
    let total = compute_tip(bill_amount, tip_percentage) + bill_amount;
    total / f64::from(split_by)
}

// ============================================================================
// CHECKED
// ============================================================================

/// Rejected calculator input.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Bill is NaN or infinite.
    NonFiniteBill,
    /// Bill is below zero.
    NegativeBill,
    /// Percentage outside 0..=100.
    TipOutOfRange(i32),
    /// Split count of zero or less.
    InvalidSplit(i32),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::NonFiniteBill => write!(f, "Bill amount is not a finite number"),
            CalcError::NegativeBill => write!(f, "Bill amount is negative"),
            CalcError::TipOutOfRange(p) => {
                write!(f, "Tip percentage {} is outside 0..=100", p)
            }
            CalcError::InvalidSplit(n) => {
                write!(f, "Cannot split a bill between {} people", n)
            }
        }
    }
}

impl std::error::Error for CalcError {}

/// [`compute_tip`] with its inputs validated.
pub fn checked_tip(bill_amount: f64, tip_percentage: i32) -> Result<f64, CalcError> {
    check_bill(bill_amount)?;
    check_tip(tip_percentage)?;
    Ok(compute_tip(bill_amount, tip_percentage))
}

/// [`compute_total_per_person`] with its inputs validated.
pub fn checked_total_per_person(
    bill_amount: f64,
    split_by: i32,
    tip_percentage: i32,
) -> Result<f64, CalcError> {
    check_bill(bill_amount)?;
    check_tip(tip_percentage)?;
    if split_by <= 0 {
        return Err(CalcError::InvalidSplit(split_by));
    }
    Ok(compute_total_per_person(bill_amount, split_by, tip_percentage))
}

fn check_bill(bill_amount: f64) -> Result<(), CalcError> {
    if !bill_amount.is_finite() {
        return Err(CalcError::NonFiniteBill);
    }
    if bill_amount < 0.0 {
        return Err(CalcError::NegativeBill);
    }
    Ok(())
}

fn check_tip(tip_percentage: i32) -> Result<(), CalcError> {
    if (0..=100).contains(&tip_percentage) {
        Ok(())
    } else {
        Err(CalcError::TipOutOfRange(tip_percentage))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- compute_tip ---

    #[test]
    fn tip_on_zero_bill_is_zero() {
        assert_eq!(compute_tip(0.0, 20), 0.0);
    }

    #[test]
    fn tip_on_bill_of_exactly_one_is_zero() {
        assert_eq!(compute_tip(1.0, 20), 0.0);
        assert_eq!(compute_tip(0.5, 20), 0.0);
    }

    #[test]
    fn tip_just_above_threshold_is_charged() {
        assert!(compute_tip(1.01, 100) > 0.0);
    }

    #[test]
    fn tip_twenty_percent_of_hundred() {
        assert_eq!(compute_tip(100.0, 20), 20.0);
    }

    #[test]
    fn zero_percent_tip_is_zero() {
        assert_eq!(compute_tip(50.0, 0), 0.0);
    }

    #[test]
    fn tip_percentage_is_not_range_checked() {
        assert_eq!(compute_tip(100.0, 150), 150.0);
        assert_eq!(compute_tip(100.0, -10), -10.0);
    }

    #[test]
    fn tip_on_nan_bill_is_zero() {
        assert_eq!(compute_tip(f64::NAN, 20), 0.0);
    }

    #[test]
    fn tip_on_infinite_bill_is_infinite() {
        assert!(compute_tip(f64::INFINITY, 20).is_infinite());
    }

    // --- compute_total_per_person ---

    #[test]
    fn total_for_one_person() {
        assert_eq!(compute_total_per_person(100.0, 1, 20), 120.0);
    }

    #[test]
    fn total_split_four_ways() {
        assert_eq!(compute_total_per_person(100.0, 4, 20), 30.0);
    }

    #[test]
    fn total_without_tip_split_two_ways() {
        assert_eq!(compute_total_per_person(100.0, 2, 0), 50.0);
    }

    #[test]
    fn total_below_threshold_carries_no_tip() {
        assert_eq!(compute_total_per_person(1.0, 1, 50), 1.0);
    }

    #[test]
    fn split_by_zero_is_not_finite() {
        let result = compute_total_per_person(100.0, 0, 20);
        assert!(result.is_infinite());
        assert!(result.is_sign_positive());
    }

    #[test]
    fn zero_bill_split_by_zero_is_nan() {
        assert!(compute_total_per_person(0.0, 0, 20).is_nan());
    }

    #[test]
    fn nan_bill_propagates() {
        assert!(compute_total_per_person(f64::NAN, 2, 20).is_nan());
    }

    // --- checked variants ---

    #[test]
    fn checked_matches_lenient_on_valid_input() {
        assert_eq!(checked_tip(100.0, 20), Ok(20.0));
        assert_eq!(checked_total_per_person(100.0, 4, 20), Ok(30.0));
        assert_eq!(checked_tip(1.0, 20), Ok(0.0));
    }

    #[test]
    fn checked_rejects_zero_and_negative_split() {
        assert_eq!(
            checked_total_per_person(100.0, 0, 20),
            Err(CalcError::InvalidSplit(0))
        );
        assert_eq!(
            checked_total_per_person(100.0, -3, 20),
            Err(CalcError::InvalidSplit(-3))
        );
    }

    #[test]
    fn checked_rejects_non_finite_and_negative_bill() {
        assert_eq!(checked_tip(f64::NAN, 20), Err(CalcError::NonFiniteBill));
        assert_eq!(checked_tip(f64::INFINITY, 20), Err(CalcError::NonFiniteBill));
        assert_eq!(checked_tip(-1.0, 20), Err(CalcError::NegativeBill));
    }

    #[test]
    fn checked_rejects_tip_out_of_range() {
        assert_eq!(checked_tip(100.0, 101), Err(CalcError::TipOutOfRange(101)));
        assert_eq!(
            checked_total_per_person(100.0, 2, -1),
            Err(CalcError::TipOutOfRange(-1))
        );
    }

    #[test]
    fn calc_error_messages_name_the_problem() {
        assert!(CalcError::InvalidSplit(0).to_string().contains("0 people"));
        assert!(CalcError::TipOutOfRange(120).to_string().contains("120"));
    }
}
