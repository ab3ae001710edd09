use serde::{Deserialize, Serialize};

/// Share of principal paid out on a verified default.
pub const RECOVERY_RATIO: f64 = 0.80;

/// Payout and residual lender loss for one defaulted loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultOutcome {
    pub loan_amount: f64,
    pub payout_amount: f64,
    pub residual_loss: f64,
}

/// Applies the fixed recovery ratio. Eligibility is the caller's concern: only loans whose
/// evaluation was not rejected should reach this function.
pub fn simulate_default(loan_amount: f64) -> DefaultOutcome {
    let payout_amount = loan_amount * RECOVERY_RATIO;

    DefaultOutcome {
        loan_amount,
        payout_amount,
        residual_loss: loan_amount - payout_amount,
    }
}
