use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for borrowers known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BorrowerId(pub String);

impl BorrowerId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BorrowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Five sub-scores on a 0-100 scale plus the shared blacklist marker.
///
/// The bound is a precondition: scoring never clamps, and only [`BorrowerProfile::validate`]
/// enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub repayment: f64,
    pub severity: f64,
    pub discipline: f64,
    pub identity: f64,
    pub context: f64,
    /// Set when the borrower sits on the shared ecosystem blacklist.
    #[serde(default)]
    pub network_flag: bool,
}

impl BorrowerProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("repayment", self.repayment),
            ("severity", self.severity),
            ("discipline", self.discipline),
            ("identity", self.identity),
            ("context", self.context),
        ];

        match fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || !(0.0..=100.0).contains(value))
        {
            Some((field, value)) => Err(ValidationError::SubScoreOutOfRange { field, value }),
            None => Ok(()),
        }
    }
}

/// Directory entry pairing a profile with its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerRecord {
    pub borrower_id: BorrowerId,
    pub name: String,
    pub profile: BorrowerProfile,
}

/// Loan tenure offered at evaluation time. Echoed back; scoring ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanTenure {
    #[serde(rename = "15_days")]
    FifteenDays,
    #[default]
    #[serde(rename = "30_days")]
    ThirtyDays,
    #[serde(rename = "60_days")]
    SixtyDays,
}

impl LoanTenure {
    pub fn days(self) -> u16 {
        match self {
            LoanTenure::FifteenDays => 15,
            LoanTenure::ThirtyDays => 30,
            LoanTenure::SixtyDays => 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoanTenure::FifteenDays => "15 Days",
            LoanTenure::ThirtyDays => "30 Days",
            LoanTenure::SixtyDays => "60 Days",
        }
    }

    pub fn from_days(days: u16) -> Option<Self> {
        match days {
            15 => Some(LoanTenure::FifteenDays),
            30 => Some(LoanTenure::ThirtyDays),
            60 => Some(LoanTenure::SixtyDays),
            _ => None,
        }
    }
}

impl FromStr for LoanTenure {
    type Err = String;

    /// Accepts `30`, `30d`, `30_days`, or `30 days`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        let digits = normalized
            .trim_end_matches("days")
            .trim_end_matches('d')
            .trim_end_matches(['_', ' ']);

        digits
            .parse::<u16>()
            .ok()
            .and_then(LoanTenure::from_days)
            .ok_or_else(|| format!("unsupported tenure '{raw}' (expected 15, 30, or 60 days)"))
    }
}

/// Rejected inputs detected before the pure functions run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} sub-score {value} must lie within 0-100")]
    SubScoreOutOfRange { field: &'static str, value: f64 },
    #[error("loan amount {0} must be a positive, finite value")]
    InvalidLoanAmount(f64),
}

pub fn validate_loan_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidLoanAmount(amount))
    }
}
