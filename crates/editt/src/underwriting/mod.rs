//! Borrower scoring, risk banding, and default claim simulation.
//!
//! The pure functions ([`compute_score`], [`classify`], [`simulate_default`]) carry the whole
//! business rule set and hold no state. [`UnderwritingService`] wires them to an injected
//! [`BorrowerDirectory`] and [`NetworkAlertPublisher`] for the HTTP router and CLI.

pub mod claims;
pub mod directory;
pub mod domain;
pub mod evaluation;
pub mod roster;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use claims::{simulate_default, DefaultOutcome, RECOVERY_RATIO};
pub use directory::{
    AlertError, BorrowerAction, BorrowerDirectory, DirectoryError, NetworkAlert,
    NetworkAlertPublisher, StaticBorrowerDirectory,
};
pub use domain::{
    validate_loan_amount, BorrowerId, BorrowerProfile, BorrowerRecord, LoanTenure,
    ValidationError,
};
pub use evaluation::{
    classify, compute_score, evaluate, Decision, EvaluationResult, RiskAssessment, RiskBand,
    ScoreComponent, ScoreFactor,
};
pub use roster::{load_roster, load_roster_path, RosterError};
pub use router::underwriting_router;
pub use service::{
    DefaultClaim, DefaultClaimRequest, DefaultEventPayload, EvaluationPayload,
    EvaluationRequest, LoanEvaluation, UnderwritingError, UnderwritingService,
};
