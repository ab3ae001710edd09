use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::claims::{simulate_default, DefaultOutcome};
use super::directory::{
    AlertError, BorrowerAction, BorrowerDirectory, DirectoryError, NetworkAlert,
    NetworkAlertPublisher,
};
use super::domain::{validate_loan_amount, BorrowerId, BorrowerRecord, LoanTenure, ValidationError};
use super::evaluation::{evaluate, Decision, EvaluationResult, RiskBand};

/// Inbound evaluation request, as posted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub borrower_id: BorrowerId,
    pub loan_amount: f64,
    #[serde(default)]
    pub tenure: LoanTenure,
}

/// Inbound default simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultClaimRequest {
    pub borrower_id: BorrowerId,
    pub loan_amount: f64,
}

/// A resolved borrower evaluated against one loan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanEvaluation {
    pub borrower: BorrowerRecord,
    pub loan_amount: f64,
    pub tenure: LoanTenure,
    pub result: EvaluationResult,
    pub premium_amount: f64,
}

impl LoanEvaluation {
    pub fn payload(&self) -> EvaluationPayload {
        EvaluationPayload {
            status: "success",
            borrower_id: self.borrower.borrower_id.clone(),
            score: self.result.score,
            risk_band: self.result.band.label(),
            approved: self.result.decision == Decision::Approved,
            decision: self.result.decision.label(),
            premium_percent: self.result.premium_percent,
            premium_ngn: self.premium_amount,
            loan_amount: self.loan_amount,
            tenure: self.tenure,
            network_flag: self.borrower.profile.network_flag,
        }
    }
}

/// Evaluation body returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationPayload {
    pub status: &'static str,
    pub borrower_id: BorrowerId,
    pub score: f64,
    pub risk_band: &'static str,
    pub approved: bool,
    pub decision: &'static str,
    pub premium_percent: f64,
    pub premium_ngn: f64,
    pub loan_amount: f64,
    pub tenure: LoanTenure,
    pub network_flag: bool,
}

/// A simulated default on a covered loan, with the alert it raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultClaim {
    pub borrower_id: BorrowerId,
    pub band: RiskBand,
    pub outcome: DefaultOutcome,
    pub alert: NetworkAlert,
}

impl DefaultClaim {
    pub fn payload(&self) -> DefaultEventPayload {
        DefaultEventPayload {
            event: "loan_default",
            claim_status: "approved",
            borrower_id: self.borrower_id.clone(),
            payout_amount: self.outcome.payout_amount,
            residual_loss: self.outcome.residual_loss,
            borrower_action: self.alert.action,
            network_update: true,
        }
    }
}

/// Default event body returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultEventPayload {
    pub event: &'static str,
    pub claim_status: &'static str,
    pub borrower_id: BorrowerId,
    pub payout_amount: f64,
    pub residual_loss: f64,
    pub borrower_action: BorrowerAction,
    pub network_update: bool,
}

/// Service composing the borrower directory, the pure evaluation functions, and the network
/// alert hook.
pub struct UnderwritingService<D, N> {
    directory: Arc<D>,
    alerts: Arc<N>,
}

impl<D, N> UnderwritingService<D, N>
where
    D: BorrowerDirectory + 'static,
    N: NetworkAlertPublisher + 'static,
{
    pub fn new(directory: Arc<D>, alerts: Arc<N>) -> Self {
        Self { directory, alerts }
    }

    pub fn borrower(&self, id: &BorrowerId) -> Result<BorrowerRecord, UnderwritingError> {
        match self.directory.fetch(id)? {
            Some(record) => Ok(record),
            None => {
                warn!(borrower_id = %id, "borrower lookup missed");
                Err(UnderwritingError::BorrowerNotFound(id.clone()))
            }
        }
    }

    pub fn roster(&self) -> Result<Vec<BorrowerRecord>, UnderwritingError> {
        Ok(self.directory.list()?)
    }

    /// Resolve, validate, score, and classify a borrower for one loan.
    pub fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<LoanEvaluation, UnderwritingError> {
        validate_loan_amount(request.loan_amount)?;
        let borrower = self.borrower(&request.borrower_id)?;
        borrower.profile.validate()?;

        let result = evaluate(&borrower.profile);
        let premium_amount = result.premium_amount(request.loan_amount);

        info!(
            borrower_id = %borrower.borrower_id,
            score = result.score,
            band = result.band.label(),
            decision = result.decision.label(),
            premium_amount,
            "loan evaluated"
        );

        Ok(LoanEvaluation {
            borrower,
            loan_amount: request.loan_amount,
            tenure: request.tenure,
            result,
            premium_amount,
        })
    }

    /// Re-evaluate the borrower, refuse rejected loans, then pay out and flag the borrower
    /// across the network.
    pub fn simulate_default(
        &self,
        request: &DefaultClaimRequest,
    ) -> Result<DefaultClaim, UnderwritingError> {
        let evaluation = self.evaluate(&EvaluationRequest {
            borrower_id: request.borrower_id.clone(),
            loan_amount: request.loan_amount,
            tenure: LoanTenure::default(),
        })?;

        if evaluation.result.decision.is_rejected() {
            warn!(
                borrower_id = %request.borrower_id,
                band = evaluation.result.band.label(),
                "default claim refused for rejected loan"
            );
            return Err(UnderwritingError::DefaultNotCovered {
                borrower_id: request.borrower_id.clone(),
                band: evaluation.result.band,
            });
        }

        let outcome = simulate_default(request.loan_amount);

        let mut details = BTreeMap::new();
        details.insert("event".to_string(), "loan_default".to_string());
        details.insert(
            "payout_amount".to_string(),
            format!("{:.2}", outcome.payout_amount),
        );
        details.insert("band".to_string(), evaluation.result.band.label().to_string());
        let alert = NetworkAlert {
            borrower_id: request.borrower_id.clone(),
            action: BorrowerAction::FlaggedGlobal,
            raised_at: Utc::now(),
            details,
        };
        self.alerts.publish(alert.clone())?;

        info!(
            borrower_id = %request.borrower_id,
            payout_amount = outcome.payout_amount,
            residual_loss = outcome.residual_loss,
            "default claim approved"
        );

        Ok(DefaultClaim {
            borrower_id: request.borrower_id.clone(),
            band: evaluation.result.band,
            outcome,
            alert,
        })
    }
}

/// Error raised by the underwriting service.
#[derive(Debug, thiserror::Error)]
pub enum UnderwritingError {
    #[error("borrower {0} not found in database")]
    BorrowerNotFound(BorrowerId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("default on borrower {borrower_id} is not covered ({})", band.label())]
    DefaultNotCovered {
        borrower_id: BorrowerId,
        band: RiskBand,
    },
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
