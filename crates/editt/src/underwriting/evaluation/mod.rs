mod policy;
mod scoring;

pub use policy::{
    classify, Decision, RiskAssessment, RiskBand, HIGH_RISK_FLOOR, LOW_RISK_FLOOR,
    MEDIUM_RISK_FLOOR,
};
pub use scoring::{compute_score, ScoreComponent, ScoreFactor};

use super::domain::BorrowerProfile;
use serde::{Deserialize, Serialize};

/// Scores a profile and classifies the result in one pass.
pub fn evaluate(profile: &BorrowerProfile) -> EvaluationResult {
    let score = compute_score(profile);
    let RiskAssessment {
        decision,
        band,
        premium_percent,
    } = classify(score, profile.network_flag);

    EvaluationResult {
        score,
        decision,
        band,
        premium_percent,
        components: scoring::score_components(profile),
    }
}

/// Evaluation output with the composite score and its component trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub decision: Decision,
    pub band: RiskBand,
    pub premium_percent: f64,
    pub components: Vec<ScoreComponent>,
}

impl EvaluationResult {
    pub fn assessment(&self) -> RiskAssessment {
        RiskAssessment {
            decision: self.decision,
            band: self.band,
            premium_percent: self.premium_percent,
        }
    }

    pub fn premium_amount(&self, loan_amount: f64) -> f64 {
        self.assessment().premium_amount(loan_amount)
    }
}
