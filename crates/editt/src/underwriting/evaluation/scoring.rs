use serde::{Deserialize, Serialize};

use super::super::domain::BorrowerProfile;

/// Sub-score feeding the composite insurability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Repayment,
    Severity,
    Discipline,
    Identity,
    Context,
}

impl ScoreFactor {
    pub const ALL: [ScoreFactor; 5] = [
        ScoreFactor::Repayment,
        ScoreFactor::Severity,
        ScoreFactor::Discipline,
        ScoreFactor::Identity,
        ScoreFactor::Context,
    ];

    /// Weight in hundredths. The five weights sum to 100.
    pub fn weight_hundredths(self) -> u8 {
        match self {
            ScoreFactor::Repayment => 35,
            ScoreFactor::Severity => 20,
            ScoreFactor::Discipline | ScoreFactor::Identity | ScoreFactor::Context => 15,
        }
    }

    pub fn weight(self) -> f64 {
        f64::from(self.weight_hundredths()) / 100.0
    }

    pub fn sub_score(self, profile: &BorrowerProfile) -> f64 {
        match self {
            ScoreFactor::Repayment => profile.repayment,
            ScoreFactor::Severity => profile.severity,
            ScoreFactor::Discipline => profile.discipline,
            ScoreFactor::Identity => profile.identity,
            ScoreFactor::Context => profile.context,
        }
    }
}

/// Weighted contribution of one sub-score, kept for audit output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub sub_score: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Composite insurability score rounded to one decimal place, half away from zero.
///
/// The weighted sum is accumulated on a hundredths scale so integral sub-scores produce exact
/// halves (6725 hundredths rounds to 67.3). Out-of-range sub-scores are not clamped.
pub fn compute_score(profile: &BorrowerProfile) -> f64 {
    let hundredths: f64 = ScoreFactor::ALL
        .iter()
        .map(|factor| f64::from(factor.weight_hundredths()) * factor.sub_score(profile))
        .sum();

    (hundredths / 10.0).round() / 10.0
}

pub(crate) fn score_components(profile: &BorrowerProfile) -> Vec<ScoreComponent> {
    ScoreFactor::ALL
        .iter()
        .map(|factor| {
            let sub_score = factor.sub_score(profile);
            ScoreComponent {
                factor: *factor,
                sub_score,
                weight: factor.weight(),
                contribution: f64::from(factor.weight_hundredths()) * sub_score / 100.0,
            }
        })
        .collect()
}
