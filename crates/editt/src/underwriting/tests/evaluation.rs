use super::common::*;
use crate::underwriting::evaluation::{
    classify, compute_score, evaluate, Decision, RiskAssessment, RiskBand, ScoreFactor,
};

fn band_rank(band: RiskBand) -> u8 {
    match band {
        RiskBand::NetworkBlacklist | RiskBand::CriticalRisk => 0,
        RiskBand::HighRisk => 1,
        RiskBand::MediumRisk => 2,
        RiskBand::LowRisk => 3,
    }
}

#[test]
fn good_borrower_is_approved_at_low_risk() {
    let score = compute_score(&good_profile());
    assert_eq!(score, 92.5);

    let assessment = classify(score, false);
    assert_eq!(
        assessment,
        RiskAssessment {
            decision: Decision::Approved,
            band: RiskBand::LowRisk,
            premium_percent: 2.5,
        }
    );
}

#[test]
fn neutral_borrower_rounds_half_up_into_medium_risk() {
    let score = compute_score(&neutral_profile());
    assert_eq!(score, 67.3, "67.25 rounds away from zero");

    let assessment = classify(score, false);
    assert_eq!(assessment.decision, Decision::Approved);
    assert_eq!(assessment.band, RiskBand::MediumRisk);
    assert_eq!(assessment.premium_percent, 5.0);
}

#[test]
fn blacklisted_borrower_is_rejected_whatever_the_score() {
    let profile = blacklisted_profile();
    let result = evaluate(&profile);

    assert_eq!(result.score, 22.5);
    assert_eq!(result.decision, Decision::Rejected);
    assert_eq!(result.band, RiskBand::NetworkBlacklist);
    assert_eq!(result.premium_percent, 0.0);

    for score in [-20.0, 0.0, 39.9, 40.0, 59.9, 60.0, 80.0, 100.0, 140.0, f64::NAN] {
        let assessment = classify(score, true);
        assert_eq!(assessment.decision, Decision::Rejected);
        assert_eq!(assessment.band, RiskBand::NetworkBlacklist);
        assert_eq!(assessment.premium_percent, 0.0);
    }
}

#[test]
fn band_floors_are_inclusive_and_continuous() {
    let cases = [
        (100.0, RiskBand::LowRisk),
        (80.0, RiskBand::LowRisk),
        (79.9, RiskBand::MediumRisk),
        (79.5, RiskBand::MediumRisk),
        (60.0, RiskBand::MediumRisk),
        (59.9, RiskBand::HighRisk),
        (40.0, RiskBand::HighRisk),
        (39.9, RiskBand::CriticalRisk),
        (0.0, RiskBand::CriticalRisk),
        (-12.5, RiskBand::CriticalRisk),
    ];

    for (score, band) in cases {
        assert_eq!(classify(score, false).band, band, "score {score}");
    }
}

#[test]
fn restricted_band_carries_the_highest_premium() {
    let assessment = classify(59.9, false);
    assert_eq!(assessment.decision, Decision::Restricted);
    assert_eq!(assessment.band, RiskBand::HighRisk);
    assert_eq!(assessment.premium_percent, 12.0);

    let critical = classify(39.9, false);
    assert_eq!(critical.decision, Decision::Rejected);
    assert_eq!(critical.band, RiskBand::CriticalRisk);
    assert_eq!(critical.premium_percent, 0.0);
}

#[test]
fn out_of_range_and_nan_scores_do_not_panic() {
    assert_eq!(classify(f64::NAN, false).band, RiskBand::CriticalRisk);
    assert_eq!(classify(f64::NEG_INFINITY, false).band, RiskBand::CriticalRisk);
    assert_eq!(classify(100.5, false).band, RiskBand::LowRisk);
}

#[test]
fn classification_is_monotonic_in_score() {
    let mut previous = band_rank(classify(-10.0, false).band);
    for tenths in -100..=1100 {
        let score = f64::from(tenths) / 10.0;
        let rank = band_rank(classify(score, false).band);
        assert!(rank >= previous, "band worsened at score {score}");
        previous = rank;
    }
}

#[test]
fn bounded_sub_scores_yield_bounded_scores() {
    let steps = [0.0, 12.5, 33.0, 50.0, 67.0, 99.9, 100.0];
    for repayment in steps {
        for severity in steps {
            for rest in steps {
                let sub_scores = [repayment, severity, rest, 100.0 - rest, rest];
                let score = compute_score(&profile(sub_scores, false));
                assert!((0.0..=100.0).contains(&score), "score {score} out of range");
            }
        }
    }
    assert_eq!(compute_score(&profile([100.0; 5], false)), 100.0);
    assert_eq!(compute_score(&profile([0.0; 5], false)), 0.0);
}

#[test]
fn out_of_range_sub_scores_are_not_clamped() {
    assert_eq!(compute_score(&profile([200.0; 5], false)), 200.0);
    assert_eq!(compute_score(&profile([-10.0; 5], false)), -10.0);
}

#[test]
fn components_expose_weights_and_contributions() {
    let result = evaluate(&good_profile());

    assert_eq!(result.components.len(), ScoreFactor::ALL.len());
    let weights: u32 = ScoreFactor::ALL
        .iter()
        .map(|factor| u32::from(factor.weight_hundredths()))
        .sum();
    assert_eq!(weights, 100);

    let repayment = result
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::Repayment)
        .expect("repayment component present");
    assert_eq!(repayment.sub_score, 95.0);
    assert_eq!(repayment.weight, 0.35);
    assert_eq!(repayment.contribution, 33.25);

    let total: f64 = result
        .components
        .iter()
        .map(|component| component.contribution)
        .sum();
    assert!((total - result.score).abs() < 0.05);
}

#[test]
fn premium_amount_scales_with_principal() {
    let result = evaluate(&neutral_profile());
    assert_eq!(result.premium_amount(50_000.0), 2_500.0);
    assert_eq!(evaluate(&blacklisted_profile()).premium_amount(50_000.0), 0.0);
}

#[test]
fn headline_matches_decision() {
    assert_eq!(
        Decision::Restricted.headline(RiskBand::HighRisk),
        "PARTIAL COVERAGE: High Risk"
    );
    assert_eq!(
        Decision::Rejected.headline(RiskBand::NetworkBlacklist),
        "LOAN REJECTED: Network Blacklist"
    );
}
