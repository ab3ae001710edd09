use crate::infra::{format_money, load_directory, InMemoryNetworkAlerts};
use clap::Args;
use editt::config::AppConfig;
use editt::error::AppError;
use editt::underwriting::{
    evaluate, BorrowerId, DefaultClaim, DefaultClaimRequest, EvaluationRequest, LoanEvaluation,
    LoanTenure, RiskBand, StaticBorrowerDirectory, UnderwritingError, UnderwritingService,
    RECOVERY_RATIO,
};
use serde::Serialize;
use std::sync::Arc;

type DemoService = UnderwritingService<StaticBorrowerDirectory, InMemoryNetworkAlerts>;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Borrower identifier from the roster (1001, 1002, or 1003 in the built-in roster)
    #[arg(long)]
    pub(crate) borrower_id: String,
    /// Loan principal in whole currency units
    #[arg(long, default_value_t = 50_000.0)]
    pub(crate) loan_amount: f64,
    /// Loan tenure: 15, 30, or 60 days
    #[arg(long, default_value = "30")]
    pub(crate) tenure: LoanTenure,
    /// Simulate a default event when the loan is insurable
    #[arg(long)]
    pub(crate) simulate_default: bool,
    /// Print the API payloads as JSON instead of the formatted summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Loan principal used for every presenter borrower
    #[arg(long, default_value_t = 50_000.0)]
    pub(crate) loan_amount: f64,
    /// Skip the ecosystem impact summary at the end of the walkthrough
    #[arg(long)]
    pub(crate) skip_impact: bool,
}

fn build_service(config: &AppConfig) -> Result<(DemoService, InMemoryNetworkAlerts), AppError> {
    let directory = load_directory(&config.underwriting)?;
    let alerts = InMemoryNetworkAlerts::default();
    let service = UnderwritingService::new(Arc::new(directory), Arc::new(alerts.clone()));
    Ok((service, alerts))
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        borrower_id,
        loan_amount,
        tenure,
        simulate_default,
        json,
    } = args;

    let config = AppConfig::load()?;
    let currency = config.underwriting.currency.clone();
    let (service, _) = build_service(&config)?;

    let evaluation = service.evaluate(&EvaluationRequest {
        borrower_id: BorrowerId(borrower_id),
        loan_amount,
        tenure,
    })?;

    if json {
        print_json(&evaluation.payload());
    } else {
        render_evaluation(&evaluation, &currency);
    }

    if !simulate_default {
        return Ok(());
    }

    match simulate_claim(&service, &evaluation) {
        Ok(claim) if json => print_json(&claim.payload()),
        Ok(claim) => render_claim(&claim, &currency),
        Err(UnderwritingError::DefaultNotCovered { band, .. }) => {
            println!("\nDefault protection unavailable: loan rejected ({})", band.label());
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

pub(crate) fn run_roster() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (service, _) = build_service(&config)?;

    println!("Borrower roster");
    for record in service.roster()? {
        let result = evaluate(&record.profile);
        println!(
            "- {}: {} -> {} (score {:.1})",
            record.borrower_id,
            record.name,
            presenter_hint(result.band),
            result.score
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        loan_amount,
        skip_impact,
    } = args;

    let config = AppConfig::load()?;
    let currency = config.underwriting.currency.clone();
    let (service, alerts) = build_service(&config)?;

    println!("EDITT Insurance demo");
    println!("Insuring good loans so lenders can lend with confidence.");

    for record in service.roster()? {
        println!("\n== Borrower {} ({})", record.borrower_id, record.name);
        let evaluation = service.evaluate(&EvaluationRequest {
            borrower_id: record.borrower_id.clone(),
            loan_amount,
            tenure: LoanTenure::default(),
        })?;
        render_evaluation(&evaluation, &currency);

        match simulate_claim(&service, &evaluation) {
            Ok(claim) => render_claim(&claim, &currency),
            Err(UnderwritingError::DefaultNotCovered { .. }) => {
                println!("  Default protection skipped: rejected loans are not covered.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!(
        "\nNetwork ledger: {} borrower(s) flagged during this demo",
        alerts.events().len()
    );

    if !skip_impact {
        render_ecosystem_impact();
    }

    Ok(())
}

fn simulate_claim(
    service: &DemoService,
    evaluation: &LoanEvaluation,
) -> Result<DefaultClaim, UnderwritingError> {
    service.simulate_default(&DefaultClaimRequest {
        borrower_id: evaluation.borrower.borrower_id.clone(),
        loan_amount: evaluation.loan_amount,
    })
}

fn render_evaluation(evaluation: &LoanEvaluation, currency: &str) {
    let result = &evaluation.result;
    println!("  {}", result.decision.headline(result.band));
    println!(
        "  Loan: {} over {}",
        format_money(currency, evaluation.loan_amount),
        evaluation.tenure.label()
    );
    println!("  Insurability score: {:.1}/100", result.score);
    println!("  Risk band: {}", result.band.label());
    println!("  Premium rate: {}%", result.premium_percent);
    println!(
        "  Premium cost: {}",
        format_money(currency, evaluation.premium_amount)
    );
    println!("  Score components:");
    for component in &result.components {
        println!(
            "    - {:?}: {} x {:.2} = {:.2}",
            component.factor, component.sub_score, component.weight, component.contribution
        );
    }
    if evaluation.borrower.profile.network_flag {
        println!("  NETWORK ALERT: this identity is flagged for previous strategic default.");
    }
}

fn render_claim(claim: &DefaultClaim, currency: &str) {
    println!("  Default verified. Claim approved.");
    println!(
        "  Insurance payout ({:.0}%): {}",
        RECOVERY_RATIO * 100.0,
        format_money(currency, claim.outcome.payout_amount)
    );
    println!(
        "  Lender net loss: {}",
        format_money(currency, claim.outcome.residual_loss)
    );
    println!(
        "  Network action: borrower {} has been flagged across the EDITT ecosystem to prevent revolving debt.",
        claim.borrower_id
    );
}

fn render_ecosystem_impact() {
    let rows = [
        ("Lender Default Loss", "100% of Principal", "20% of Principal"),
        ("Recovery Time", "90+ Days", "48 Hours"),
        ("Fraud Detection", "Siloed Data", "Shared Network Intelligence"),
    ];

    println!("\nEcosystem impact");
    println!("{:<22} {:<20} {}", "Metric", "Without EDITT", "With EDITT");
    for (metric, without, with) in rows {
        println!("{metric:<22} {without:<20} {with}");
    }
}

fn presenter_hint(band: RiskBand) -> &'static str {
    match band {
        RiskBand::LowRisk => "good borrower (low premium)",
        RiskBand::MediumRisk => "neutral borrower (higher premium)",
        RiskBand::HighRisk => "restricted borrower (partial coverage)",
        RiskBand::CriticalRisk => "critical risk (rejected)",
        RiskBand::NetworkBlacklist => "strategic defaulter (blacklisted)",
    }
}

fn print_json(payload: &impl Serialize) {
    match serde_json::to_string_pretty(payload) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => eprintln!("unable to render payload: {err}"),
    }
}
