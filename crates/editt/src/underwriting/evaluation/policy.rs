use serde::{Deserialize, Serialize};

/// Underwriting decision category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    Restricted,
    Rejected,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Approved => "APPROVED",
            Decision::Restricted => "RESTRICTED",
            Decision::Rejected => "REJECTED",
        }
    }

    pub fn is_rejected(self) -> bool {
        matches!(self, Decision::Rejected)
    }

    /// Headline shown alongside the band, e.g. "LOAN INSURABLE: Low Risk".
    pub fn headline(self, band: RiskBand) -> String {
        match self {
            Decision::Approved => format!("LOAN INSURABLE: {}", band.label()),
            Decision::Restricted => format!("PARTIAL COVERAGE: {}", band.label()),
            Decision::Rejected => format!("LOAN REJECTED: {}", band.label()),
        }
    }
}

/// Risk band label derived from the score and network flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    LowRisk,
    MediumRisk,
    HighRisk,
    CriticalRisk,
    NetworkBlacklist,
}

impl RiskBand {
    pub fn label(self) -> &'static str {
        match self {
            RiskBand::LowRisk => "Low Risk",
            RiskBand::MediumRisk => "Medium Risk",
            RiskBand::HighRisk => "High Risk",
            RiskBand::CriticalRisk => "Critical Risk",
            RiskBand::NetworkBlacklist => "Network Blacklist",
        }
    }

    pub fn decision(self) -> Decision {
        match self {
            RiskBand::LowRisk | RiskBand::MediumRisk => Decision::Approved,
            RiskBand::HighRisk => Decision::Restricted,
            RiskBand::CriticalRisk | RiskBand::NetworkBlacklist => Decision::Rejected,
        }
    }

    /// Premium charged as a percentage of principal. Rejected bands carry none.
    pub fn premium_percent(self) -> f64 {
        match self {
            RiskBand::LowRisk => 2.5,
            RiskBand::MediumRisk => 5.0,
            RiskBand::HighRisk => 12.0,
            RiskBand::CriticalRisk | RiskBand::NetworkBlacklist => 0.0,
        }
    }
}

pub const LOW_RISK_FLOOR: f64 = 80.0;
pub const MEDIUM_RISK_FLOOR: f64 = 60.0;
pub const HIGH_RISK_FLOOR: f64 = 40.0;

/// Decision, band, and premium for one score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub decision: Decision,
    pub band: RiskBand,
    pub premium_percent: f64,
}

impl RiskAssessment {
    pub fn for_band(band: RiskBand) -> Self {
        Self {
            decision: band.decision(),
            band,
            premium_percent: band.premium_percent(),
        }
    }

    pub fn premium_amount(&self, loan_amount: f64) -> f64 {
        self.premium_percent / 100.0 * loan_amount
    }
}

/// Maps a score and blacklist flag onto a band.
///
/// The flag short-circuits every score check. Band floors are inclusive and the bands are
/// continuous, so 79.5 is medium risk and 59.9 is high risk. NaN falls through to critical.
pub fn classify(score: f64, network_flag: bool) -> RiskAssessment {
    let band = if network_flag {
        RiskBand::NetworkBlacklist
    } else {
        match score {
            s if s >= LOW_RISK_FLOOR => RiskBand::LowRisk,
            s if s >= MEDIUM_RISK_FLOOR => RiskBand::MediumRisk,
            s if s >= HIGH_RISK_FLOOR => RiskBand::HighRisk,
            _ => RiskBand::CriticalRisk,
        }
    };

    RiskAssessment::for_band(band)
}
