use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BorrowerId, BorrowerProfile, BorrowerRecord};

/// Lookup collaborator resolving borrower identifiers to profiles.
pub trait BorrowerDirectory: Send + Sync {
    fn fetch(&self, id: &BorrowerId) -> Result<Option<BorrowerRecord>, DirectoryError>;
    fn list(&self) -> Result<Vec<BorrowerRecord>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("borrower directory unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for shared-network updates after a verified default.
pub trait NetworkAlertPublisher: Send + Sync {
    fn publish(&self, alert: NetworkAlert) -> Result<(), AlertError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorrowerAction {
    FlaggedGlobal,
}

impl BorrowerAction {
    pub fn label(self) -> &'static str {
        match self {
            BorrowerAction::FlaggedGlobal => "flagged_global",
        }
    }
}

/// Ecosystem notice raised when a covered loan defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAlert {
    pub borrower_id: BorrowerId,
    pub action: BorrowerAction,
    pub raised_at: DateTime<Utc>,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("network alert transport unavailable: {0}")]
    Transport(String),
}

/// Fixed roster keyed by borrower id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticBorrowerDirectory {
    records: BTreeMap<BorrowerId, BorrowerRecord>,
}

impl StaticBorrowerDirectory {
    /// Later records replace earlier ones sharing an id.
    pub fn from_records(records: impl IntoIterator<Item = BorrowerRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.borrower_id.clone(), record))
            .collect();
        Self { records }
    }

    /// The three presenter borrowers: a good payer, a neutral one, and a strategic defaulter.
    pub fn demo() -> Self {
        Self::from_records([
            demo_record("1001", "Tunde Bakare (Good)", [95.0, 90.0, 85.0, 100.0, 90.0], false),
            demo_record("1002", "Chidinma Okoro (Neutral)", [70.0, 60.0, 65.0, 80.0, 60.0], false),
            demo_record("1003", "Emeka Johnson (Bad)", [20.0, 10.0, 30.0, 40.0, 20.0], true),
        ])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn demo_record(id: &str, name: &str, scores: [f64; 5], network_flag: bool) -> BorrowerRecord {
    let [repayment, severity, discipline, identity, context] = scores;
    BorrowerRecord {
        borrower_id: BorrowerId::new(id),
        name: name.to_string(),
        profile: BorrowerProfile {
            repayment,
            severity,
            discipline,
            identity,
            context,
            network_flag,
        },
    }
}

impl BorrowerDirectory for StaticBorrowerDirectory {
    fn fetch(&self, id: &BorrowerId) -> Result<Option<BorrowerRecord>, DirectoryError> {
        Ok(self.records.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<BorrowerRecord>, DirectoryError> {
        Ok(self.records.values().cloned().collect())
    }
}
