use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::directory::StaticBorrowerDirectory;
use super::domain::{BorrowerId, BorrowerProfile, BorrowerRecord, ValidationError};

/// Failure while importing a borrower roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to open borrower roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse borrower roster: {0}")]
    Csv(#[from] csv::Error),
    #[error("borrower {borrower_id} has an invalid profile: {source}")]
    InvalidProfile {
        borrower_id: BorrowerId,
        #[source]
        source: ValidationError,
    },
    #[error("borrower {0} appears more than once in the roster")]
    Duplicate(BorrowerId),
}

/// Reads a roster with the columns
/// `borrower_id,name,repayment,severity,discipline,identity,context,network_flag`.
pub fn load_roster<R: Read>(reader: R) -> Result<StaticBorrowerDirectory, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<RosterRow>() {
        let record = row?.into_record();
        if let Err(source) = record.profile.validate() {
            return Err(RosterError::InvalidProfile {
                borrower_id: record.borrower_id,
                source,
            });
        }
        if !seen.insert(record.borrower_id.clone()) {
            return Err(RosterError::Duplicate(record.borrower_id));
        }
        records.push(record);
    }

    Ok(StaticBorrowerDirectory::from_records(records))
}

pub fn load_roster_path(path: impl AsRef<Path>) -> Result<StaticBorrowerDirectory, RosterError> {
    let file = File::open(path)?;
    load_roster(file)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    borrower_id: String,
    name: String,
    repayment: f64,
    severity: f64,
    discipline: f64,
    identity: f64,
    context: f64,
    #[serde(default, deserialize_with = "lenient_bool")]
    network_flag: bool,
}

impl RosterRow {
    fn into_record(self) -> BorrowerRecord {
        BorrowerRecord {
            borrower_id: BorrowerId(self.borrower_id),
            name: self.name,
            profile: BorrowerProfile {
                repayment: self.repayment,
                severity: self.severity,
                discipline: self.discipline,
                identity: self.identity,
                context: self.context,
                network_flag: self.network_flag,
            },
        }
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw
        .as_deref()
        .map(str::trim)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        None | Some("") | Some("false") | Some("no") | Some("0") => Ok(false),
        Some("true") | Some("yes") | Some("1") => Ok(true),
        Some(other) => Err(serde::de::Error::custom(format!(
            "network_flag '{other}' is not a boolean"
        ))),
    }
}
