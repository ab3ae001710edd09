use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::underwriting::directory::{
    AlertError, BorrowerDirectory, DirectoryError, NetworkAlert, NetworkAlertPublisher,
    StaticBorrowerDirectory,
};
use crate::underwriting::domain::{BorrowerId, BorrowerProfile, BorrowerRecord};
use crate::underwriting::{underwriting_router, UnderwritingService};

pub(super) fn profile(scores: [f64; 5], network_flag: bool) -> BorrowerProfile {
    let [repayment, severity, discipline, identity, context] = scores;
    BorrowerProfile {
        repayment,
        severity,
        discipline,
        identity,
        context,
        network_flag,
    }
}

pub(super) fn good_profile() -> BorrowerProfile {
    profile([95.0, 90.0, 85.0, 100.0, 90.0], false)
}

pub(super) fn neutral_profile() -> BorrowerProfile {
    profile([70.0, 60.0, 65.0, 80.0, 60.0], false)
}

pub(super) fn blacklisted_profile() -> BorrowerProfile {
    profile([20.0, 10.0, 30.0, 40.0, 20.0], true)
}

pub(super) fn record(id: &str, profile: BorrowerProfile) -> BorrowerRecord {
    BorrowerRecord {
        borrower_id: BorrowerId::new(id),
        name: format!("Borrower {id}"),
        profile,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<NetworkAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<NetworkAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl NetworkAlertPublisher for MemoryAlerts {
    fn publish(&self, alert: NetworkAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct OfflineAlerts;

impl NetworkAlertPublisher for OfflineAlerts {
    fn publish(&self, _alert: NetworkAlert) -> Result<(), AlertError> {
        Err(AlertError::Transport("network ledger offline".to_string()))
    }
}

pub(super) struct UnavailableDirectory;

impl BorrowerDirectory for UnavailableDirectory {
    fn fetch(&self, _id: &BorrowerId) -> Result<Option<BorrowerRecord>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<BorrowerRecord>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    UnderwritingService<StaticBorrowerDirectory, MemoryAlerts>,
    MemoryAlerts,
) {
    let alerts = MemoryAlerts::default();
    let service = UnderwritingService::new(
        Arc::new(StaticBorrowerDirectory::demo()),
        Arc::new(alerts.clone()),
    );
    (service, alerts)
}

pub(super) fn router_with_service(
    service: UnderwritingService<StaticBorrowerDirectory, MemoryAlerts>,
) -> axum::Router {
    underwriting_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
