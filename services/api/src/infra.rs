use editt::config::UnderwritingConfig;
use editt::underwriting::{
    load_roster_path, AlertError, NetworkAlert, NetworkAlertPublisher, RosterError,
    StaticBorrowerDirectory,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Network ledger stand-in that keeps every flag raised during the process lifetime.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNetworkAlerts {
    events: Arc<Mutex<Vec<NetworkAlert>>>,
}

impl NetworkAlertPublisher for InMemoryNetworkAlerts {
    fn publish(&self, alert: NetworkAlert) -> Result<(), AlertError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|_| AlertError::Transport("alert log poisoned".to_string()))?;
        info!(borrower_id = %alert.borrower_id, action = alert.action.label(), "network alert recorded");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryNetworkAlerts {
    pub(crate) fn events(&self) -> Vec<NetworkAlert> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// CSV roster when configured, otherwise the built-in presenter borrowers.
pub(crate) fn load_directory(
    config: &UnderwritingConfig,
) -> Result<StaticBorrowerDirectory, RosterError> {
    match &config.borrower_csv {
        Some(path) => load_roster_path(path),
        None => Ok(StaticBorrowerDirectory::demo()),
    }
}

/// Whole-unit money formatting with thousands separators, e.g. `NGN 1,250`.
pub(crate) fn format_money(currency: &str, amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{currency} {grouped}")
}
