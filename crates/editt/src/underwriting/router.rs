use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::directory::{BorrowerDirectory, NetworkAlertPublisher};
use super::domain::BorrowerId;
use super::service::{
    DefaultClaimRequest, EvaluationRequest, UnderwritingError, UnderwritingService,
};

/// Router builder exposing borrower lookup, evaluation, and default simulation endpoints.
pub fn underwriting_router<D, N>(service: Arc<UnderwritingService<D, N>>) -> Router
where
    D: BorrowerDirectory + 'static,
    N: NetworkAlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/borrowers", get(roster_handler::<D, N>))
        .route(
            "/api/v1/borrowers/:borrower_id",
            get(borrower_handler::<D, N>),
        )
        .route("/api/v1/evaluations", post(evaluate_handler::<D, N>))
        .route("/api/v1/defaults", post(default_handler::<D, N>))
        .with_state(service)
}

pub(crate) async fn evaluate_handler<D, N>(
    State(service): State<Arc<UnderwritingService<D, N>>>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response
where
    D: BorrowerDirectory + 'static,
    N: NetworkAlertPublisher + 'static,
{
    match service.evaluate(&request) {
        Ok(evaluation) => (StatusCode::OK, axum::Json(evaluation.payload())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn default_handler<D, N>(
    State(service): State<Arc<UnderwritingService<D, N>>>,
    axum::Json(request): axum::Json<DefaultClaimRequest>,
) -> Response
where
    D: BorrowerDirectory + 'static,
    N: NetworkAlertPublisher + 'static,
{
    match service.simulate_default(&request) {
        Ok(claim) => (StatusCode::OK, axum::Json(claim.payload())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn borrower_handler<D, N>(
    State(service): State<Arc<UnderwritingService<D, N>>>,
    Path(borrower_id): Path<String>,
) -> Response
where
    D: BorrowerDirectory + 'static,
    N: NetworkAlertPublisher + 'static,
{
    match service.borrower(&BorrowerId(borrower_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn roster_handler<D, N>(
    State(service): State<Arc<UnderwritingService<D, N>>>,
) -> Response
where
    D: BorrowerDirectory + 'static,
    N: NetworkAlertPublisher + 'static,
{
    match service.roster() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) fn status_for(err: &UnderwritingError) -> StatusCode {
    match err {
        UnderwritingError::BorrowerNotFound(_) => StatusCode::NOT_FOUND,
        UnderwritingError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        UnderwritingError::DefaultNotCovered { .. } => StatusCode::CONFLICT,
        UnderwritingError::Directory(_) | UnderwritingError::Alert(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(err: UnderwritingError) -> Response {
    let status = status_for(&err);
    let payload = match &err {
        UnderwritingError::BorrowerNotFound(id) => json!({
            "error": "Borrower not found in database.",
            "borrower_id": id,
        }),
        UnderwritingError::DefaultNotCovered { borrower_id, band } => json!({
            "error": err.to_string(),
            "borrower_id": borrower_id,
            "risk_band": band.label(),
        }),
        other => json!({ "error": other.to_string() }),
    };
    (status, axum::Json(payload)).into_response()
}
