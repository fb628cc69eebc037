use super::AppState;
use crate::domain::payment::{PaymentOutcome, PaymentRequest, PaymentStatus};
use crate::domain::validation::validate;
use crate::error::GatewayError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{info, instrument};
use uuid::Uuid;

/// `GET /api/payments/{id}`
#[instrument(skip_all)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, GatewayError> {
    // Anything that is not a UUID can never have been minted.
    let payment = match Uuid::parse_str(&id) {
        Ok(uuid) => state.store.get(uuid).await?,
        Err(_) => None,
    };

    Ok(match payment {
        Some(payment) => Json(payment).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("Payment details not found for id: {id}"),
        )
            .into_response(),
    })
}

/// `POST /api/payments`
///
/// Invalid requests get a bare `Rejected` and never reach the processor; the
/// field errors are only logged. A declined payment is answered with its status
/// alone, an authorized one with the full record.
#[instrument(skip_all)]
pub async fn process_payment(
    State(state): State<AppState>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            info!(status = %rejection.status(), "Payment request body could not be read");
            return Ok(rejected());
        }
    };

    let errors = validate(&request);
    if !errors.is_empty() {
        let errors: Vec<String> = errors.iter().map(ToString::to_string).collect();
        info!(?errors, "Payment request rejected");
        return Ok(rejected());
    }

    let outcome = state.processor.process(&request).await?;
    Ok(match outcome {
        PaymentOutcome::Recorded(payment) if payment.status == PaymentStatus::Authorized => {
            Json(payment).into_response()
        }
        outcome => Json(outcome.status()).into_response(),
    })
}

fn rejected() -> Response {
    (StatusCode::BAD_REQUEST, Json(PaymentStatus::Rejected)).into_response()
}
