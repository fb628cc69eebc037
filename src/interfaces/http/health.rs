use axum::response::IntoResponse;
use tracing::{debug, instrument};

#[instrument(skip_all)]
pub async fn health() -> impl IntoResponse {
    debug!("Payment gateway health was called");
    "Payment gateway health is good"
}
