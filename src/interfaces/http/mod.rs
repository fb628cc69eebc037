//! HTTP surface of the gateway.
//!
//! Routes requests to the validator, the processor and the store. Nothing in
//! here makes payment decisions.

pub mod health;
pub mod payments;

use crate::application::processor::PaymentProcessor;
use crate::domain::ports::{BankClientRef, PaymentStoreRef};
use crate::error::{GatewayError, Result};
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Shared handler state. Cloned per request; the clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<PaymentProcessor>,
    pub store: PaymentStoreRef,
}

impl AppState {
    pub fn new(bank: BankClientRef, store: PaymentStoreRef) -> Self {
        Self {
            processor: Arc::new(PaymentProcessor::new(bank, store.clone())),
            store,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/payments", post(payments::process_payment))
        .route("/api/payments/{id}", get(payments::get_payment))
        .with_state(state)
}

/// Serves the API on `listener` until Ctrl-C is received.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Payment gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Could not listen for Ctrl-C, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
