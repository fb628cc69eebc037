use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::config::Config;
use payment_gateway::domain::ports::{BankClientRef, PaymentStoreRef};
use payment_gateway::infrastructure::acquiring_bank::HttpBankClient;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::http::{self, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::parse();

    let bank = HttpBankClient::new(config.bank_url.clone()).into_diagnostic()?;
    let bank: BankClientRef = Arc::new(bank);
    let store: PaymentStoreRef = Arc::new(InMemoryPaymentStore::new());

    let listener = TcpListener::bind(config.listen).await.into_diagnostic()?;
    info!(
        address = %config.listen,
        bank_url = %config.bank_url,
        "Payment gateway listening"
    );

    http::serve(listener, AppState::new(bank, store))
        .await
        .into_diagnostic()?;

    Ok(())
}
