use clap::Parser;
use reqwest::Url;
use std::net::SocketAddr;

/// Runtime settings, taken from the command line or the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Endpoint of the acquiring bank that payments are forwarded to
    #[arg(
        long,
        env = "ACQUIRING_BANK_BASE_URL",
        default_value = "http://localhost:8080/payments"
    )]
    pub bank_url: Url,

    /// Address the payments API listens on
    #[arg(long, env = "PAYMENT_GATEWAY_LISTEN", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,
}
