use crate::domain::bank::{BankRequest, BankResponse};
use crate::domain::ports::BankClient;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

/// Talks to the acquiring bank over HTTP.
///
/// Each call is a single JSON POST to the configured URL. Transport failures,
/// non-success statuses and unreadable bodies are all reported as "no decision"
/// rather than errors. There are no retries.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpBankClient {
    http: Client,
    url: Url,
}

impl HttpBankClient {
    pub fn new(url: Url) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl BankClient for HttpBankClient {
    async fn send(&self, request: &BankRequest) -> Option<BankResponse> {
        let response = match self.http.post(self.url.clone()).json(request).send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "Acquiring bank could not be reached");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Acquiring bank answered with a non-success status");
            return None;
        }

        match response.json::<BankResponse>().await {
            Ok(decision) => {
                debug!(authorized = decision.authorized, "Acquiring bank decision received");
                Some(decision)
            }
            Err(error) => {
                warn!(%error, "Acquiring bank response body could not be read");
                None
            }
        }
    }
}
