//! The client for the remote transaction API.
//!
//! The web app does not store transactions itself. It lists and creates them
//! through a [TransactionApi], which in production is [HttpTransactionApi].

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::transaction::{DraftTransaction, Transaction};

/// The path, relative to the API base URL, of the transactions collection.
///
/// The trailing slash is significant, the API does not redirect without it.
const TRANSACTIONS_PATH: &str = "transactions/";

/// The errors that may occur when talking to the transaction API.
///
/// These are only ever logged, so the variants keep whatever detail is useful
/// for debugging rather than classifying failures for the user.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid API URL {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the response body could not be read
    /// or decoded.
    #[error("request to the transaction API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("the transaction API responded with {0}")]
    Status(StatusCode),
}

/// The operations the app needs from the transaction API.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Get every transaction in the order the API returns them.
    async fn list(&self) -> Result<Vec<Transaction>, ApiError>;

    /// Ask the API to record `draft` as a new transaction.
    ///
    /// The response body, if any, is ignored.
    async fn create(&self, draft: &DraftTransaction) -> Result<(), ApiError>;
}

/// A [TransactionApi] backed by HTTP requests to a remote server.
#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    transactions_url: Url,
    http: reqwest::Client,
}

impl HttpTransactionApi {
    /// Create a client for the API served at `base_url`, e.g. "http://localhost:8000".
    ///
    /// A path in `base_url` is kept as a prefix, so "http://host/api" lists
    /// transactions from "http://host/api/transactions/".
    ///
    /// # Errors
    /// Returns [ApiError::InvalidUrl] if `base_url` is not an absolute HTTP(S) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut url = Url::parse(base_url)
            .map_err(|error| ApiError::InvalidUrl(format!("\"{base_url}\": {error}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "\"{base_url}\": expected an http or https URL"
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let transactions_url = url
            .join(TRANSACTIONS_PATH)
            .map_err(|error| ApiError::InvalidUrl(format!("\"{base_url}\": {error}")))?;

        Ok(Self {
            transactions_url,
            http: reqwest::Client::new(),
        })
    }

    pub(crate) fn transactions_url(&self) -> &Url {
        &self.transactions_url
    }
}

#[async_trait]
impl TransactionApi for HttpTransactionApi {
    async fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        let response = self
            .http
            .get(self.transactions_url.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let transactions = response.json::<Vec<Transaction>>().await?;
        tracing::debug!(
            "fetched {} transactions from {}",
            transactions.len(),
            self.transactions_url
        );

        Ok(transactions)
    }

    async fn create(&self, draft: &DraftTransaction) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.transactions_url.clone())
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status))
        }
    }
}
