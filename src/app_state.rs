//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    api::TransactionApi,
    transaction::{FetchFailurePolicy, TransactionView},
};

/// The state of the web server.
#[derive(Clone)]
pub struct AppState {
    /// The view-model behind the transactions page.
    pub transaction_view: Arc<TransactionView>,
}

impl AppState {
    /// Create a new [AppState] that reads and writes transactions through `api`.
    ///
    /// `fetch_failure_policy` decides what the page shows when the transaction
    /// list cannot be fetched.
    pub fn new(api: Arc<dyn TransactionApi>, fetch_failure_policy: FetchFailurePolicy) -> Self {
        Self {
            transaction_view: Arc::new(TransactionView::new(api, fetch_failure_policy)),
        }
    }
}

impl FromRef<AppState> for Arc<TransactionView> {
    fn from_ref(state: &AppState) -> Self {
        state.transaction_view.clone()
    }
}
