//! Finance App is a web app for recording your income and expenses.
//!
//! This library serves a single page with a form for adding transactions and
//! a table of the transactions recorded so far. Transactions are stored by a
//! separate transaction API, which this app talks to over HTTP.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{ApiError, HttpTransactionApi, TransactionApi};
pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    DraftField, DraftTransaction, FetchFailurePolicy, FieldUpdate, RefreshOutcome, SubmitOutcome,
    Transaction, TransactionId, TransactionView, ViewSnapshot,
};

use crate::{
    internal_server_error::get_internal_server_error_response,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transaction list could not be fetched from the transaction API.
    ///
    /// This error is logged and never shown to the user.
    #[error("could not fetch transactions: {0}")]
    FetchFailure(ApiError),

    /// The transaction API did not record a submitted transaction.
    ///
    /// This error is logged and never shown to the user.
    #[error("could not create transaction: {0}")]
    SubmitFailure(ApiError),

    /// The name in a draft update does not match any field in the form.
    #[error("\"{0}\" is not a field of the transaction form")]
    UnknownField(String),

    /// Could not acquire the lock on the view state.
    #[error("could not acquire the view state lock")]
    ViewLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UnknownField(field) => {
                tracing::debug!("rejecting update for unknown draft field {field:?}");
                get_404_not_found_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                get_internal_server_error_response()
            }
        }
    }
}
