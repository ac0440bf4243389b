//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    transaction::{
        get_transactions_page, submit_transaction_endpoint, update_draft_field_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(endpoints::TRANSACTIONS, post(submit_transaction_endpoint))
        .route(endpoints::DRAFT_FIELD, post(update_draft_field_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}
