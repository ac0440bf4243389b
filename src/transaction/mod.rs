//! Transactions for the finance app.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` and `DraftTransaction` models and the draft field updates
//! - The `TransactionView` view-model that syncs the page with the transaction API
//! - Route handlers for the transactions page, draft updates and submitting the form

mod core;
mod draft_endpoint;
mod page;
mod submit_endpoint;
mod view_model;

pub use core::{DraftField, DraftTransaction, FieldUpdate, Transaction, TransactionId};
pub use draft_endpoint::update_draft_field_endpoint;
pub use page::get_transactions_page;
pub use submit_endpoint::submit_transaction_endpoint;
pub use view_model::{
    FetchFailurePolicy, RefreshOutcome, SubmitOutcome, TransactionView, ViewSnapshot,
};
