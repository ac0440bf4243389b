//! Handles submitting the transaction form.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::{
    Error, endpoints,
    transaction::{
        DraftField, FieldUpdate, SubmitOutcome, TransactionView, page::transaction_view,
    },
};

/// The transaction form as submitted by the browser.
#[derive(Debug, Default, Deserialize)]
pub struct DraftForm {
    #[serde(default)]
    amount: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
    /// Only present when the checkbox is checked.
    is_income: Option<String>,
}

impl DraftForm {
    fn into_updates(self) -> [FieldUpdate; 5] {
        [
            FieldUpdate::Amount(self.amount),
            FieldUpdate::Category(self.category),
            FieldUpdate::Description(self.description),
            FieldUpdate::Date(self.date),
            FieldUpdate::new(DraftField::IsIncome, self.is_income.as_deref()),
        ]
    }
}

/// Send the draft transaction to the API.
///
/// The submitted form replaces the draft before it is sent, so the request
/// also works when the per-field updates never reached the server.
///
/// htmx requests get the updated form and table back. Plain form posts are
/// redirected to the transactions page.
pub async fn submit_transaction_endpoint(
    State(view): State<Arc<TransactionView>>,
    HxRequest(is_htmx_request): HxRequest,
    Form(form): Form<DraftForm>,
) -> Result<Response, Error> {
    if view.submit_with(form.into_updates()).await? == SubmitOutcome::Failed {
        tracing::warn!("transaction was not created, keeping the draft");
    }

    if !is_htmx_request {
        return Ok(Redirect::to(endpoints::ROOT).into_response());
    }

    let snapshot = view.snapshot()?;

    Ok(transaction_view(&snapshot).into_response())
}
