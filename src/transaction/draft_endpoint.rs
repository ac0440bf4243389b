use std::{collections::HashMap, sync::Arc};

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    transaction::{FieldUpdate, TransactionView},
};

/// Set one field of the draft transaction as the user edits the form.
///
/// The form body holds at most the value of the field named in the path. A
/// checkbox that is not checked sends no value at all.
pub async fn update_draft_field_endpoint(
    State(view): State<Arc<TransactionView>>,
    Path(field): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<StatusCode, Error> {
    let value = form.get(&field).map(String::as_str);
    let update = FieldUpdate::from_form_value(&field, value)?;
    view.set_field(update)?;

    Ok(StatusCode::NO_CONTENT)
}
