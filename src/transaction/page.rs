//! Defines the route handler and templates for the transactions page.
//!
//! The page has a form for a new transaction and a table of the transactions
//! fetched from the API. Both live inside one container so that submitting
//! the form can swap in a fresh copy of the form and table together.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CHECK_GROUP_STYLE, FORM_CHECK_INPUT_STYLE,
        FORM_CHECK_LABEL_STYLE, FORM_GROUP_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_STYLE, base,
    },
    navigation::NavBar,
    transaction::{DraftField, DraftTransaction, Transaction, TransactionView, ViewSnapshot},
};

/// The ID of the element that holds the form and the table.
pub(crate) const TRANSACTION_VIEW_ID: &str = "transaction-view";

struct TextInput {
    field: DraftField,
    label: &'static str,
    input_type: &'static str,
    step: Option<&'static str>,
    required: bool,
}

const TEXT_INPUTS: [TextInput; 4] = [
    TextInput {
        field: DraftField::Amount,
        label: "Amount",
        input_type: "number",
        step: Some("0.01"),
        required: true,
    },
    TextInput {
        field: DraftField::Category,
        label: "Category",
        input_type: "text",
        step: None,
        required: true,
    },
    TextInput {
        field: DraftField::Description,
        label: "Description",
        input_type: "text",
        step: None,
        required: false,
    },
    TextInput {
        field: DraftField::Date,
        label: "Date",
        input_type: "date",
        step: None,
        required: true,
    },
];

/// The text currently held by a text field of the draft.
fn draft_text(draft: &DraftTransaction, field: DraftField) -> &str {
    match field {
        DraftField::Amount => &draft.amount,
        DraftField::Category => &draft.category,
        DraftField::Description => &draft.description,
        DraftField::Date => &draft.date,
        DraftField::IsIncome => "",
    }
}

fn text_input(input: &TextInput, draft: &DraftTransaction) -> Markup {
    let name = input.field.name();

    html! {
        div class=(FORM_GROUP_STYLE)
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (input.label) }

            input
                type=(input.input_type)
                class=(FORM_TEXT_INPUT_STYLE)
                id=(name)
                name=(name)
                step=[input.step]
                value=(draft_text(draft, input.field))
                required[input.required]
                hx-post=(format_endpoint(endpoints::DRAFT_FIELD, name))
                hx-trigger="change"
                hx-params=(name)
                hx-swap="none";
        }
    }
}

fn income_checkbox(draft: &DraftTransaction) -> Markup {
    let name = DraftField::IsIncome.name();

    html! {
        div class=(FORM_CHECK_GROUP_STYLE)
        {
            input
                type="checkbox"
                class=(FORM_CHECK_INPUT_STYLE)
                id=(name)
                name=(name)
                checked[draft.is_income]
                hx-post=(format_endpoint(endpoints::DRAFT_FIELD, name))
                hx-trigger="change"
                hx-params=(name)
                hx-swap="none";

            label class=(FORM_CHECK_LABEL_STYLE) for=(name) { "Income?" }
        }
    }
}

fn transaction_form(draft: &DraftTransaction) -> Markup {
    html! {
        // Without htmx the form falls back to a normal POST and a redirect.
        form
            action=(endpoints::TRANSACTIONS)
            method="post"
            hx-post=(endpoints::TRANSACTIONS)
            hx-target=(format!("#{TRANSACTION_VIEW_ID}"))
            hx-swap="outerHTML"
        {
            @for input in &TEXT_INPUTS {
                (text_input(input, draft))
            }

            (income_checkbox(draft))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Submit" }
        }
    }
}

fn transactions_table(transactions: &[Transaction]) -> Markup {
    html! {
        table class=(TABLE_STYLE)
        {
            thead
            {
                tr
                {
                    th { "Amount" }
                    th { "Category" }
                    th { "Description" }
                    th { "Income?" }
                    th { "Date" }
                }
            }

            tbody
            {
                @for transaction in transactions {
                    tr data-transaction-id=(transaction.id)
                    {
                        td { (transaction.amount) }
                        td { (transaction.category) }
                        td { (transaction.description) }
                        td { (if transaction.is_income { "Yes" } else { "No" }) }
                        td { (transaction.date) }
                    }
                }
            }
        }
    }
}

/// The form and table, without the rest of the page.
pub(crate) fn transaction_view(snapshot: &ViewSnapshot) -> Markup {
    html! {
        div id=(TRANSACTION_VIEW_ID)
        {
            h2 { "Add Transaction" }

            (transaction_form(&snapshot.draft))

            (transactions_table(&snapshot.transactions))
        }
    }
}

fn transactions_page(snapshot: &ViewSnapshot) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            (transaction_view(snapshot))
        }
    };

    base("Transactions", &content)
}

/// Render the transactions page.
///
/// Every page load fetches the transaction list before rendering.
pub async fn get_transactions_page(
    State(view): State<Arc<TransactionView>>,
) -> Result<Response, Error> {
    view.refresh().await?;
    let snapshot = view.snapshot()?;

    Ok(transactions_page(&snapshot).into_response())
}
