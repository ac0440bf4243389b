//! Defines the transaction records shown in the table and the draft edited in the form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The ID the transaction API assigns to a transaction.
pub type TransactionId = i64;

/// An expense or income recorded by the transaction API.
///
/// The app only ever holds snapshots of these, they are never edited locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A free-form category, e.g. "Groceries".
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the money was earned (`true`) or spent (`false`).
    pub is_income: bool,
    /// When the transaction happened, as the API stores it.
    ///
    /// The API does not check the format, so this is shown as is and never
    /// parsed. One odd date must not stop the rest of the list from loading.
    pub date: String,
}

/// The unsaved transaction the user is composing in the form.
///
/// Every field holds exactly what the user entered. The draft is sent to the
/// API as is, so amounts and dates stay strings here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftTransaction {
    /// The amount as typed into the number input.
    pub amount: String,
    /// The category as typed.
    pub category: String,
    /// The description as typed, may be empty.
    pub description: String,
    /// Whether the income checkbox is checked.
    pub is_income: bool,
    /// The date as picked in the date input, normally "YYYY-MM-DD".
    pub date: String,
}

impl DraftTransaction {
    /// Update a single field of the draft.
    ///
    /// Values are stored verbatim: no parsing, validation or trimming.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Amount(amount) => self.amount = amount,
            FieldUpdate::Category(category) => self.category = category,
            FieldUpdate::Description(description) => self.description = description,
            FieldUpdate::Date(date) => self.date = date,
            FieldUpdate::IsIncome(is_income) => self.is_income = is_income,
        }
    }
}

// ============================================================================
// FIELD UPDATES
// ============================================================================

/// The fields of [DraftTransaction] that the form can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// The amount text input.
    Amount,
    /// The category text input.
    Category,
    /// The description text input.
    Description,
    /// The date input.
    Date,
    /// The income checkbox.
    IsIncome,
}

impl DraftField {
    /// Every draft field, in the order they appear in the form.
    pub const ALL: [DraftField; 5] = [
        DraftField::Amount,
        DraftField::Category,
        DraftField::Description,
        DraftField::Date,
        DraftField::IsIncome,
    ];

    /// The name of the HTML input for this field.
    pub fn name(self) -> &'static str {
        match self {
            DraftField::Amount => "amount",
            DraftField::Category => "category",
            DraftField::Description => "description",
            DraftField::Date => "date",
            DraftField::IsIncome => "is_income",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| Error::UnknownField(name.to_owned()))
    }
}

/// A command that sets one field of a [DraftTransaction].
///
/// The checkbox carries its checked state, every other field carries the raw
/// text from its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Set the amount.
    Amount(String),
    /// Set the category.
    Category(String),
    /// Set the description.
    Description(String),
    /// Set the date.
    Date(String),
    /// Check or uncheck the income checkbox.
    IsIncome(bool),
}

impl FieldUpdate {
    /// Build the update for the input named `field` from its submitted form value.
    ///
    /// Browsers only submit a checkbox when it is checked, so for the income
    /// checkbox a missing value means unchecked. A missing text value is
    /// treated as an empty input.
    ///
    /// # Errors
    /// Returns [Error::UnknownField] if `field` is not the name of a form input.
    pub fn from_form_value(field: &str, value: Option<&str>) -> Result<Self, Error> {
        let field = field.parse::<DraftField>()?;

        Ok(Self::new(field, value))
    }

    /// Build the update for `field` from its submitted form value.
    pub fn new(field: DraftField, value: Option<&str>) -> Self {
        let text = || value.unwrap_or_default().to_owned();

        match field {
            DraftField::Amount => FieldUpdate::Amount(text()),
            DraftField::Category => FieldUpdate::Category(text()),
            DraftField::Description => FieldUpdate::Description(text()),
            DraftField::Date => FieldUpdate::Date(text()),
            DraftField::IsIncome => FieldUpdate::IsIncome(value.is_some()),
        }
    }

    /// The field this update sets.
    pub fn field(&self) -> DraftField {
        match self {
            FieldUpdate::Amount(_) => DraftField::Amount,
            FieldUpdate::Category(_) => DraftField::Category,
            FieldUpdate::Description(_) => DraftField::Description,
            FieldUpdate::Date(_) => DraftField::Date,
            FieldUpdate::IsIncome(_) => DraftField::IsIncome,
        }
    }
}
