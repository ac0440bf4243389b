//! The state behind the transactions page and the transitions that change it.
//!
//! [TransactionView] holds two independent pieces of state: the transactions
//! from the last applied fetch and the draft in the form. Failures talking to
//! the API are logged and swallowed here, so callers only see
//! [Error::ViewLockError].

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    api::TransactionApi,
    transaction::{DraftTransaction, FieldUpdate, Transaction},
};

/// What to do with the held transactions when the list cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FetchFailurePolicy {
    /// Show no transactions until the next successful fetch.
    #[default]
    Clear,
    /// Keep showing the transactions from the last successful fetch.
    Keep,
}

/// The result of [TransactionView::refresh].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The held transactions were replaced with the fetched list.
    Updated,
    /// The fetch failed and the [FetchFailurePolicy] was applied.
    Failed,
    /// A refresh issued later had already been applied, so this response was discarded.
    Stale,
}

/// The result of [TransactionView::submit].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The API recorded the draft, the draft was cleared and the list refreshed.
    Created,
    /// The API did not record the draft, nothing changed.
    Failed,
}

/// A copy of the view state for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSnapshot {
    /// The transactions to show in the table, in API order.
    pub transactions: Vec<Transaction>,
    /// The values to show in the form.
    pub draft: DraftTransaction,
}

#[derive(Debug, Default)]
struct ViewState {
    transactions: Vec<Transaction>,
    draft: DraftTransaction,
    /// The sequence number given to the most recently started refresh.
    last_issued_refresh: u64,
    /// The sequence number of the refresh whose response is on display.
    last_applied_refresh: u64,
}

/// The view-model for the transactions page.
pub struct TransactionView {
    api: Arc<dyn TransactionApi>,
    fetch_failure_policy: FetchFailurePolicy,
    state: Mutex<ViewState>,
}

impl TransactionView {
    /// Create a view with no transactions and an empty draft.
    pub fn new(api: Arc<dyn TransactionApi>, fetch_failure_policy: FetchFailurePolicy) -> Self {
        Self {
            api,
            fetch_failure_policy,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Copy the current transactions and draft.
    ///
    /// # Errors
    /// Returns [Error::ViewLockError] if the state lock is poisoned.
    pub fn snapshot(&self) -> Result<ViewSnapshot, Error> {
        let state = self.lock_state()?;

        Ok(ViewSnapshot {
            transactions: state.transactions.clone(),
            draft: state.draft.clone(),
        })
    }

    /// Fetch the transaction list and replace the held transactions with it.
    ///
    /// Refreshes may overlap. Each one is numbered when it starts and its
    /// response is only applied if no later refresh has been applied yet, so
    /// the table never goes back to an older list.
    ///
    /// # Errors
    /// Returns [Error::ViewLockError] if the state lock is poisoned. A failed
    /// fetch is not an error, see [RefreshOutcome::Failed].
    pub async fn refresh(&self) -> Result<RefreshOutcome, Error> {
        let refresh_id = {
            let mut state = self.lock_state()?;
            state.last_issued_refresh += 1;
            state.last_issued_refresh
        };

        let result = self.api.list().await;

        let mut state = self.lock_state()?;

        if refresh_id <= state.last_applied_refresh {
            tracing::debug!(
                "discarding transaction list from refresh #{refresh_id}, \
                refresh #{} was already applied",
                state.last_applied_refresh
            );
            return Ok(RefreshOutcome::Stale);
        }

        state.last_applied_refresh = refresh_id;

        match result {
            Ok(transactions) => {
                tracing::debug!(
                    "refresh #{refresh_id} loaded {} transactions",
                    transactions.len()
                );
                state.transactions = transactions;
                Ok(RefreshOutcome::Updated)
            }
            Err(error) => {
                tracing::error!("{}", Error::FetchFailure(error));

                match self.fetch_failure_policy {
                    FetchFailurePolicy::Clear => state.transactions = Vec::new(),
                    FetchFailurePolicy::Keep => tracing::debug!(
                        "keeping {} transactions from an earlier refresh",
                        state.transactions.len()
                    ),
                }

                Ok(RefreshOutcome::Failed)
            }
        }
    }

    /// Set one field of the draft.
    ///
    /// # Errors
    /// Returns [Error::ViewLockError] if the state lock is poisoned.
    pub fn set_field(&self, update: FieldUpdate) -> Result<(), Error> {
        tracing::debug!("setting draft field {}", update.field());
        self.lock_state()?.draft.apply(update);

        Ok(())
    }

    /// Send the current draft to the API.
    ///
    /// On success the draft is cleared and the list refreshed. On failure the
    /// draft and the list are left as they were so the user can try again.
    ///
    /// # Errors
    /// Returns [Error::ViewLockError] if the state lock is poisoned. A failed
    /// create is not an error, see [SubmitOutcome::Failed].
    pub async fn submit(&self) -> Result<SubmitOutcome, Error> {
        self.submit_with(std::iter::empty()).await
    }

    /// Apply `updates` to the draft, then send it like [TransactionView::submit].
    ///
    /// The updates are applied and the draft copied under one lock, so a
    /// concurrent submit cannot swap in its own values before the draft is sent.
    ///
    /// # Errors
    /// Returns [Error::ViewLockError] if the state lock is poisoned.
    pub async fn submit_with(
        &self,
        updates: impl IntoIterator<Item = FieldUpdate> + Send,
    ) -> Result<SubmitOutcome, Error> {
        let draft = {
            let mut state = self.lock_state()?;
            for update in updates {
                state.draft.apply(update);
            }
            state.draft.clone()
        };

        if let Err(error) = self.api.create(&draft).await {
            tracing::error!("{}", Error::SubmitFailure(error));
            return Ok(SubmitOutcome::Failed);
        }

        tracing::info!("created transaction in category {:?}", draft.category);
        self.lock_state()?.draft = DraftTransaction::default();
        self.refresh().await?;

        Ok(SubmitOutcome::Created)
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, ViewState>, Error> {
        self.state
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire the view state lock: {error}"))
            .map_err(|_| Error::ViewLockError)
    }
}
