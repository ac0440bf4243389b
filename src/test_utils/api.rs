use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    api::{ApiError, TransactionApi},
    transaction::{DraftTransaction, Transaction},
};

/// An in-memory [TransactionApi] that replays scripted responses.
///
/// Responses are used in the order they are pushed. When no response is left,
/// `list` returns an empty list and `create` succeeds.
#[derive(Debug, Default)]
pub(crate) struct FakeTransactionApi {
    list_responses: Mutex<VecDeque<Result<Vec<Transaction>, ApiError>>>,
    create_responses: Mutex<VecDeque<Result<(), ApiError>>>,
    list_calls: AtomicUsize,
    created: Mutex<Vec<DraftTransaction>>,
}

impl FakeTransactionApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_list_response(&self, response: Result<Vec<Transaction>, ApiError>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn push_create_response(&self, response: Result<(), ApiError>) {
        self.create_responses.lock().unwrap().push_back(response);
    }

    /// The number of times `list` was called.
    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Every draft passed to `create`, including the ones that failed.
    pub(crate) fn created(&self) -> Vec<DraftTransaction> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionApi for FakeTransactionApi {
    async fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create(&self, draft: &DraftTransaction) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(draft.clone());

        self.create_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

pub(crate) fn api_failure() -> ApiError {
    ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)
}

pub(crate) fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            amount: 2500.0,
            category: "Salary".to_owned(),
            description: "March pay".to_owned(),
            is_income: true,
            date: "2025-03-28".to_owned(),
        },
        Transaction {
            id: 2,
            amount: 12.5,
            category: "Food".to_owned(),
            description: "Lunch".to_owned(),
            is_income: false,
            date: "2025-03-29".to_owned(),
        },
        Transaction {
            id: 5,
            amount: 60.0,
            category: "Transport".to_owned(),
            description: "".to_owned(),
            is_income: false,
            date: "2025-03-30".to_owned(),
        },
    ]
}
