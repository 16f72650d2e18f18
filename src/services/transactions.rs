// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction history and deposit/withdrawal requests.
//!
//! Requests created here start `PENDING`; only a tenant admin can move them
//! on (see [`crate::services::admin`]).

use tracing::info;

use crate::{
    error::ClientError,
    http::{with_query, ApiClient},
    models::{DepositRequest, Transaction, TransactionPage, TransactionQuery, WithdrawRequest},
};

#[derive(Debug, Clone)]
pub struct TransactionService {
    api: ApiClient,
}

impl TransactionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /transactions` with optional server-side filters.
    pub async fn list(&self, query: &TransactionQuery) -> Result<TransactionPage, ClientError> {
        let path = with_query(
            "/transactions",
            &[
                ("type", query.kind.map(|k| k.as_str().to_string())),
                ("status", query.status.map(|s| s.as_str().to_string())),
                ("page", query.page.map(|p| p.to_string())),
                ("limit", query.limit.map(|l| l.to_string())),
            ],
        );
        self.api.get(&path, "Failed to fetch transactions").await
    }

    /// `POST /transactions/deposit`
    pub async fn deposit(&self, request: &DepositRequest) -> Result<Transaction, ClientError> {
        let tx: Transaction = self
            .api
            .post("/transactions/deposit", request, "Deposit request failed")
            .await?;
        info!(tx_id = %tx.id, amount = tx.amount, crypto = %request.crypto, "deposit requested");
        Ok(tx)
    }

    /// `POST /transactions/withdraw`
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<Transaction, ClientError> {
        let tx: Transaction = self
            .api
            .post("/transactions/withdraw", request, "Withdrawal request failed")
            .await?;
        info!(tx_id = %tx.id, amount = tx.amount, crypto = %request.crypto, "withdrawal requested");
        Ok(tx)
    }
}
