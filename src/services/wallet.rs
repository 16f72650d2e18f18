// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet snapshot and deposit instructions.

use crate::{
    error::ClientError,
    http::ApiClient,
    models::{PaymentAddress, Wallet},
};

#[derive(Debug, Clone)]
pub struct WalletService {
    api: ApiClient,
}

impl WalletService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /wallet`
    pub async fn get_wallet(&self) -> Result<Wallet, ClientError> {
        self.api.get("/wallet", "Failed to fetch wallet").await
    }

    /// `GET /wallet/payment-addresses`
    pub async fn payment_addresses(&self) -> Result<Vec<PaymentAddress>, ClientError> {
        let addresses: Option<Vec<PaymentAddress>> = self
            .api
            .get("/wallet/payment-addresses", "Failed to fetch payment addresses")
            .await?;
        Ok(addresses.unwrap_or_default())
    }
}
