// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! KYC submission and status.

use crate::{
    error::ClientError,
    http::ApiClient,
    models::{KycEnvelope, KycRequest, KycSubmission},
};

#[derive(Debug, Clone)]
pub struct KycService {
    api: ApiClient,
}

impl KycService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /kyc`; `None` before the user has submitted anything.
    pub async fn status(&self) -> Result<Option<KycRequest>, ClientError> {
        let envelope: Option<KycEnvelope> =
            self.api.get("/kyc", "Failed to fetch KYC status").await?;
        Ok(envelope.and_then(|e| e.kyc))
    }

    /// `POST /kyc`. One submission per user; resubmission is the backend's call.
    pub async fn submit(&self, submission: &KycSubmission) -> Result<KycRequest, ClientError> {
        self.api.post("/kyc", submission, "KYC submission failed").await
    }
}
