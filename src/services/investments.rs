// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Investment plans, positions and copy trading.
//!
//! Copy trading creates a new investment for the caller that mirrors another
//! user's active investment, funded with the caller's own balance.

use tracing::info;

use crate::{
    error::ClientError,
    http::{segment, ApiClient},
    models::{CopyInvestmentRequest, CopyTradeOpportunity, CreateInvestmentRequest, Investment, InvestmentPlan},
};

#[derive(Debug, Clone)]
pub struct InvestmentService {
    api: ApiClient,
}

impl InvestmentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /investments/plans`
    pub async fn plans(&self) -> Result<Vec<InvestmentPlan>, ClientError> {
        let plans: Option<Vec<InvestmentPlan>> = self
            .api
            .get("/investments/plans", "Failed to fetch investment plans")
            .await?;
        Ok(plans.unwrap_or_default())
    }

    /// `GET /investments`
    pub async fn list(&self) -> Result<Vec<Investment>, ClientError> {
        let investments: Option<Vec<Investment>> = self
            .api
            .get("/investments", "Failed to fetch investments")
            .await?;
        Ok(investments.unwrap_or_default())
    }

    /// `POST /investments`
    pub async fn create(&self, plan_id: &str, amount: f64) -> Result<Investment, ClientError> {
        let request = CreateInvestmentRequest {
            plan_id: plan_id.to_string(),
            amount,
        };
        let investment: Investment = self
            .api
            .post("/investments", &request, "Investment failed")
            .await?;
        info!(investment_id = %investment.id, plan_id, amount, "investment created");
        Ok(investment)
    }

    /// `GET /investments/copy-trading`
    pub async fn copy_trading_feed(&self) -> Result<Vec<CopyTradeOpportunity>, ClientError> {
        let feed: Option<Vec<CopyTradeOpportunity>> = self
            .api
            .get("/investments/copy-trading", "Failed to fetch copy trading feed")
            .await?;
        Ok(feed.unwrap_or_default())
    }

    /// `POST /investments/{id}/copy`
    pub async fn copy(&self, investment_id: &str, amount: f64) -> Result<Investment, ClientError> {
        let path = format!("/investments/{}/copy", segment(investment_id));
        let investment: Investment = self
            .api
            .post(&path, &CopyInvestmentRequest { amount }, "Copy trade failed")
            .await?;
        info!(
            investment_id = %investment.id,
            source = %investment_id,
            amount,
            "copy trade created"
        );
        Ok(investment)
    }
}
