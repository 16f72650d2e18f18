// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Tenant administration endpoints.
//!
//! These calls only trigger backend workflows (approvals, KYC adjudication,
//! ROI distribution); none of the bookkeeping happens client-side. The
//! backend rejects them for non-admin tokens regardless of what the route
//! guard allowed.

use serde::de::IgnoredAny;
use tracing::info;

use crate::{
    error::ClientError,
    http::{segment, with_query, ApiClient},
    models::{
        AdminUserRow, BroadcastNotification, InvestmentPlan, KycRequest, PlanInput, RejectRequest,
        RoiDistributionResult, TenantSettings, Transaction, TransactionStatus,
    },
};

#[derive(Debug, Clone)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // -------------------------------------------------------------------------
    // Transactions
    // -------------------------------------------------------------------------

    /// `GET /admin/transactions?status=`
    pub async fn transactions(
        &self,
        status: Option<TransactionStatus>,
    ) -> Result<Vec<Transaction>, ClientError> {
        let path = with_query(
            "/admin/transactions",
            &[("status", status.map(|s| s.as_str().to_string()))],
        );
        let txs: Option<Vec<Transaction>> =
            self.api.get(&path, "Failed to fetch transactions").await?;
        Ok(txs.unwrap_or_default())
    }

    /// `POST /admin/transactions/{id}/approve`
    pub async fn approve_transaction(&self, tx_id: &str) -> Result<Transaction, ClientError> {
        let path = format!("/admin/transactions/{}/approve", segment(tx_id));
        let tx: Transaction = self
            .api
            .post(&path, &serde_json::json!({}), "Failed to approve transaction")
            .await?;
        info!(tx_id, "transaction approved");
        Ok(tx)
    }

    /// `POST /admin/transactions/{id}/reject`
    pub async fn reject_transaction(
        &self,
        tx_id: &str,
        reason: &str,
    ) -> Result<Transaction, ClientError> {
        let path = format!("/admin/transactions/{}/reject", segment(tx_id));
        let request = RejectRequest {
            reason: reason.to_string(),
        };
        let tx: Transaction = self
            .api
            .post(&path, &request, "Failed to reject transaction")
            .await?;
        info!(tx_id, "transaction rejected");
        Ok(tx)
    }

    // -------------------------------------------------------------------------
    // KYC
    // -------------------------------------------------------------------------

    /// `GET /admin/kyc`
    pub async fn kyc_requests(&self) -> Result<Vec<KycRequest>, ClientError> {
        let requests: Option<Vec<KycRequest>> = self
            .api
            .get("/admin/kyc", "Failed to fetch KYC requests")
            .await?;
        Ok(requests.unwrap_or_default())
    }

    /// `POST /admin/kyc/{id}/approve`
    pub async fn approve_kyc(&self, kyc_id: &str) -> Result<KycRequest, ClientError> {
        let path = format!("/admin/kyc/{}/approve", segment(kyc_id));
        self.api
            .post(&path, &serde_json::json!({}), "Failed to approve KYC")
            .await
    }

    /// `POST /admin/kyc/{id}/reject`
    pub async fn reject_kyc(&self, kyc_id: &str, reason: &str) -> Result<KycRequest, ClientError> {
        let path = format!("/admin/kyc/{}/reject", segment(kyc_id));
        let request = RejectRequest {
            reason: reason.to_string(),
        };
        self.api.post(&path, &request, "Failed to reject KYC").await
    }

    // -------------------------------------------------------------------------
    // Users & plans
    // -------------------------------------------------------------------------

    /// `GET /admin/users`
    pub async fn users(&self) -> Result<Vec<AdminUserRow>, ClientError> {
        let users: Option<Vec<AdminUserRow>> =
            self.api.get("/admin/users", "Failed to fetch users").await?;
        Ok(users.unwrap_or_default())
    }

    /// `POST /admin/plans`
    pub async fn create_plan(&self, plan: &PlanInput) -> Result<InvestmentPlan, ClientError> {
        self.api
            .post("/admin/plans", plan, "Failed to create plan")
            .await
    }

    /// `PUT /admin/plans/{id}`
    pub async fn update_plan(
        &self,
        plan_id: &str,
        plan: &PlanInput,
    ) -> Result<InvestmentPlan, ClientError> {
        let path = format!("/admin/plans/{}", segment(plan_id));
        self.api.put(&path, plan, "Failed to update plan").await
    }

    /// `DELETE /admin/plans/{id}`
    pub async fn delete_plan(&self, plan_id: &str) -> Result<(), ClientError> {
        let path = format!("/admin/plans/{}", segment(plan_id));
        let _: IgnoredAny = self.api.delete(&path, "Failed to delete plan").await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // ROI, settings, notifications
    // -------------------------------------------------------------------------

    /// `POST /admin/roi/distribute`. The backend guards against double
    /// distribution; calling twice is safe.
    pub async fn distribute_roi(&self) -> Result<RoiDistributionResult, ClientError> {
        let result: Option<RoiDistributionResult> = self
            .api
            .post(
                "/admin/roi/distribute",
                &serde_json::json!({}),
                "Failed to distribute ROI",
            )
            .await?;
        let result = result.unwrap_or_default();
        info!(
            processed = result.processed,
            total = result.total_distributed,
            "ROI distribution triggered"
        );
        Ok(result)
    }

    /// `GET /admin/settings`
    pub async fn settings(&self) -> Result<TenantSettings, ClientError> {
        self.api
            .get("/admin/settings", "Failed to fetch settings")
            .await
    }

    /// `PUT /admin/settings`
    pub async fn update_settings(
        &self,
        settings: &TenantSettings,
    ) -> Result<TenantSettings, ClientError> {
        self.api
            .put("/admin/settings", settings, "Failed to update settings")
            .await
    }

    /// `POST /admin/notifications`
    pub async fn broadcast_notification(
        &self,
        notification: &BroadcastNotification,
    ) -> Result<(), ClientError> {
        let _: IgnoredAny = self
            .api
            .post(
                "/admin/notifications",
                notification,
                "Failed to send notification",
            )
            .await?;
        Ok(())
    }
}
