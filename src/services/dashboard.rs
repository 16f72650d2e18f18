// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-role dashboard aggregates.
//!
//! Each dashboard is one consolidated payload fetched on mount; every
//! collection and counter in it defaults when the backend leaves it out.

use crate::{
    error::ClientError,
    http::ApiClient,
    models::{AdminDashboard, InvestorDashboard, SuperAdminDashboard},
};

const LOAD_FAILED: &str = "Failed to load dashboard";

#[derive(Debug, Clone)]
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /dashboard/investor`
    pub async fn investor(&self) -> Result<InvestorDashboard, ClientError> {
        let dashboard: Option<InvestorDashboard> =
            self.api.get("/dashboard/investor", LOAD_FAILED).await?;
        Ok(dashboard.unwrap_or_default())
    }

    /// `GET /dashboard/admin`
    pub async fn admin(&self) -> Result<AdminDashboard, ClientError> {
        let dashboard: Option<AdminDashboard> =
            self.api.get("/dashboard/admin", LOAD_FAILED).await?;
        Ok(dashboard.unwrap_or_default())
    }

    /// `GET /dashboard/super-admin`
    pub async fn super_admin(&self) -> Result<SuperAdminDashboard, ClientError> {
        let dashboard: Option<SuperAdminDashboard> =
            self.api.get("/dashboard/super-admin", LOAD_FAILED).await?;
        Ok(dashboard.unwrap_or_default())
    }
}
