// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Platform-wide tenant management.

use tracing::info;

use crate::{
    error::ClientError,
    http::{segment, ApiClient},
    models::{CreateTenantRequest, Tenant, TenantStatusRequest},
};

#[derive(Debug, Clone)]
pub struct SuperAdminService {
    api: ApiClient,
}

impl SuperAdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /super-admin/tenants`
    pub async fn tenants(&self) -> Result<Vec<Tenant>, ClientError> {
        let tenants: Option<Vec<Tenant>> = self
            .api
            .get("/super-admin/tenants", "Failed to fetch tenants")
            .await?;
        Ok(tenants.unwrap_or_default())
    }

    /// `POST /super-admin/tenants`
    pub async fn create_tenant(&self, request: &CreateTenantRequest) -> Result<Tenant, ClientError> {
        let tenant: Tenant = self
            .api
            .post("/super-admin/tenants", request, "Failed to create tenant")
            .await?;
        info!(tenant_id = %tenant.id, slug = %tenant.slug, "tenant created");
        Ok(tenant)
    }

    /// `PATCH /super-admin/tenants/{id}/status`
    pub async fn set_tenant_active(&self, tenant_id: &str, active: bool) -> Result<Tenant, ClientError> {
        let path = format!("/super-admin/tenants/{}/status", segment(tenant_id));
        self.api
            .patch(&path, &TenantStatusRequest { active }, "Failed to update tenant")
            .await
    }
}
