// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! One service per backend resource.
//!
//! Every operation performs exactly one request through [`ApiClient`] and
//! returns a typed, defaulted response or a [`crate::error::ClientError`]
//! whose message is the backend's `error` field or the operation's fallback.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod investments;
pub mod kyc;
pub mod notifications;
pub mod super_admin;
pub mod transactions;
pub mod user;
pub mod wallet;

pub use admin::AdminService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use investments::InvestmentService;
pub use kyc::KycService;
pub use notifications::NotificationService;
pub use super_admin::SuperAdminService;
pub use transactions::TransactionService;
pub use user::UserService;
pub use wallet::WalletService;

use crate::http::ApiClient;

/// All backend services sharing one [`ApiClient`].
#[derive(Debug, Clone)]
pub struct PlatformClient {
    api: ApiClient,
}

impl PlatformClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.api.clone())
    }

    pub fn wallet(&self) -> WalletService {
        WalletService::new(self.api.clone())
    }

    pub fn transactions(&self) -> TransactionService {
        TransactionService::new(self.api.clone())
    }

    pub fn investments(&self) -> InvestmentService {
        InvestmentService::new(self.api.clone())
    }

    pub fn kyc(&self) -> KycService {
        KycService::new(self.api.clone())
    }

    pub fn notifications(&self) -> NotificationService {
        NotificationService::new(self.api.clone())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.api.clone())
    }

    pub fn admin(&self) -> AdminService {
        AdminService::new(self.api.clone())
    }

    pub fn super_admin(&self) -> SuperAdminService {
        SuperAdminService::new(self.api.clone())
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(self.api.clone())
    }
}
