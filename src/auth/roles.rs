// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Platform roles and their landing routes.

use serde::{Deserialize, Serialize};

use crate::routes::{ADMIN_PATH, DASHBOARD_PATH, SUPER_ADMIN_PATH};

/// User roles known to the platform.
///
/// ## Role Hierarchy
///
/// - `SuperAdmin` - Operates the platform across tenants
/// - `TenantAdmin` - Administers a single tenant (approvals, plans, settings)
/// - `Investor` - End user holding a wallet and investments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Investor,
    TenantAdmin,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Investor, Role::TenantAdmin, Role::SuperAdmin];

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Investor => "INVESTOR",
            Role::TenantAdmin => "TENANT_ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Parse role from string (case-insensitive, otherwise exact).
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_uppercase().as_str() {
            "INVESTOR" => Some(Role::Investor),
            "TENANT_ADMIN" => Some(Role::TenantAdmin),
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    /// Default landing route after login.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::SuperAdmin => SUPER_ADMIN_PATH,
            Role::TenantAdmin => ADMIN_PATH,
            Role::Investor => DASHBOARD_PATH,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Investor
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Landing route for a raw role string.
///
/// Total: unknown or empty roles land on the investor dashboard.
pub fn redirect_path(role: &str) -> &'static str {
    Role::from_str(role)
        .map(|r| r.landing_path())
        .unwrap_or(DASHBOARD_PATH)
}
