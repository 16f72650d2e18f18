// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client-side route table.
//!
//! | Path | Access |
//! |------|--------|
//! | `/` | public |
//! | `/profile` | any session |
//! | `/dashboard`, `/referrals` | `INVESTOR` |
//! | `/admin`, `/admin/settings` | `TENANT_ADMIN` |
//! | `/super-admin` | `SUPER_ADMIN` |
//! | anything else | redirect to `/` |

use crate::auth::{GuardDecision, Role, RouteGuard};
use crate::models::SessionUser;

pub const LANDING_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_PATH: &str = "/admin";
pub const ADMIN_SETTINGS_PATH: &str = "/admin/settings";
pub const PROFILE_PATH: &str = "/profile";
pub const REFERRALS_PATH: &str = "/referrals";
pub const SUPER_ADMIN_PATH: &str = "/super-admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Dashboard,
    Admin,
    AdminSettings,
    Profile,
    Referrals,
    SuperAdmin,
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Landing,
        AppRoute::Dashboard,
        AppRoute::Admin,
        AppRoute::AdminSettings,
        AppRoute::Profile,
        AppRoute::Referrals,
        AppRoute::SuperAdmin,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Landing => LANDING_PATH,
            AppRoute::Dashboard => DASHBOARD_PATH,
            AppRoute::Admin => ADMIN_PATH,
            AppRoute::AdminSettings => ADMIN_SETTINGS_PATH,
            AppRoute::Profile => PROFILE_PATH,
            AppRoute::Referrals => REFERRALS_PATH,
            AppRoute::SuperAdmin => SUPER_ADMIN_PATH,
        }
    }

    /// Exact match on a known path; trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { LANDING_PATH } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Guard for this route, `None` when public.
    pub fn guard(&self) -> Option<RouteGuard> {
        match self {
            AppRoute::Landing => None,
            AppRoute::Profile => Some(RouteGuard::authenticated()),
            AppRoute::Dashboard | AppRoute::Referrals => {
                Some(RouteGuard::for_roles(&[Role::Investor]))
            }
            AppRoute::Admin | AppRoute::AdminSettings => {
                Some(RouteGuard::for_roles(&[Role::TenantAdmin]))
            }
            AppRoute::SuperAdmin => Some(RouteGuard::for_roles(&[Role::SuperAdmin])),
        }
    }
}

/// Result of resolving a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Redirect(&'static str),
}

/// Resolve `path` for `user`: unknown paths and failed guards redirect.
pub fn navigate(path: &str, user: Option<&SessionUser>) -> Navigation {
    let Some(route) = AppRoute::from_path(path) else {
        return Navigation::Redirect(LANDING_PATH);
    };
    match route.guard().map(|g| g.check(user)) {
        None | Some(GuardDecision::Allow) => Navigation::Render(route),
        Some(GuardDecision::Redirect(to)) => Navigation::Redirect(to),
    }
}
