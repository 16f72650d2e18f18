// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Route guard.
//!
//! Gates a subtree on "a session user exists" and, optionally, "the user's
//! role is in the allowed set". This is a UX convenience only: the backend
//! enforces authorization on every endpoint and a passing guard grants
//! nothing by itself.

use super::roles::Role;
use crate::models::SessionUser;
use crate::routes::LANDING_PATH;

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Session/role gate for one route.
///
/// An empty allowed set means any authenticated user may pass. Roles are
/// compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGuard {
    allowed_roles: Vec<String>,
}

impl RouteGuard {
    /// Guard that only requires a session.
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Guard restricted to the given raw role names.
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_roles: roles
                .into_iter()
                .map(|r| r.as_ref().trim().to_uppercase())
                .collect(),
        }
    }

    pub fn for_roles(roles: &[Role]) -> Self {
        Self::with_roles(roles.iter().map(Role::as_str))
    }

    pub fn allowed_roles(&self) -> &[String] {
        &self.allowed_roles
    }

    pub fn check(&self, user: Option<&SessionUser>) -> GuardDecision {
        let Some(user) = user else {
            return GuardDecision::Redirect(LANDING_PATH);
        };
        if self.allowed_roles.is_empty() {
            return GuardDecision::Allow;
        }
        let role = user.role_name.to_uppercase();
        if self.allowed_roles.iter().any(|allowed| *allowed == role) {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(LANDING_PATH)
        }
    }
}
