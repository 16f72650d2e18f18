// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! View controllers: the state a front end binds to.
//!
//! - `state` - loading/error/data tri-state
//! - `scope` - view lifetimes and cancellable loads
//! - `filter` - client-side transaction filtering and sorting
//! - `dashboard` - per-role dashboards and the transaction history view

pub mod dashboard;
pub mod filter;
pub mod scope;
pub mod state;

pub use dashboard::{
    admin_dashboard, investor_dashboard, super_admin_dashboard, DashboardView,
    TransactionHistoryView,
};
pub use filter::{SortOrder, TransactionFilter};
pub use scope::{ViewHandle, ViewScope};
pub use state::LoadState;
