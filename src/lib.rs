// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Tenant Invest Client - typed client for the multi-tenant investment platform
//!
//! This crate is the client side of the platform: it calls the remote REST
//! backend for wallets, transactions, investments, KYC, notifications and
//! referrals, keeps the session, and gates views by role. All bookkeeping
//! (ledger, ROI, KYC adjudication, approvals) happens in the backend.
//!
//! ## Modules
//!
//! - `http` - HTTP wrapper (tenant + bearer headers, error normalization)
//! - `services` - one service per backend resource
//! - `auth` - session store, roles, route guard
//! - `routes` - client route table
//! - `views` - dashboard state, cancellable loads, transaction filtering
//! - `providers` - market-data ticker and market sentiment

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod providers;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;

pub use error::ClientError;
pub use services::PlatformClient;
pub use state::AppContext;
