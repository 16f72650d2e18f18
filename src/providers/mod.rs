// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Third-party providers used by the landing page.
//!
//! Neither provider is allowed to break a view: both degrade to fixed
//! content instead of returning errors.

pub mod insight;
pub mod market;

use reqwest::StatusCode;

pub use insight::{InsightClient, PLACEHOLDER_SENTIMENT};
pub use market::{fallback_assets, MarketDataClient};

/// Why a provider call produced nothing usable. Logged, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned {0}")]
    Status(StatusCode),

    #[error("provider response was invalid: {0}")]
    InvalidResponse(String),
}
