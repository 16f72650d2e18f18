// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Public market-data ticker (CoinGecko-compatible `/coins/markets`).
//!
//! The landing page ticker must always render, so every provider failure
//! resolves to [`fallback_assets`] instead of an error.

use reqwest::Client;
use tracing::{debug, warn};

use super::ProviderError;
use crate::models::MarketAsset;

/// Coins shown on the ticker, in display order.
pub const TRACKED_COINS: [&str; 6] = ["bitcoin", "ethereum", "tether", "binancecoin", "solana", "ripple"];

const VS_CURRENCY: &str = "usd";

#[derive(Debug, Clone)]
pub struct MarketDataClient {
    base_url: String,
    http: Client,
}

impl MarketDataClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn markets_url(&self) -> String {
        format!(
            "{}/coins/markets?vs_currency={VS_CURRENCY}&ids={}&order=market_cap_desc",
            self.base_url,
            TRACKED_COINS.join(",")
        )
    }

    /// Current prices, or the fixed fallback list on any failure.
    pub async fn fetch_prices(&self) -> Vec<MarketAsset> {
        match self.try_fetch().await {
            Ok(assets) if !assets.is_empty() => {
                debug!(count = assets.len(), "market data fetched");
                assets
            }
            Ok(_) => {
                warn!("market data provider returned no assets, using fallback");
                fallback_assets()
            }
            Err(e) => {
                warn!(error = %e, "market data unavailable, using fallback");
                fallback_assets()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<MarketAsset>, ProviderError> {
        let response = self
            .http
            .get(self.markets_url())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        response
            .json::<Vec<MarketAsset>>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

fn asset(id: &str, symbol: &str, name: &str, price: f64, change: f64) -> MarketAsset {
    MarketAsset {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        current_price: price,
        price_change_percentage_24h: change,
        image: None,
    }
}

/// Fixed list shown when the provider is unavailable.
pub fn fallback_assets() -> Vec<MarketAsset> {
    vec![
        asset("bitcoin", "btc", "Bitcoin", 67_250.0, 1.85),
        asset("ethereum", "eth", "Ethereum", 3_480.0, 2.12),
        asset("tether", "usdt", "Tether", 1.0, 0.01),
        asset("binancecoin", "bnb", "BNB", 585.0, -0.45),
        asset("solana", "sol", "Solana", 152.0, 3.4),
        asset("ripple", "xrp", "XRP", 0.52, -1.2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_covers_tracked_coins_in_order() {
        let ids: Vec<String> = fallback_assets().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, TRACKED_COINS);
    }

    #[test]
    fn markets_url_lists_tracked_coins() {
        let client = MarketDataClient::new("https://api.coingecko.com/api/v3/");
        let url = client.markets_url();
        assert!(url.starts_with("https://api.coingecko.com/api/v3/coins/markets?"));
        assert!(url.contains("ids=bitcoin,ethereum,tether,binancecoin,solana,ripple"));
    }

    #[tokio::test]
    async fn unreachable_provider_yields_fallback() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = MarketDataClient::new("http://127.0.0.1:9");
        assert!(matches!(client.try_fetch().await, Err(ProviderError::Request(_))));
        assert_eq!(client.fetch_prices().await, fallback_assets());
    }

    async fn serve(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn provider_failures_are_classified() {
        let router = axum::Router::new()
            .route(
                "/down/coins/markets",
                axum::routing::get(|| async { reqwest::StatusCode::SERVICE_UNAVAILABLE }),
            )
            .route(
                "/garbled/coins/markets",
                axum::routing::get(|| async { "not json" }),
            );
        let base = serve(router).await;

        let down = MarketDataClient::new(format!("{base}/down"));
        match down.try_fetch().await {
            Err(ProviderError::Status(status)) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE)
            }
            other => panic!("expected status error, got {other:?}"),
        }

        let garbled = MarketDataClient::new(format!("{base}/garbled"));
        assert!(matches!(
            garbled.try_fetch().await,
            Err(ProviderError::InvalidResponse(_))
        ));
    }
}
