// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Market ticker and sentiment against mock providers.

mod common;

use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use tenant_invest_client::providers::{
    fallback_assets, InsightClient, MarketDataClient, PLACEHOLDER_SENTIMENT,
};

use common::spawn_server;

#[tokio::test]
async fn provider_error_yields_fallback_list() {
    let router = Router::new().route(
        "/coins/markets",
        get(|| async { (StatusCode::TOO_MANY_REQUESTS, "rate limited") }),
    );
    let base = spawn_server(router).await;

    let assets = MarketDataClient::new(base).fetch_prices().await;
    assert_eq!(assets, fallback_assets());
}

#[tokio::test]
async fn provider_garbage_yields_fallback_list() {
    let router = Router::new().route(
        "/coins/markets",
        get(|| async { Json(json!({ "status": "ok" })) }),
    );
    let base = spawn_server(router).await;

    let assets = MarketDataClient::new(base).fetch_prices().await;
    assert_eq!(assets, fallback_assets());
}

#[tokio::test]
async fn provider_prices_are_used_when_available() {
    let router = Router::new().route(
        "/coins/markets",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("vs_currency").map(String::as_str), Some("usd"));
            Json(json!([
                {
                    "id": "bitcoin",
                    "symbol": "btc",
                    "name": "Bitcoin",
                    "current_price": 70000.0,
                    "price_change_percentage_24h": -0.5,
                    "image": "https://img/btc.png"
                },
                {
                    "id": "ethereum",
                    "symbol": "eth",
                    "name": "Ethereum",
                    "current_price": 3500.0,
                    "price_change_percentage_24h": null
                }
            ]))
        }),
    );
    let base = spawn_server(router).await;

    let assets = MarketDataClient::new(format!("{base}/")).fetch_prices().await;
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].current_price, 70000.0);
    assert_eq!(assets[1].price_change_percentage_24h, 0.0);
}

async fn generate(Path(call): Path<String>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if call != "test-model:generateContent" {
        return (StatusCode::NOT_FOUND, Json(json!({})));
    }
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
    assert!(prompt.contains("BTC"));
    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "  Markets look calm.  " }] } }]
        })),
    )
}

#[tokio::test]
async fn sentiment_comes_from_provider() {
    let router = Router::new().route("/v1beta/models/{call}", post(generate));
    let base = spawn_server(router).await;

    let insight = InsightClient::new(base, "test-model", Some("k".into()));
    let text = insight.market_sentiment(&fallback_assets()).await;
    assert_eq!(text, "Markets look calm.");
}

#[tokio::test]
async fn sentiment_falls_back_on_provider_error() {
    let router = Router::new().route(
        "/v1beta/models/{call}",
        post(|| async { (StatusCode::FORBIDDEN, Json(json!({ "error": "bad key" }))) }),
    );
    let base = spawn_server(router).await;

    let insight = InsightClient::new(base, "test-model", Some("k".into()));
    assert_eq!(insight.market_sentiment(&fallback_assets()).await, PLACEHOLDER_SENTIMENT);
}

#[tokio::test]
async fn sentiment_without_key_skips_the_provider() {
    // Nothing listens here; a request would fail rather than hang.
    let insight = InsightClient::new("http://127.0.0.1:9", "test-model", None);
    assert!(!insight.is_configured());
    assert_eq!(insight.market_sentiment(&[]).await, PLACEHOLDER_SENTIMENT);
}
