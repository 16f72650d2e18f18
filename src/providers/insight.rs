// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! One-line market sentiment from a generative-text provider
//! (Gemini-compatible `generateContent`).
//!
//! Optional: without an API key, or on any failure, callers get
//! [`PLACEHOLDER_SENTIMENT`].

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::ProviderError;
use crate::models::MarketAsset;

pub const PLACEHOLDER_SENTIMENT: &str =
    "Market insight is unavailable right now. Check back shortly for an updated outlook.";

#[derive(Debug, Clone)]
pub struct InsightClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl InsightClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            http: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// A short sentence about the given assets, or the placeholder.
    pub async fn market_sentiment(&self, assets: &[MarketAsset]) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return PLACEHOLDER_SENTIMENT.to_string();
        };
        match self.generate(api_key, &build_prompt(assets)).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "market sentiment unavailable");
                PLACEHOLDER_SENTIMENT.to_string()
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(url)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        extract_text(body)
            .ok_or_else(|| ProviderError::InvalidResponse("empty completion".to_string()))
    }
}

fn extract_text(body: GenerateResponse) -> Option<String> {
    body.candidates
        .into_iter()
        .flat_map(|c| c.content.parts)
        .map(|p| p.text.trim().to_string())
        .find(|t| !t.is_empty())
}

fn build_prompt(assets: &[MarketAsset]) -> String {
    let lines: Vec<String> = assets
        .iter()
        .map(|a| {
            format!(
                "{} ({}): ${:.2}, {:+.2}% 24h",
                a.name,
                a.symbol.to_uppercase(),
                a.current_price,
                a.price_change_percentage_24h
            )
        })
        .collect();
    format!(
        "In one short sentence for retail investors, summarize today's crypto market sentiment \
         given these prices:\n{}",
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::market::fallback_assets;

    #[tokio::test]
    async fn missing_key_returns_placeholder() {
        let client = InsightClient::new("http://127.0.0.1:9", "model", None);
        assert!(!client.is_configured());
        assert_eq!(
            client.market_sentiment(&fallback_assets()).await,
            PLACEHOLDER_SENTIMENT
        );
    }

    #[tokio::test]
    async fn empty_completion_is_an_invalid_response() {
        let router = axum::Router::new().route(
            "/v1beta/models/{call}",
            axum::routing::post(|| async { axum::Json(json!({ "candidates": [] })) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = InsightClient::new(format!("http://{addr}"), "model", Some("key".into()));
        let err = client.generate("key", "prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
        assert_eq!(
            client.market_sentiment(&fallback_assets()).await,
            PLACEHOLDER_SENTIMENT
        );
    }

    #[tokio::test]
    async fn unreachable_provider_returns_placeholder() {
        let client = InsightClient::new("http://127.0.0.1:9", "model", Some("key".into()));
        assert!(matches!(
            client.generate("key", "prompt").await,
            Err(ProviderError::Request(_))
        ));
        assert_eq!(
            client.market_sentiment(&fallback_assets()).await,
            PLACEHOLDER_SENTIMENT
        );
    }

    #[test]
    fn prompt_mentions_every_asset() {
        let prompt = build_prompt(&fallback_assets());
        assert!(prompt.contains("Bitcoin (BTC): $67250.00, +1.85% 24h"));
        assert!(prompt.contains("XRP (XRP)"));
    }

    #[test]
    fn extract_text_skips_blank_parts() {
        let body: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "  " }, { "text": " Bullish. " }] } }
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(body).as_deref(), Some("Bullish."));
    }
}
