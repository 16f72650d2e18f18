// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! by the client. Configuration is loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `API_BASE_URL` | Base URL of the platform REST backend | `http://localhost:5000/api` |
//! | `TENANT_SLUG` | Fixed tenant identifier sent with every call | `default` |
//! | `SESSION_FILE` | File holding the persisted token and user | `.invest-session.json` |
//! | `MARKET_DATA_URL` | Public price listing provider | `https://api.coingecko.com/api/v3` |
//! | `INSIGHT_API_URL` | Generative-text provider | `https://generativelanguage.googleapis.com` |
//! | `INSIGHT_API_KEY` | API key for the generative-text provider | Optional |
//! | `INSIGHT_MODEL` | Model used for market sentiment | `gemini-1.5-flash` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::path::PathBuf;

use crate::error::ClientError;

pub const API_BASE_URL_ENV: &str = "API_BASE_URL";
pub const TENANT_SLUG_ENV: &str = "TENANT_SLUG";
pub const SESSION_FILE_ENV: &str = "SESSION_FILE";
pub const MARKET_DATA_URL_ENV: &str = "MARKET_DATA_URL";
pub const INSIGHT_API_URL_ENV: &str = "INSIGHT_API_URL";
pub const INSIGHT_API_KEY_ENV: &str = "INSIGHT_API_KEY";
pub const INSIGHT_MODEL_ENV: &str = "INSIGHT_MODEL";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TENANT_SLUG: &str = "default";
pub const DEFAULT_SESSION_FILE: &str = ".invest-session.json";
pub const DEFAULT_MARKET_DATA_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_INSIGHT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_INSIGHT_MODEL: &str = "gemini-1.5-flash";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Client configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub tenant_slug: String,
    pub session_file: PathBuf,
    pub market_data_url: String,
    pub insight_api_url: String,
    pub insight_api_key: Option<String>,
    pub insight_model: String,
    pub log_format: LogFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            tenant_slug: DEFAULT_TENANT_SLUG.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            market_data_url: DEFAULT_MARKET_DATA_URL.to_string(),
            insight_api_url: DEFAULT_INSIGHT_API_URL.to_string(),
            insight_api_key: None,
            insight_model: DEFAULT_INSIGHT_MODEL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        let config = Self {
            api_base_url: env_or_default(API_BASE_URL_ENV, DEFAULT_API_BASE_URL),
            tenant_slug: env_or_default(TENANT_SLUG_ENV, DEFAULT_TENANT_SLUG),
            session_file: PathBuf::from(env_or_default(SESSION_FILE_ENV, DEFAULT_SESSION_FILE)),
            market_data_url: env_or_default(MARKET_DATA_URL_ENV, DEFAULT_MARKET_DATA_URL),
            insight_api_url: env_or_default(INSIGHT_API_URL_ENV, DEFAULT_INSIGHT_API_URL),
            insight_api_key: env_optional(INSIGHT_API_KEY_ENV),
            insight_model: env_or_default(INSIGHT_MODEL_ENV, DEFAULT_INSIGHT_MODEL),
            log_format: env_optional(LOG_FORMAT_ENV)
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject base URLs reqwest would fail on at request time.
    pub fn validate(&self) -> Result<(), ClientError> {
        for (name, value) in [
            (API_BASE_URL_ENV, &self.api_base_url),
            (MARKET_DATA_URL_ENV, &self.market_data_url),
            (INSIGHT_API_URL_ENV, &self.insight_api_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| ClientError::Config(format!("{name}={value}: {e}")))?;
        }
        if self.tenant_slug.trim().is_empty() {
            return Err(ClientError::Config(format!("{TENANT_SLUG_ENV} is empty")));
        }
        Ok(())
    }
}

fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}
