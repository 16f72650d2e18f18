// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Everything a front end needs, built once at startup.

use std::sync::Arc;

use crate::{
    auth::{FileStorage, SessionStorage, SessionStore},
    config::ClientConfig,
    error::ClientError,
    http::ApiClient,
    providers::{InsightClient, MarketDataClient},
    services::PlatformClient,
};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub session: SessionStore,
    pub platform: PlatformClient,
    pub market: MarketDataClient,
    pub insight: InsightClient,
}

impl AppContext {
    /// Build the context over the given session backend.
    pub fn new(config: &ClientConfig, storage: Arc<dyn SessionStorage>) -> Result<Self, ClientError> {
        let session = SessionStore::new(storage);
        let api = ApiClient::from_config(config, session.clone())?;
        Ok(Self {
            session,
            platform: PlatformClient::new(api),
            market: MarketDataClient::new(&config.market_data_url),
            insight: InsightClient::new(
                &config.insight_api_url,
                &config.insight_model,
                config.insight_api_key.clone(),
            ),
        })
    }

    /// Context persisting its session in `config.session_file`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(config, Arc::new(FileStorage::new(&config.session_file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStorage;

    #[test]
    fn context_shares_one_session() {
        let ctx = AppContext::new(&ClientConfig::default(), Arc::new(MemoryStorage::new())).unwrap();
        assert_eq!(ctx.platform.api().tenant_slug(), "default");
        assert!(!ctx.session.is_authenticated());
        assert!(!ctx.insight.is_configured());
    }
}
