// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP client wrapper for the platform backend.
//!
//! Every call gets the same header set: JSON content type, the fixed tenant
//! slug, and the bearer token from the session when one exists. Each call is
//! a single attempt with no retry, backoff, or timeout; failures come back as
//! [`ClientError`] carrying the backend's message or the caller's fallback.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::SessionStore;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Header carrying the tenant slug.
pub const TENANT_HEADER: &str = "x-tenant-slug";

/// Thin wrapper around `reqwest` bound to one backend and one tenant.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    tenant_slug: String,
    session: SessionStore,
    http: Client,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        tenant_slug: impl Into<String>,
        session: SessionStore,
    ) -> Result<Self, ClientError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tenant_slug: tenant_slug.into(),
            session,
            http,
        })
    }

    pub fn from_config(config: &ClientConfig, session: SessionStore) -> Result<Self, ClientError> {
        Self::new(&config.api_base_url, &config.tenant_slug, session)
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tenant_slug(&self) -> &str {
        &self.tenant_slug
    }

    /// Common headers. `override_token` wins over the session token.
    pub fn headers(&self, override_token: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(slug) = HeaderValue::from_str(&self.tenant_slug) {
            headers.insert(HeaderName::from_static(TENANT_HEADER), slug);
        }

        let token = override_token
            .map(str::to_string)
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.session.token());
        if let Some(token) = token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("session token is not a valid header value, sending anonymously"),
            }
        }
        headers
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ClientError> {
        self.execute(Method::GET, path, None, None, fallback).await
    }

    /// GET with an explicit token instead of the session one.
    pub async fn get_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        fallback: &str,
    ) -> Result<T, ClientError> {
        self.execute(Method::GET, path, None, Some(token), fallback).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body, fallback)?;
        self.execute(Method::POST, path, Some(body), None, fallback).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body, fallback)?;
        self.execute(Method::PUT, path, Some(body), None, fallback).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body, fallback)?;
        self.execute(Method::PATCH, path, Some(body), None, fallback).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ClientError> {
        self.execute(Method::DELETE, path, None, None, fallback).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        override_token: Option<&str>,
        fallback: &str,
    ) -> Result<T, ClientError> {
        debug!(method = %method, path, tenant = %self.tenant_slug, "backend request");

        let mut request = self
            .http
            .request(method.clone(), self.url(path))
            .headers(self.headers(override_token));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|source| {
            warn!(method = %method, path, error = %source, "backend unreachable");
            ClientError::Transport {
                message: fallback.to_string(),
                source,
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| ClientError::Transport {
            message: fallback.to_string(),
            source,
        })?;

        if !status.is_success() {
            let err = ClientError::from_response_body(status, &text, fallback);
            warn!(method = %method, path, status = %status, error = %err, "backend rejected request");
            return Err(err);
        }

        // 204 and empty bodies decode as JSON null.
        let raw = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(raw).map_err(|e| {
            warn!(method = %method, path, error = %e, "backend response did not match schema");
            ClientError::Decode {
                message: fallback.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B, fallback: &str) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Decode {
        message: fallback.to_string(),
        detail: format!("failed to encode request body: {e}"),
    })
}

/// Append URL-encoded query pairs to `path`, skipping `None` values.
pub fn with_query(path: &str, pairs: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("{path}?{}", serializer.finish())
    } else {
        path.to_string()
    }
}

/// Path percent-encode set plus the segment delimiters `/` and `%`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Percent-encode one path segment (ids come from the backend verbatim).
pub fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}
