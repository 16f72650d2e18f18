// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared helpers: an in-process mock backend on an ephemeral port.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use tenant_invest_client::{
    auth::{MemoryStorage, SessionStore},
    http::ApiClient,
    PlatformClient,
};

pub const TENANT: &str = "acme";

/// Serve `router` on 127.0.0.1 and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serve `routes` under `/api` and return a client pointing at it.
pub async fn spawn_backend(routes: Router) -> (PlatformClient, Arc<MemoryStorage>) {
    let base = spawn_server(Router::new().nest("/api", routes)).await;
    let storage = Arc::new(MemoryStorage::new());
    let session = SessionStore::new(storage.clone());
    let api = ApiClient::new(format!("{base}/api"), TENANT, session).unwrap();
    (PlatformClient::new(api), storage)
}

pub fn user_json(role: &str) -> Value {
    json!({
        "id": "u1",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "role": role,
        "kycStatus": "APPROVED",
        "referralCode": "ADA42"
    })
}

pub fn transaction_json(id: &str, kind: &str, status: &str, amount: f64) -> Value {
    json!({
        "id": id,
        "type": kind,
        "amount": amount,
        "status": status,
        "createdAt": "2026-03-01T10:00:00Z"
    })
}
