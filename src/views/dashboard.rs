// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Dashboard views: fetch one payload on mount, expose the tri-state, and
//! retry on demand by re-running the same fetch.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::task::JoinHandle;

use super::filter::TransactionFilter;
use super::scope::{ViewHandle, ViewScope};
use super::state::LoadState;
use crate::error::ClientError;
use crate::models::{AdminDashboard, InvestorDashboard, SuperAdminDashboard, Transaction, TransactionQuery};
use crate::services::PlatformClient;

type LoadFuture<T> = Pin<Box<dyn Future<Output = Result<T, ClientError>> + Send>>;
type Loader<T> = Arc<dyn Fn() -> LoadFuture<T> + Send + Sync>;

/// A mounted view bound to one fetch.
pub struct DashboardView<T> {
    handle: ViewHandle<T>,
    loader: Loader<T>,
}

impl<T> DashboardView<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Mount in `scope` and start the first load.
    pub fn mount<F, Fut>(scope: &ViewScope, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let loader: Loader<T> = Arc::new(move || -> LoadFuture<T> { Box::pin(loader()) });
        let view = Self {
            handle: scope.handle(),
            loader,
        };
        view.retry();
        view
    }

    /// Re-run the fetch. Also used for the initial load.
    pub fn retry(&self) -> JoinHandle<()> {
        self.handle.load((self.loader)())
    }

    pub fn state(&self) -> LoadState<T> {
        self.handle.snapshot()
    }
}

pub fn investor_dashboard(scope: &ViewScope, client: &PlatformClient) -> DashboardView<InvestorDashboard> {
    let service = client.dashboard();
    DashboardView::mount(scope, move || {
        let service = service.clone();
        async move { service.investor().await }
    })
}

pub fn admin_dashboard(scope: &ViewScope, client: &PlatformClient) -> DashboardView<AdminDashboard> {
    let service = client.dashboard();
    DashboardView::mount(scope, move || {
        let service = service.clone();
        async move { service.admin().await }
    })
}

pub fn super_admin_dashboard(
    scope: &ViewScope,
    client: &PlatformClient,
) -> DashboardView<SuperAdminDashboard> {
    let service = client.dashboard();
    DashboardView::mount(scope, move || {
        let service = service.clone();
        async move { service.super_admin().await }
    })
}

/// Transaction history view with a client-side display filter.
pub struct TransactionHistoryView {
    view: DashboardView<Vec<Transaction>>,
    pub filter: TransactionFilter,
}

impl TransactionHistoryView {
    pub fn mount(scope: &ViewScope, client: &PlatformClient) -> Self {
        let service = client.transactions();
        let view = DashboardView::mount(scope, move || {
            let service = service.clone();
            async move {
                let page = service.list(&TransactionQuery::default()).await?;
                Ok(page.transactions)
            }
        });
        Self {
            view,
            filter: TransactionFilter::default(),
        }
    }

    pub fn retry(&self) -> JoinHandle<()> {
        self.view.retry()
    }

    pub fn state(&self) -> LoadState<Vec<Transaction>> {
        self.view.state()
    }

    /// Rows to display under the current filter; empty until loaded.
    pub fn visible(&self) -> Vec<Transaction> {
        match self.view.state() {
            LoadState::Ready(rows) => self.filter.apply(&rows),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use reqwest::StatusCode;

    #[tokio::test]
    async fn retry_reruns_the_same_fetch() {
        let scope = ViewScope::new();
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let view = DashboardView::mount(&scope, move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(ClientError::api(StatusCode::SERVICE_UNAVAILABLE, "Failed to load dashboard"))
                } else {
                    Ok(n)
                }
            }
        });

        // The first load was spawned by mount; wait for it to settle.
        while view.state().is_loading() {
            tokio::task::yield_now().await;
        }
        assert_eq!(view.state(), LoadState::Failed("Failed to load dashboard".into()));

        view.retry().await.unwrap();
        assert_eq!(view.state(), LoadState::Ready(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
