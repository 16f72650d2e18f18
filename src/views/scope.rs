// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! View lifetimes and cancellable loads.
//!
//! A [`ViewScope`] lives as long as the view that created it. Loads started
//! through a [`ViewHandle`] of that scope are aborted when the scope is
//! closed or dropped, and a load that finishes after teardown never writes
//! its result. Starting a new load on a handle supersedes the previous one,
//! so a slow first response cannot overwrite a retry.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::state::LoadState;
use crate::error::ClientError;

/// Lifetime of one mounted view.
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nested scope, closed together with its parent.
    pub fn child(&self) -> ViewScope {
        ViewScope {
            token: self.token.child_token(),
        }
    }

    /// Tear the view down, cancelling every load started from it.
    pub fn close(&self) {
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Await `fut` unless the scope closes first.
    pub async fn run<T, F>(&self, fut: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ClientError::Cancelled),
            result = fut => result,
        }
    }

    pub fn handle<T>(&self) -> ViewHandle<T> {
        ViewHandle {
            state: Arc::new(RwLock::new(LoadState::Loading)),
            token: self.token.clone(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Shared load state of one view, bound to a [`ViewScope`].
#[derive(Debug)]
pub struct ViewHandle<T> {
    state: Arc<RwLock<LoadState<T>>>,
    token: CancellationToken,
    generation: Arc<AtomicU64>,
}

impl<T> Clone for ViewHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            token: self.token.clone(),
            generation: self.generation.clone(),
        }
    }
}

impl<T> ViewHandle<T>
where
    T: Send + Sync + 'static,
{
    /// Reset to `Loading` and run `fut` in the background.
    ///
    /// The result is applied only if the scope is still open and no newer
    /// load was started on this handle in the meantime.
    pub fn load<F>(&self, fut: F) -> JoinHandle<()>
    where
        F: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.token.is_cancelled() {
            *self.state.write().unwrap_or_else(PoisonError::into_inner) = LoadState::Loading;
        }

        let state = self.state.clone();
        let token = self.token.clone();
        let current = self.generation.clone();

        tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("view closed, load aborted");
                    return;
                }
                result = fut => result,
            };

            let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
            if token.is_cancelled() || current.load(Ordering::SeqCst) != generation {
                debug!("stale load result discarded");
                return;
            }
            *guard = result.into();
        })
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl<T: Clone> ViewHandle<T> {
    /// Copy of the current state.
    pub fn snapshot(&self) -> LoadState<T> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use reqwest::StatusCode;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn completed_load_becomes_ready() {
        let scope = ViewScope::new();
        let handle = scope.handle::<u32>();
        handle.load(async { Ok(42) }).await.unwrap();
        assert_eq!(handle.snapshot(), LoadState::Ready(42));
    }

    #[tokio::test]
    async fn failed_load_keeps_message() {
        let scope = ViewScope::new();
        let handle = scope.handle::<u32>();
        handle
            .load(async { Err(ClientError::api(StatusCode::BAD_REQUEST, "Nope")) })
            .await
            .unwrap();
        assert_eq!(handle.snapshot(), LoadState::Failed("Nope".into()));
    }

    #[tokio::test]
    async fn dropped_scope_never_applies_late_result() {
        let scope = ViewScope::new();
        let handle = scope.handle::<u32>();
        let (tx, rx) = oneshot::channel::<u32>();

        let task = handle.load(async move { Ok(rx.await.unwrap_or(0)) });
        drop(scope);
        let _ = tx.send(7);
        task.await.unwrap();

        assert!(handle.is_closed());
        assert_eq!(handle.snapshot(), LoadState::Loading);
    }

    #[tokio::test]
    async fn retry_supersedes_slow_first_load() {
        let scope = ViewScope::new();
        let handle = scope.handle::<&'static str>();
        let (slow_tx, slow_rx) = oneshot::channel::<()>();

        let slow = handle.load(async move {
            let _ = slow_rx.await;
            Ok("stale")
        });
        handle.load(async { Ok("fresh") }).await.unwrap();
        let _ = slow_tx.send(());
        slow.await.unwrap();

        assert_eq!(handle.snapshot(), LoadState::Ready("fresh"));
    }

    #[tokio::test]
    async fn run_returns_cancelled_when_scope_closes() {
        let scope = ViewScope::new();
        let child = scope.child();
        scope.close();
        let result: Result<(), _> = child
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }
}
