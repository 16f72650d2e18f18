// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Loading/error/data tri-state of a view.

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    /// Human-readable message shown inline with a retry action.
    Failed(String),
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ClientError>> for LoadState<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}
