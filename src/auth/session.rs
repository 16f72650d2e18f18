// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session store: the bearer token and the cached user.
//!
//! The cached user is only a copy of the last backend answer. Corrupted
//! entries are never surfaced as errors: they read as "no session" and both
//! keys are purged.

use std::sync::Arc;

use tracing::{debug, warn};

use super::storage::{MemoryStorage, SessionStorage, StorageResult};
use crate::models::SessionUser;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Values a JavaScript front end writes when it stringifies a missing value.
const NULLISH: [&str; 2] = ["undefined", "null"];

fn is_nullish(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NULLISH.contains(&trimmed)
}

/// Token + user persisted in a [`SessionStorage`].
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.token().is_some())
            .finish()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store the session returned by login or registration.
    pub fn persist(&self, token: &str, user: &SessionUser) -> StorageResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &user_json)?;
        debug!(user_id = %user.id, role = %user.role_name, "session persisted");
        Ok(())
    }

    /// Overwrite the cached user, keeping the token.
    pub fn replace_user(&self, user: &SessionUser) -> StorageResult<()> {
        let user_json = serde_json::to_string(user)?;
        self.storage.set(USER_KEY, &user_json)
    }

    /// Remove both entries.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "failed to clear session entry");
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !is_nullish(t))
    }

    /// The cached user, or `None` when absent or unreadable.
    ///
    /// Nullish literals and unparseable JSON purge the whole session.
    pub fn current_user(&self) -> Option<SessionUser> {
        let raw = self.storage.get(USER_KEY)?;
        if is_nullish(&raw) {
            debug!("cached user is nullish, purging session");
            self.clear();
            return None;
        }
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "cached user is corrupted, purging session");
                self.clear();
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}
