// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Client-side session handling and role gating.
//!
//! ## Session Flow
//!
//! 1. `POST /auth/login` (or `/auth/register`) returns `{ token, user }`
//! 2. The [`SessionStore`] persists both under the `token` and `user` keys
//! 3. Every backend call carries `Authorization: Bearer <token>`
//! 4. At boot the cached user is refreshed once from `GET /auth/me`
//! 5. Logout removes both keys
//!
//! ## Access Control
//!
//! [`RouteGuard`] decides whether a view may render for the cached user.
//! It is a UX convenience only; the backend authorizes every request.

pub mod guard;
pub mod roles;
pub mod session;
pub mod storage;

pub use guard::{GuardDecision, RouteGuard};
pub use roles::{redirect_path, Role};
pub use session::SessionStore;
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
