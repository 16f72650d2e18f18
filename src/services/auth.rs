// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication endpoints and session boot.

use tracing::{info, warn};

use crate::{
    error::ClientError,
    http::ApiClient,
    models::{AuthResponse, LoginRequest, MeResponse, RegisterRequest, SessionUser},
};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const FETCH_USER_FAILED: &str = "Failed to fetch user";

#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST /auth/login`, then persist `{token, user}`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.api.post("/auth/login", &request, LOGIN_FAILED).await?;
        self.api.session().persist(&response.token, &response.user)?;
        info!(user_id = %response.user.id, role = %response.user.role_name, "logged in");
        Ok(response)
    }

    /// `POST /auth/register`, then persist `{token, user}`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .api
            .post("/auth/register", request, REGISTRATION_FAILED)
            .await?;
        self.api.session().persist(&response.token, &response.user)?;
        info!(user_id = %response.user.id, "registered");
        Ok(response)
    }

    /// `GET /auth/me` with the session token, or `token` when given.
    pub async fn current_user(&self, token: Option<&str>) -> Result<SessionUser, ClientError> {
        let me: MeResponse = match token {
            Some(token) => {
                self.api
                    .get_with_token("/auth/me", token, FETCH_USER_FAILED)
                    .await?
            }
            None => self.api.get("/auth/me", FETCH_USER_FAILED).await?,
        };
        Ok(me.into())
    }

    /// Fetch the user and overwrite the cached copy.
    pub async fn refresh_user(&self) -> Result<SessionUser, ClientError> {
        let user = self.current_user(None).await?;
        self.api.session().replace_user(&user)?;
        Ok(user)
    }

    /// Drop the local session. The backend keeps no server-side session.
    pub fn logout(&self) {
        self.api.session().clear();
        info!("logged out");
    }

    /// Boot-time session init.
    ///
    /// Reads the cached user and, when a token exists, refreshes it once from
    /// the backend. A 401/403 ends the session; any other failure keeps the
    /// cached copy.
    pub async fn boot(&self) -> Option<SessionUser> {
        let session = self.api.session();
        let cached = session.current_user();
        if session.token().is_none() {
            if cached.is_some() {
                session.clear();
            }
            return None;
        }

        match self.refresh_user().await {
            Ok(user) => Some(user),
            Err(e) if e.is_unauthorized() => {
                warn!(error = %e, "stored session rejected by backend");
                session.clear();
                None
            }
            Err(e) => {
                warn!(error = %e, "could not refresh user, using cached copy");
                cached
            }
        }
    }
}
