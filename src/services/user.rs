// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Profile, password and referral endpoints.

use serde::de::IgnoredAny;
use tracing::warn;

use crate::{
    error::ClientError,
    http::ApiClient,
    models::{ChangePasswordRequest, ReferralSummary, UpdateProfileRequest, UserProfile},
};

#[derive(Debug, Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /users/profile`
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.api.get("/users/profile", "Failed to fetch profile").await
    }

    /// `PUT /users/profile`, then refresh the cached session user.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserProfile, ClientError> {
        let profile: UserProfile = self
            .api
            .put("/users/profile", request, "Failed to update profile")
            .await?;

        let session = self.api.session();
        if let Some(mut user) = session.current_user() {
            profile.apply_to(&mut user);
            if let Err(e) = session.replace_user(&user) {
                warn!(error = %e, "profile updated but session cache was not");
            }
        }
        Ok(profile)
    }

    /// `POST /users/change-password`
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let _: IgnoredAny = self
            .api
            .post("/users/change-password", &request, "Failed to change password")
            .await?;
        Ok(())
    }

    /// `GET /users/referrals`
    pub async fn referrals(&self) -> Result<ReferralSummary, ClientError> {
        let mut summary: ReferralSummary = self
            .api
            .get("/users/referrals", "Failed to fetch referrals")
            .await?;
        if summary.total_referrals == 0 {
            summary.total_referrals = summary.referrals.len() as u32;
        }
        Ok(summary)
    }
}
