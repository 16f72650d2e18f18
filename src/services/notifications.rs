// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Notification inbox.

use serde::de::IgnoredAny;

use crate::{
    error::ClientError,
    http::{segment, ApiClient},
    models::NotificationList,
};

#[derive(Debug, Clone)]
pub struct NotificationService {
    api: ApiClient,
}

impl NotificationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /notifications`. The unread count is recomputed when the backend
    /// omits it.
    pub async fn list(&self) -> Result<NotificationList, ClientError> {
        let mut list: NotificationList = self
            .api
            .get("/notifications", "Failed to fetch notifications")
            .await?;
        if list.unread_count == 0 {
            list.unread_count = list.notifications.iter().filter(|n| !n.read).count() as u32;
        }
        Ok(list)
    }

    /// `PATCH /notifications/{id}/read`
    pub async fn mark_read(&self, notification_id: &str) -> Result<(), ClientError> {
        let path = format!("/notifications/{}/read", segment(notification_id));
        let _: IgnoredAny = self
            .api
            .patch(&path, &serde_json::json!({}), "Failed to mark notification as read")
            .await?;
        Ok(())
    }

    /// `PATCH /notifications/read-all`
    pub async fn mark_all_read(&self) -> Result<(), ClientError> {
        let _: IgnoredAny = self
            .api
            .patch(
                "/notifications/read-all",
                &serde_json::json!({}),
                "Failed to mark notifications as read",
            )
            .await?;
        Ok(())
    }
}
