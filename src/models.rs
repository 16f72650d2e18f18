// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures exchanged with the platform backend.
//! All types mirror backend JSON (camelCase on the wire) and are transient:
//! the backend is the source of truth and the client holds re-fetchable
//! copies only.
//!
//! Optional fields are defaulted explicitly with `#[serde(default)]`, and an
//! explicit `null` reads the same as a missing field, so callers never branch
//! on absent collections or counters.
//!
//! ## Model Categories
//!
//! - **Session**: the authenticated user and login payloads
//! - **Wallet & Transactions**: balances, ledger rows, deposit/withdraw requests
//! - **Investments**: plans, positions, copy trading
//! - **KYC**: identity verification requests
//! - **Notifications & Referrals**
//! - **Administration**: tenant settings, tenants, ROI distribution
//! - **Dashboards**: per-role aggregate payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::Role;

/// Missing and `null` both read as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Session
// =============================================================================

/// KYC adjudication state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    #[default]
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
}

/// The authenticated user as last reported by the backend.
///
/// `role` is kept as the raw wire string; [`SessionUser::role`] parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kyc_status: KycStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl SessionUser {
    pub fn role(&self) -> Option<Role> {
        Role::from_str(&self.role_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// Response to login and registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUser,
}

/// `GET /auth/me` answers either `{ "user": {...} }` or the bare user.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum MeResponse {
    Wrapped { user: SessionUser },
    Bare(SessionUser),
}

impl From<MeResponse> for SessionUser {
    fn from(value: MeResponse) -> Self {
        match value {
            MeResponse::Wrapped { user } | MeResponse::Bare(user) => user,
        }
    }
}

// =============================================================================
// Wallet & Transactions
// =============================================================================

fn default_currency() -> String {
    "USD".to_string()
}

fn null_as_currency<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_currency))
}

/// Read-only wallet snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_invested: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_earned: f64,
    #[serde(default = "default_currency", deserialize_with = "null_as_currency")]
    pub currency: String,
}

impl Default for Wallet {
    fn default() -> Self {
        Self {
            balance: 0.0,
            total_invested: 0.0,
            total_earned: 0.0,
            currency: default_currency(),
        }
    }
}

/// Deposit instructions for one crypto asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAddress {
    pub crypto: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    InvestmentDebit,
    RoiCredit,
    ReferralCredit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::InvestmentDebit => "INVESTMENT_DEBIT",
            TransactionType::RoiCredit => "ROI_CREDIT",
            TransactionType::ReferralCredit => "REFERRAL_CREDIT",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "DEPOSIT" => Some(Self::Deposit),
            "WITHDRAWAL" => Some(Self::Withdrawal),
            "INVESTMENT_DEBIT" => Some(Self::InvestmentDebit),
            "ROI_CREDIT" => Some(Self::RoiCredit),
            "REFERRAL_CREDIT" => Some(Self::ReferralCredit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Approved => "APPROVED",
            TransactionStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// One ledger row. Status only ever changes through admin endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

/// Page of transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
}

/// Server-side filters for `GET /transactions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    pub kind: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub amount: f64,
    pub crypto: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub amount: f64,
    pub crypto: String,
    pub address: String,
}

// =============================================================================
// Investments
// =============================================================================

fn default_true() -> bool {
    true
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Admin-authored catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPlan {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub min_amount: f64,
    pub max_amount: f64,
    /// Return over the whole duration, in percent.
    pub roi: f64,
    /// Duration in days.
    pub duration: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

impl InvestmentPlan {
    /// Whether `amount` fits the plan bounds. The backend validates again.
    pub fn accepts(&self, amount: f64) -> bool {
        amount >= self.min_amount && amount <= self.max_amount
    }
}

/// Body of plan create/update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub name: String,
    pub min_amount: f64,
    pub max_amount: f64,
    pub roi: f64,
    pub duration: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    Active,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(alias = "_id")]
    pub id: String,
    pub plan_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    pub amount: f64,
    pub expected_return: f64,
    pub roi_percentage: f64,
    pub status: InvestmentStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Source investment when this one was created by copy trading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copied_from: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestmentRequest {
    pub plan_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyInvestmentRequest {
    pub amount: f64,
}

/// Another user's active investment offered for copy trading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyTradeOpportunity {
    pub investment_id: String,
    pub trader_name: String,
    pub plan_name: String,
    pub roi_percentage: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub copiers: u32,
    pub end_date: DateTime<Utc>,
}

// =============================================================================
// KYC
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub id_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub status: KycStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub country: String,
    pub id_type: String,
    pub id_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

/// `GET /kyc` body; `kyc` is absent or null before the first submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct KycEnvelope {
    #[serde(default)]
    pub kyc: Option<KycRequest>,
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unread_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastNotification {
    pub title: String,
    pub message: String,
    /// Single recipient; `None` sends to every user of the tenant.
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// =============================================================================
// Profile & Referrals
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kyc_status: KycStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Copy the profile fields the session caches onto `user`.
    pub fn apply_to(&self, user: &mut SessionUser) {
        user.name = self.name.clone();
        user.email = self.email.clone();
        user.kyc_status = self.kyc_status;
        if self.referral_code.is_some() {
            user.referral_code = self.referral_code.clone();
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub earned: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub referral_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_referrals: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_earned: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub referrals: Vec<Referral>,
}

// =============================================================================
// Administration
// =============================================================================

/// Reason attached to a rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRow {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kyc_status: KycStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiDistributionResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub processed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_distributed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_deposit: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_withdrawal: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub referral_bonus_percent: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_addresses: Vec<PaymentAddress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    pub name: String,
    pub slug: String,
    pub admin_email: String,
    pub admin_name: String,
    pub admin_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantStatusRequest {
    pub active: bool,
}

// =============================================================================
// Dashboards
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorDashboard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub wallet: Wallet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_investments: Vec<Investment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plans: Vec<InvestmentPlan>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kyc_status: KycStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unread_notifications: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub referral_earnings: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_deposits: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_withdrawals: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_invested: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_transactions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_kyc: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_investments: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: AdminStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_kyc: Vec<KycRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperAdminDashboard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tenants: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_tenants: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_volume: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenants: Vec<Tenant>,
}

// =============================================================================
// Market Data
// =============================================================================

/// One row of the landing page ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAsset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_change_percentage_24h: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_user_defaults_kyc_and_accepts_mongo_id() {
        let user: SessionUser = serde_json::from_value(json!({
            "_id": "u1",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "tenant_admin"
        }))
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.kyc_status, KycStatus::NotSubmitted);
        assert_eq!(user.role(), Some(Role::TenantAdmin));
    }

    #[test]
    fn me_response_accepts_both_shapes() {
        let wrapped: MeResponse = serde_json::from_value(json!({
            "user": {"id": "u1", "name": "A", "email": "a@x", "role": "INVESTOR"}
        }))
        .unwrap();
        let bare: MeResponse = serde_json::from_value(json!({
            "id": "u1", "name": "A", "email": "a@x", "role": "INVESTOR"
        }))
        .unwrap();
        assert_eq!(SessionUser::from(wrapped), SessionUser::from(bare));
    }

    #[test]
    fn dashboard_backfills_missing_fields() {
        let dashboard: InvestorDashboard = serde_json::from_value(json!({})).unwrap();
        assert_eq!(dashboard.wallet.balance, 0.0);
        assert_eq!(dashboard.wallet.currency, "USD");
        assert!(dashboard.recent_transactions.is_empty());
        assert!(dashboard.active_investments.is_empty());
        assert_eq!(dashboard.unread_notifications, 0);
    }

    #[test]
    fn transaction_uses_wire_names() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "t1",
            "type": "ROI_CREDIT",
            "amount": 12.5,
            "status": "APPROVED",
            "createdAt": "2026-01-02T03:04:05Z",
            "txHash": "0xabc"
        }))
        .unwrap();
        assert_eq!(tx.kind, TransactionType::RoiCredit);
        assert_eq!(tx.status, TransactionStatus::Approved);
        assert_eq!(tx.tx_hash.as_deref(), Some("0xabc"));
    }

    #[test]
    fn plan_bounds() {
        let plan = InvestmentPlan {
            id: "p".into(),
            name: "Starter".into(),
            min_amount: 100.0,
            max_amount: 1000.0,
            roi: 12.0,
            duration: 30,
            features: vec![],
            active: true,
        };
        assert!(plan.accepts(100.0));
        assert!(plan.accepts(1000.0));
        assert!(!plan.accepts(99.99));
        assert!(!plan.accepts(1000.01));
    }

    #[test]
    fn profile_updates_cached_user() {
        let mut user = SessionUser {
            id: "u1".into(),
            name: "Old".into(),
            email: "old@x".into(),
            role_name: "INVESTOR".into(),
            kyc_status: KycStatus::NotSubmitted,
            referral_code: Some("REF1".into()),
            tenant_id: None,
        };
        let profile = UserProfile {
            id: "u1".into(),
            name: "New".into(),
            email: "new@x".into(),
            phone: None,
            country: None,
            role_name: "INVESTOR".into(),
            kyc_status: KycStatus::Pending,
            referral_code: None,
            created_at: None,
        };
        profile.apply_to(&mut user);
        assert_eq!(user.name, "New");
        assert_eq!(user.email, "new@x");
        assert_eq!(user.kyc_status, KycStatus::Pending);
        assert_eq!(user.referral_code.as_deref(), Some("REF1"));
    }

    #[test]
    fn type_and_status_parse_case_insensitively() {
        assert_eq!(TransactionType::parse("deposit"), Some(TransactionType::Deposit));
        assert_eq!(TransactionStatus::parse("Pending"), Some(TransactionStatus::Pending));
        assert_eq!(TransactionType::parse("bogus"), None);
    }

    #[test]
    fn explicit_null_reads_as_missing() {
        let dashboard: InvestorDashboard = serde_json::from_value(json!({
            "wallet": null,
            "recentTransactions": null,
            "unreadNotifications": null,
            "kycStatus": null
        }))
        .unwrap();
        assert_eq!(dashboard, InvestorDashboard::default());
        assert_eq!(dashboard.wallet.currency, "USD");

        let user: SessionUser = serde_json::from_value(json!({
            "id": "u1", "name": "A", "email": "a@x", "role": "INVESTOR", "kycStatus": null
        }))
        .unwrap();
        assert_eq!(user.kyc_status, KycStatus::NotSubmitted);

        let wallet: Wallet = serde_json::from_value(json!({
            "balance": null, "totalEarned": 3.5, "currency": null
        }))
        .unwrap();
        assert_eq!(wallet.balance, 0.0);
        assert_eq!(wallet.total_earned, 3.5);
        assert_eq!(wallet.currency, "USD");

        let plan: InvestmentPlan = serde_json::from_value(json!({
            "id": "p1", "name": "Gold", "minAmount": 10.0, "maxAmount": 100.0,
            "roi": 8.0, "duration": 30, "features": null, "active": null
        }))
        .unwrap();
        assert!(plan.features.is_empty());
        assert!(plan.active);
    }
}
