// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client-side filtering and sorting of an already-fetched transaction list.
//!
//! Display only: the result is recomputed from scratch on every change and
//! never feeds back into server state.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::{Transaction, TransactionStatus, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::AmountDesc => "amount-desc",
            SortOrder::AmountAsc => "amount-asc",
        }
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortOrder::DateDesc => b.created_at.cmp(&a.created_at),
            SortOrder::DateAsc => a.created_at.cmp(&b.created_at),
            SortOrder::AmountDesc => b.amount.total_cmp(&a.amount),
            SortOrder::AmountAsc => a.amount.total_cmp(&b.amount),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date-desc" | "newest" => Ok(SortOrder::DateDesc),
            "date-asc" | "oldest" => Ok(SortOrder::DateAsc),
            "amount-desc" => Ok(SortOrder::AmountDesc),
            "amount-asc" => Ok(SortOrder::AmountAsc),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Display filter for a transaction table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    /// Case-insensitive match on id, note, crypto, user name and email.
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl TransactionFilter {
    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if self.kind.is_some_and(|k| k != tx.kind) {
            return false;
        }
        if self.status.is_some_and(|s| s != tx.status) {
            return false;
        }
        match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                [
                    Some(tx.id.as_str()),
                    tx.note.as_deref(),
                    tx.crypto.as_deref(),
                    tx.user_name.as_deref(),
                    tx.user_email.as_deref(),
                ]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }

    /// Matching rows in display order. Ties keep their fetched order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut rows: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tx(id: &str, kind: TransactionType, status: TransactionStatus, amount: f64, day: u32) -> Transaction {
        Transaction {
            id: id.into(),
            kind,
            amount,
            status,
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
            crypto: Some("USDT".into()),
            address: None,
            tx_hash: None,
            note: None,
            user_name: None,
            user_email: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("t1", TransactionType::Deposit, TransactionStatus::Approved, 10.0, 1),
            tx("t2", TransactionType::Deposit, TransactionStatus::Approved, 50.0, 2),
            tx("t3", TransactionType::Withdrawal, TransactionStatus::Pending, 20.0, 3),
            tx("t4", TransactionType::Withdrawal, TransactionStatus::Pending, 5.0, 4),
            tx("t5", TransactionType::RoiCredit, TransactionStatus::Rejected, 100.0, 5),
        ]
    }

    fn ids(rows: &[Transaction]) -> Vec<&str> {
        rows.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn filter_by_type_keeps_deposits() {
        let rows = TransactionFilter::default()
            .with_kind(TransactionType::Deposit)
            .apply(&sample());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|t| t.kind == TransactionType::Deposit));
    }

    #[test]
    fn filter_by_status_keeps_pending_withdrawals() {
        let rows = TransactionFilter::default()
            .with_status(TransactionStatus::Pending)
            .apply(&sample());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|t| t.kind == TransactionType::Withdrawal));
    }

    #[test]
    fn amount_desc_orders_largest_first() {
        let rows = TransactionFilter::default()
            .sorted_by(SortOrder::AmountDesc)
            .apply(&sample());
        let amounts: Vec<f64> = rows.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![100.0, 50.0, 20.0, 10.0, 5.0]);
    }

    #[test]
    fn default_sort_is_newest_first() {
        let rows = TransactionFilter::default().apply(&sample());
        assert_eq!(ids(&rows), vec!["t5", "t4", "t3", "t2", "t1"]);

        let rows = TransactionFilter::default()
            .sorted_by(SortOrder::DateAsc)
            .apply(&sample());
        assert_eq!(ids(&rows), vec!["t1", "t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn search_is_case_insensitive_and_blank_matches_all() {
        let mut rows = sample();
        rows[2].user_email = Some("Grace@Example.com".into());
        let found = TransactionFilter::default()
            .with_search("grace@")
            .apply(&rows);
        assert_eq!(ids(&found), vec!["t3"]);

        let all = TransactionFilter::default().with_search("   ").apply(&rows);
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn filters_combine() {
        let rows = TransactionFilter::default()
            .with_kind(TransactionType::Deposit)
            .with_status(TransactionStatus::Pending)
            .apply(&sample());
        assert!(rows.is_empty());
    }

    #[test]
    fn sort_order_parses_wire_names() {
        for order in [
            SortOrder::DateDesc,
            SortOrder::DateAsc,
            SortOrder::AmountDesc,
            SortOrder::AmountAsc,
        ] {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
