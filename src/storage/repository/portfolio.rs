// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Portfolio repository.
//!
//! Each investment is its own row keyed by a fresh UUID. A user who buys
//! into the same token twice gets two rows; aggregation is left to the
//! client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{DocumentStorage, StorageError, StorageResult};

/// An investment row stored as `portfolio/{holding_id}.json`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HoldingDocument {
    /// Unique row id (UUID).
    pub holding_id: String,
    /// Auth0 subject of the investor.
    pub auth0_sub: String,
    /// Token that was purchased.
    pub token_id: String,
    /// Units purchased.
    pub amount: u64,
    /// Listing price at purchase time.
    pub price_per_unit: f64,
    /// Total cost of this purchase.
    pub total_cost: f64,
    /// Hedera transaction id of the token transfer, when one was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Row status; the invest flow writes `recorded`.
    pub status: String,
    /// When the purchase was recorded.
    pub created_at: DateTime<Utc>,
}

/// Repository for portfolio holdings.
pub struct PortfolioRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> PortfolioRepository<'a> {
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Get a holding by row id.
    pub fn get(&self, holding_id: &str) -> StorageResult<HoldingDocument> {
        let path = self.storage.paths().holding(holding_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Holding {holding_id}")));
        }
        self.storage.read_json(path)
    }

    /// Insert a new holding row.
    pub fn insert(&self, holding: &HoldingDocument) -> StorageResult<()> {
        let path = self.storage.paths().holding(&holding.holding_id);
        if self.storage.exists(&path) {
            return Err(StorageError::AlreadyExists(format!(
                "Holding {}",
                holding.holding_id
            )));
        }
        self.storage.write_json(path, holding)
    }

    /// List all holdings belonging to an Auth0 subject.
    pub fn list_by_sub(&self, auth0_sub: &str) -> StorageResult<Vec<HoldingDocument>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().portfolio_dir(), "json")?;
        let mut holdings = Vec::new();
        for id in &ids {
            if let Ok(holding) = self.get(id) {
                if holding.auth0_sub == auth0_sub {
                    holdings.push(holding);
                }
            }
        }
        Ok(holdings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DocumentStorage, StoragePaths};
    use tempfile::TempDir;

    fn setup() -> (TempDir, DocumentStorage) {
        let temp = TempDir::new().unwrap();
        let paths = StoragePaths::new(temp.path());
        let mut storage = DocumentStorage::new(paths);
        storage.initialize().unwrap();
        (temp, storage)
    }

    fn test_holding(id: &str, sub: &str, token_id: &str) -> HoldingDocument {
        HoldingDocument {
            holding_id: id.to_string(),
            auth0_sub: sub.to_string(),
            token_id: token_id.to_string(),
            amount: 100,
            price_per_unit: 25.0,
            total_cost: 2_500.0,
            transaction_id: Some("0.0.2@1700000000.000000001".to_string()),
            status: "recorded".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_get_holding() {
        let (_temp, storage) = setup();
        let repo = PortfolioRepository::new(&storage);

        repo.insert(&test_holding("h-1", "auth0|ada", "0.0.1001"))
            .unwrap();

        let loaded = repo.get("h-1").unwrap();
        assert_eq!(loaded.amount, 100);
        assert_eq!(loaded.status, "recorded");
    }

    #[test]
    fn same_user_and_token_gets_separate_rows() {
        let (_temp, storage) = setup();
        let repo = PortfolioRepository::new(&storage);

        repo.insert(&test_holding("h-1", "auth0|ada", "0.0.1001"))
            .unwrap();
        repo.insert(&test_holding("h-2", "auth0|ada", "0.0.1001"))
            .unwrap();

        let holdings = repo.list_by_sub("auth0|ada").unwrap();
        assert_eq!(holdings.len(), 2);
    }

    #[test]
    fn list_by_sub_filters_other_users() {
        let (_temp, storage) = setup();
        let repo = PortfolioRepository::new(&storage);

        repo.insert(&test_holding("h-1", "auth0|ada", "0.0.1001"))
            .unwrap();
        repo.insert(&test_holding("h-2", "auth0|bob", "0.0.1001"))
            .unwrap();
        repo.insert(&test_holding("h-3", "auth0|ada", "0.0.2002"))
            .unwrap();

        let ada = repo.list_by_sub("auth0|ada").unwrap();
        assert_eq!(ada.len(), 2);

        let carol = repo.list_by_sub("auth0|carol").unwrap();
        assert!(carol.is_empty());
    }
}
