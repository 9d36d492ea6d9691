// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Marketplace listing repository.
//!
//! One listing per created token, keyed by the Hedera token id. The
//! `available` counter tracks unsold supply and is decremented by the
//! investment flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{DocumentStorage, StorageError, StorageResult};

/// Marketplace listing stored as `listings/{token_id}.json`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingDocument {
    /// Hedera token id (`0.0.x`).
    pub token_id: String,
    /// Asset name (also the token name on the ledger).
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Free-form asset description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Asset category (e.g. real estate, art).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Token decimals.
    pub decimals: u32,
    /// Supply minted at creation.
    pub initial_supply: u64,
    /// Maximum supply (0 means unbounded).
    pub max_supply: u64,
    /// Units still available for purchase.
    pub available: u64,
    /// Price per unit, in the marketplace's display currency.
    pub price: f64,
    /// Auth0 subject of the creator, when the token was created by an
    /// authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_auth0_sub: Option<String>,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}

/// Repository for marketplace listings.
pub struct ListingRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> ListingRepository<'a> {
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Check if a listing exists for a token.
    pub fn exists(&self, token_id: &str) -> bool {
        self.storage.exists(self.storage.paths().listing(token_id))
    }

    /// Get a listing by token id.
    pub fn get(&self, token_id: &str) -> StorageResult<ListingDocument> {
        let path = self.storage.paths().listing(token_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Listing {token_id}")));
        }
        self.storage.read_json(path)
    }

    /// Insert a new listing.
    pub fn insert(&self, listing: &ListingDocument) -> StorageResult<()> {
        if self.exists(&listing.token_id) {
            return Err(StorageError::AlreadyExists(format!(
                "Listing {}",
                listing.token_id
            )));
        }
        self.storage
            .write_json(self.storage.paths().listing(&listing.token_id), listing)
    }

    /// Update an existing listing.
    pub fn update(&self, listing: &ListingDocument) -> StorageResult<()> {
        if !self.exists(&listing.token_id) {
            return Err(StorageError::NotFound(format!(
                "Listing {}",
                listing.token_id
            )));
        }
        self.storage
            .write_json(self.storage.paths().listing(&listing.token_id), listing)
    }

    /// List all listings.
    pub fn list_all(&self) -> StorageResult<Vec<ListingDocument>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().listings_dir(), "json")?;
        let mut listings = Vec::new();
        for id in &ids {
            if let Ok(listing) = self.get(id) {
                listings.push(listing);
            }
        }
        Ok(listings)
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

    fn test_listing(token_id: &str) -> ListingDocument {
        ListingDocument {
            token_id: token_id.to_string(),
            name: "Harbor View Apartments".to_string(),
            symbol: "HVA".to_string(),
            description: Some("Fractional shares in a rental property".to_string()),
            category: Some("real-estate".to_string()),
            decimals: 0,
            initial_supply: 10_000,
            max_supply: 10_000,
            available: 10_000,
            price: 25.0,
            creator_auth0_sub: Some("auth0|creator".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_get_listing() {
        let (_temp, storage) = setup();
        let repo = ListingRepository::new(&storage);

        repo.insert(&test_listing("0.0.1001")).unwrap();

        let loaded = repo.get("0.0.1001").unwrap();
        assert_eq!(loaded.symbol, "HVA");
        assert_eq!(loaded.available, 10_000);
    }

    #[test]
    fn duplicate_token_id_rejected() {
        let (_temp, storage) = setup();
        let repo = ListingRepository::new(&storage);

        repo.insert(&test_listing("0.0.1001")).unwrap();
        let result = repo.insert(&test_listing("0.0.1001"));
        assert!(matches!(result, Err(StorageError::AlreadyExists(_))));
    }

    #[test]
    fn update_changes_available() {
        let (_temp, storage) = setup();
        let repo = ListingRepository::new(&storage);

        let mut listing = test_listing("0.0.1001");
        repo.insert(&listing).unwrap();

        listing.available -= 250;
        repo.update(&listing).unwrap();

        let loaded = repo.get("0.0.1001").unwrap();
        assert_eq!(loaded.available, 9_750);
    }

    #[test]
    fn update_missing_listing_fails() {
        let (_temp, storage) = setup();
        let repo = ListingRepository::new(&storage);

        let result = repo.update(&test_listing("0.0.9999"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn list_all_returns_every_listing() {
        let (_temp, storage) = setup();
        let repo = ListingRepository::new(&storage);

        repo.insert(&test_listing("0.0.1")).unwrap();
        repo.insert(&test_listing("0.0.2")).unwrap();
        repo.insert(&test_listing("0.0.3")).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 3);
    }
}
