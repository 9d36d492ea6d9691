// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Path constants and utilities for the document storage layout.

use std::path::{Path, PathBuf};

/// Base directory for all persistent document storage.
pub const DATA_ROOT: &str = "/data";

/// Storage path utilities for the document store.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all document data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== User Paths ==========

    /// Directory containing all user documents.
    pub fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    /// Path to a specific user document.
    pub fn user(&self, user_id: &str) -> PathBuf {
        self.users_dir().join(format!("{user_id}.json"))
    }

    // ========== Marketplace Listing Paths ==========

    /// Directory containing all marketplace listings.
    pub fn listings_dir(&self) -> PathBuf {
        self.root.join("listings")
    }

    /// Path to a specific listing document, keyed by token id.
    pub fn listing(&self, token_id: &str) -> PathBuf {
        self.listings_dir().join(format!("{token_id}.json"))
    }

    // ========== Portfolio Paths ==========

    /// Directory containing all portfolio holding rows.
    pub fn portfolio_dir(&self) -> PathBuf {
        self.root.join("portfolio")
    }

    /// Path to a specific holding row.
    pub fn holding(&self, holding_id: &str) -> PathBuf {
        self.portfolio_dir().join(format!("{holding_id}.json"))
    }

    // ========== Sync Log Paths ==========

    /// Directory containing identity-sync logs.
    pub fn sync_dir(&self) -> PathBuf {
        self.root.join("sync")
    }

    /// Path to the append-only sync failure log (JSONL format).
    pub fn sync_failures_file(&self) -> PathBuf {
        self.sync_dir().join("failures.jsonl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_use_data_root() {
        let paths = StoragePaths::default();
        assert_eq!(paths.root(), Path::new("/data"));
    }

    #[test]
    fn custom_root_for_testing() {
        let paths = StoragePaths::new("/tmp/test-data");
        assert_eq!(paths.root(), Path::new("/tmp/test-data"));
        assert_eq!(
            paths.user("u-123"),
            PathBuf::from("/tmp/test-data/users/u-123.json")
        );
    }

    #[test]
    fn listing_paths_are_keyed_by_token_id() {
        let paths = StoragePaths::default();
        assert_eq!(paths.listings_dir(), PathBuf::from("/data/listings"));
        assert_eq!(
            paths.listing("0.0.12345"),
            PathBuf::from("/data/listings/0.0.12345.json")
        );
    }

    #[test]
    fn portfolio_paths_are_correct() {
        let paths = StoragePaths::default();
        assert_eq!(paths.portfolio_dir(), PathBuf::from("/data/portfolio"));
        assert_eq!(
            paths.holding("h-789"),
            PathBuf::from("/data/portfolio/h-789.json")
        );
    }

    #[test]
    fn sync_paths_are_correct() {
        let paths = StoragePaths::default();
        assert_eq!(
            paths.sync_failures_file(),
            PathBuf::from("/data/sync/failures.jsonl")
        );
    }
}
