// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! # Document Storage Module
//!
//! Persistent storage as one JSON file per record under the data root
//! (default `/data`, overridable with `DATA_DIR`).
//!
//! ## Storage Layout
//!
//! ```text
//! /data/
//!   users/
//!     {user_id}.json        # User profile and Hedera account linkage
//!   listings/
//!     {token_id}.json       # Marketplace listing per created token
//!   portfolio/
//!     {holding_id}.json     # Individual investment rows
//!   sync/
//!     failures.jsonl        # Append-only identity-sync failure log
//! ```
//!
//! Uniqueness beyond the file name (user email, Auth0 subject) is
//! enforced by repository scans, not by the filesystem.

pub mod documents;
pub mod paths;
pub mod repository;
pub mod sync_log;

pub use documents::{DocumentStorage, StorageError, StorageResult};
pub use paths::StoragePaths;
pub use repository::{
    HoldingDocument, ListingDocument, ListingRepository, PortfolioRepository, UserDocument,
    UserRepository,
};
pub use sync_log::{SyncFailure, SyncLog};
