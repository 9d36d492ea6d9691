// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Append-only log of identity-sync failures.
//!
//! When the lazy account-creation flow fails partway (funding transfer
//! rejected, alias lookup failed), the failure is recorded here so an
//! operator can reconcile the user's on-ledger state later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DocumentStorage;

/// A single recorded sync failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncFailure {
    /// When the failure occurred.
    pub timestamp: DateTime<Utc>,
    /// Auth0 subject of the user being synced, if known.
    pub auth0_sub: Option<String>,
    /// Stage of the sync flow that failed (e.g. `fund_alias`, `alias_lookup`).
    pub stage: String,
    /// Underlying error message.
    pub message: String,
}

impl SyncFailure {
    pub fn new(auth0_sub: Option<String>, stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            auth0_sub,
            stage: stage.into(),
            message: message.into(),
        }
    }
}

/// Writer for the sync failure log (JSONL, one failure per line).
pub struct SyncLog<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> SyncLog<'a> {
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Append a failure record.
    ///
    /// Logging must never mask the original error, so problems writing
    /// the log itself are reported via tracing and swallowed.
    pub fn record(&self, failure: &SyncFailure) {
        let path = self.storage.paths().sync_failures_file();
        match serde_json::to_string(failure) {
            Ok(line) => {
                if let Err(e) = self.storage.append_line(&path, &line) {
                    tracing::warn!("Failed to append sync failure record: {e}");
                }
            }
            Err(e) => {
                tracing::warn!("Failed to serialize sync failure record: {e}");
            }
        }
    }
}
