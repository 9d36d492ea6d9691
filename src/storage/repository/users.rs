// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! User repository.
//!
//! Users are keyed by an internal UUID. Email and Auth0 subject are
//! unique across the collection; the uniqueness checks are full-directory
//! scans, which is acceptable at the expected record counts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{DocumentStorage, StorageError, StorageResult};

/// User profile stored as `users/{user_id}.json`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDocument {
    /// Internal user id (UUID).
    pub user_id: String,
    /// Auth0 subject claim, set once the user has authenticated via Auth0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth0_sub: Option<String>,
    /// Display name.
    pub name: String,
    /// Email address (unique across users).
    pub email: String,
    /// EVM-style wallet address supplied by the client, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    /// Hedera account id (`0.0.x`) once one is linked or created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hedera_account_id: Option<String>,
    /// Public key of the Hedera account, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hedera_public_key: Option<String>,
    /// Opaque KYC proof reference supplied at registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_proof: Option<String>,
    /// When the user record was created.
    pub created_at: DateTime<Utc>,
    /// Last time the user completed an identity sync.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Repository for user documents.
pub struct UserRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> UserRepository<'a> {
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Check if a user record exists.
    pub fn exists(&self, user_id: &str) -> bool {
        self.storage.exists(self.storage.paths().user(user_id))
    }

    /// Get a user by internal id.
    pub fn get(&self, user_id: &str) -> StorageResult<UserDocument> {
        let path = self.storage.paths().user(user_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("User {user_id}")));
        }
        self.storage.read_json(path)
    }

    /// Insert a new user.
    ///
    /// Fails with `AlreadyExists` when the id, email, or Auth0 subject
    /// is already taken.
    pub fn insert(&self, user: &UserDocument) -> StorageResult<()> {
        if self.exists(&user.user_id) {
            return Err(StorageError::AlreadyExists(format!(
                "User {}",
                user.user_id
            )));
        }
        if self.find_by_email(&user.email)?.is_some() {
            return Err(StorageError::AlreadyExists(format!(
                "User with email {}",
                user.email
            )));
        }
        if let Some(sub) = &user.auth0_sub {
            if self.find_by_auth0_sub(sub)?.is_some() {
                return Err(StorageError::AlreadyExists(format!("User with sub {sub}")));
            }
        }

        self.storage
            .write_json(self.storage.paths().user(&user.user_id), user)
    }

    /// Write a user record unconditionally (insert or overwrite).
    ///
    /// Used by the sync flow, which upserts by Auth0 subject.
    pub fn save(&self, user: &UserDocument) -> StorageResult<()> {
        self.storage
            .write_json(self.storage.paths().user(&user.user_id), user)
    }

    /// Find a user by Auth0 subject.
    pub fn find_by_auth0_sub(&self, sub: &str) -> StorageResult<Option<UserDocument>> {
        for user in self.list_all()? {
            if user.auth0_sub.as_deref() == Some(sub) {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    /// Find a user by email.
    pub fn find_by_email(&self, email: &str) -> StorageResult<Option<UserDocument>> {
        for user in self.list_all()? {
            if user.email == email {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    /// List all user records.
    pub fn list_all(&self) -> StorageResult<Vec<UserDocument>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().users_dir(), "json")?;
        let mut users = Vec::new();
        for id in &ids {
            if let Ok(user) = self.get(id) {
                users.push(user);
            }
        }
        Ok(users)
    }
}
