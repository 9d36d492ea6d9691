// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Shared application state.

use std::sync::Arc;

use crate::auth::Auth0Client;
use crate::ledger::{HederaHandle, MirrorClient};
use crate::storage::DocumentStorage;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    storage: DocumentStorage,
    ledger: Arc<HederaHandle>,
    mirror: MirrorClient,
    auth0: Auth0Client,
}

impl AppState {
    pub fn new(
        storage: DocumentStorage,
        ledger: HederaHandle,
        mirror: MirrorClient,
        auth0: Auth0Client,
    ) -> Self {
        Self {
            storage,
            ledger: Arc::new(ledger),
            mirror,
            auth0,
        }
    }

    /// Document storage (users, listings, portfolio).
    pub fn storage(&self) -> &DocumentStorage {
        &self.storage
    }

    /// Hedera consensus-node client.
    pub fn ledger(&self) -> &HederaHandle {
        &self.ledger
    }

    /// Mirror node REST client.
    pub fn mirror(&self) -> &MirrorClient {
        &self.mirror
    }

    /// Auth0 userinfo client.
    pub fn auth0(&self) -> &Auth0Client {
        &self.auth0
    }
}
