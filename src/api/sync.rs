// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Identity synchronization endpoint.
//!
//! Called by the frontend after every Auth0 login. Upserts the user
//! document and, when the user has no Hedera account yet, lazily
//! creates one via the alias auto-creation flow: fund the EVM-address
//! alias with a small transfer, wait for the network to materialize the
//! hollow account, then look up the real account id.

use std::time::Duration;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::Auth,
    error::ApiError,
    state::AppState,
    storage::{SyncFailure, SyncLog, UserDocument, UserRepository},
};

/// Hbars transferred to a fresh alias to trigger auto-creation.
const ALIAS_FUNDING_HBAR: i64 = 10;

/// How long to wait for the network to materialize a hollow account.
const ALIAS_SETTLE_WAIT: Duration = Duration::from_secs(5);

/// Request body for identity sync.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SyncUserRequest {
    /// Hedera account id the client already knows, if any.
    pub hedera_account_id: Option<String>,
    /// EVM wallet address for the lazy-creation path.
    pub wallet_address: Option<String>,
    /// Display name override.
    pub name: Option<String>,
    /// Email override.
    pub email: Option<String>,
}

/// Response for identity sync.
#[derive(Debug, Serialize, ToSchema)]
pub struct SyncUserResponse {
    pub user_id: String,
    pub auth0_sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hedera_account_id: Option<String>,
    /// True when this sync created the user document.
    pub created: bool,
}

/// How the Hedera account id for a sync was (or was not) resolved.
#[derive(Debug, PartialEq, Eq)]
pub enum AccountResolution {
    /// Caller supplied an id in the request.
    Supplied(String),
    /// The stored user document already has an id.
    Existing(String),
    /// No id anywhere, but a wallet address allows lazy creation.
    LazyCreate(String),
    /// Nothing to resolve from; the account id stays unset.
    Unresolved,
}

/// Decide where the account id for this sync comes from.
///
/// Priority: caller-supplied id, then the id on file, then lazy
/// creation from the wallet address.
pub fn resolve_account_id(
    supplied: Option<&str>,
    on_file: Option<&str>,
    wallet_address: Option<&str>,
) -> AccountResolution {
    if let Some(id) = supplied {
        return AccountResolution::Supplied(id.to_string());
    }
    if let Some(id) = on_file {
        return AccountResolution::Existing(id.to_string());
    }
    if let Some(address) = wallet_address {
        return AccountResolution::LazyCreate(address.to_string());
    }
    AccountResolution::Unresolved
}

/// Synchronize the authenticated Auth0 identity into the user store.
#[utoipa::path(
    post,
    path = "/sync-user",
    tag = "Users",
    request_body = SyncUserRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User synchronized", body = SyncUserResponse),
        (status = 401, description = "Missing or rejected bearer token"),
        (status = 500, description = "Account provisioning failed"),
        (status = 503, description = "Identity provider unreachable")
    )
)]
pub async fn sync_user(
    Auth(profile): Auth,
    State(state): State<AppState>,
    Json(request): Json<SyncUserRequest>,
) -> Result<Json<SyncUserResponse>, ApiError> {
    let repo = UserRepository::new(state.storage());
    let existing = repo.find_by_auth0_sub(&profile.sub)?;
    let created = existing.is_none();

    let wallet_address = request
        .wallet_address
        .clone()
        .or_else(|| existing.as_ref().and_then(|u| u.wallet_address.clone()));

    let resolution = resolve_account_id(
        request.hedera_account_id.as_deref(),
        existing
            .as_ref()
            .and_then(|u| u.hedera_account_id.as_deref()),
        wallet_address.as_deref(),
    );

    let hedera_account_id = match resolution {
        AccountResolution::Supplied(id) | AccountResolution::Existing(id) => Some(id),
        AccountResolution::LazyCreate(address) => {
            Some(provision_account(&state, &profile.sub, &address).await?)
        }
        AccountResolution::Unresolved => None,
    };

    let user = UserDocument {
        user_id: existing
            .as_ref()
            .map(|u| u.user_id.clone())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        auth0_sub: Some(profile.sub.clone()),
        name: request
            .name
            .or(profile.name)
            .or_else(|| existing.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default(),
        email: request
            .email
            .or(profile.email)
            .or_else(|| existing.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default(),
        wallet_address,
        hedera_account_id,
        hedera_public_key: existing
            .as_ref()
            .and_then(|u| u.hedera_public_key.clone()),
        kyc_proof: existing.as_ref().and_then(|u| u.kyc_proof.clone()),
        created_at: existing
            .as_ref()
            .map(|u| u.created_at)
            .unwrap_or_else(Utc::now),
        last_login_at: Some(Utc::now()),
    };
    repo.save(&user)?;

    Ok(Json(SyncUserResponse {
        user_id: user.user_id,
        auth0_sub: profile.sub,
        hedera_account_id: user.hedera_account_id,
        created,
    }))
}

/// Run the lazy account-creation flow for a wallet address.
///
/// Funds the alias, waits for the hollow account to settle, then looks
/// up its numeric id. A failed lookup falls back to the wallet address
/// itself; a failed transfer fails the sync.
async fn provision_account(
    state: &AppState,
    sub: &str,
    wallet_address: &str,
) -> Result<String, ApiError> {
    let log = SyncLog::new(state.storage());

    if let Err(e) = state
        .ledger()
        .fund_alias(wallet_address, ALIAS_FUNDING_HBAR)
        .await
    {
        log.record(&SyncFailure::new(
            Some(sub.to_string()),
            "fund_alias",
            e.to_string(),
        ));
        return Err(ApiError::internal(format!(
            "Account provisioning failed: {e}"
        )));
    }

    tokio::time::sleep(ALIAS_SETTLE_WAIT).await;

    match state.ledger().account_id_for_alias(wallet_address).await {
        Ok(id) => Ok(id),
        Err(e) => {
            log.record(&SyncFailure::new(
                Some(sub.to_string()),
                "alias_lookup",
                e.to_string(),
            ));
            tracing::warn!(
                wallet_address,
                "alias lookup failed, falling back to raw address: {e}"
            );
            Ok(wallet_address.to_string())
        }
    }
}
