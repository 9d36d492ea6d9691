// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Account creation endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Request body for account creation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Initial balance in whole hbars, funded by the operator.
    #[serde(default)]
    pub initial_balance: i64,
    /// Optional account memo.
    pub memo: Option<String>,
}

/// Response for account creation.
///
/// The private key is generated server-side and returned to the caller
/// exactly once; the service keeps no copy.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateAccountResponse {
    pub account_id: String,
    pub public_key: String,
    pub private_key: String,
}

/// Create a new Hedera account with a fresh ed25519 key pair.
#[utoipa::path(
    post,
    path = "/create-account",
    tag = "Ledger",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account created", body = CreateAccountResponse),
        (status = 400, description = "Invalid request"),
        (status = 502, description = "Hedera network unavailable")
    )
)]
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<CreateAccountResponse>, ApiError> {
    if request.initial_balance < 0 {
        return Err(ApiError::bad_request("initial_balance must not be negative"));
    }

    let created = state
        .ledger()
        .create_account(request.initial_balance, request.memo)
        .await?;

    tracing::info!(account_id = %created.account_id, "created account");

    Ok(Json(CreateAccountResponse {
        account_id: created.account_id,
        public_key: created.public_key,
        private_key: created.private_key,
    }))
}
