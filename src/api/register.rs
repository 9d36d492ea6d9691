// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! User registration endpoint.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    state::AppState,
    storage::{UserDocument, UserRepository},
};

/// Request body for registration.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    /// Wallet address supplied by the client, stored verbatim.
    pub address: String,
    pub email: String,
    /// Opaque KYC proof reference.
    pub kyc_proof: String,
    /// Auth0 subject, when registration happens post-login.
    pub auth0_id: Option<String>,
}

/// Response for registration.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user_id: String,
    pub hedera_account_id: String,
    pub public_key: String,
}

/// Register a new user and create their Hedera account.
///
/// The account starts with a zero balance and carries a memo naming
/// the user's email.
#[utoipa::path(
    post,
    path = "/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Email already registered"),
        (status = 502, description = "Hedera network unavailable"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let repo = UserRepository::new(state.storage());

    if repo.find_by_email(&request.email)?.is_some() {
        return Err(ApiError::bad_request("Email already registered"));
    }

    let created = state
        .ledger()
        .create_account(0, Some(format!("User: {}", request.email)))
        .await?;

    let user = UserDocument {
        user_id: uuid::Uuid::new_v4().to_string(),
        auth0_sub: request.auth0_id,
        name: request.name,
        email: request.email,
        wallet_address: Some(request.address),
        hedera_account_id: Some(created.account_id.clone()),
        hedera_public_key: Some(created.public_key.clone()),
        kyc_proof: Some(request.kyc_proof),
        created_at: Utc::now(),
        last_login_at: None,
    };
    repo.insert(&user)?;

    tracing::info!(user_id = %user.user_id, account_id = %created.account_id, "registered user");

    Ok(Json(RegisterResponse {
        user_id: user.user_id,
        hedera_account_id: created.account_id,
        public_key: created.public_key,
    }))
}
