// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Token lifecycle endpoints: create, mint, transfer.
//!
//! Creating a token also records a marketplace listing, so every asset
//! minted through this service shows up in `/marketplace`.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    ledger::{SupplyClass, TokenClass, TokenKeys, TokenSpec},
    state::AppState,
    storage::{ListingDocument, ListingRepository},
};

fn default_token_type() -> String {
    "FUNGIBLE_COMMON".to_string()
}

fn default_supply_type() -> String {
    "FINITE".to_string()
}

/// Request body for token creation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTokenRequest {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub initial_supply: u64,
    #[serde(default)]
    pub max_supply: u64,
    /// `FUNGIBLE_COMMON` or `NON_FUNGIBLE_UNIQUE`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// `FINITE` or `INFINITE`.
    #[serde(default = "default_supply_type")]
    pub supply_type: String,
    #[serde(default)]
    pub freeze_default: bool,
    /// Treasury account; defaults to the operator.
    pub treasury_account_id: Option<String>,
    pub admin_key: Option<String>,
    pub supply_key: Option<String>,
    pub freeze_key: Option<String>,
    pub wipe_key: Option<String>,
    pub kyc_key: Option<String>,
    pub pause_key: Option<String>,
    /// Listing metadata, not sent to the ledger.
    pub description: Option<String>,
    /// Listing metadata, not sent to the ledger.
    pub category: Option<String>,
    /// Auth0 subject of the creator, when known.
    pub auth0_id: Option<String>,
}

/// Response for token creation.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateTokenResponse {
    pub token_id: String,
    pub transaction_id: String,
}

/// Build the marketplace listing recorded alongside a new token.
///
/// The full initial supply goes on sale; price starts at zero and is
/// set out of band.
fn build_listing(request: &CreateTokenRequest, token_id: &str) -> ListingDocument {
    ListingDocument {
        token_id: token_id.to_string(),
        name: request.name.clone(),
        symbol: request.symbol.clone(),
        description: request.description.clone(),
        category: request.category.clone(),
        decimals: request.decimals,
        initial_supply: request.initial_supply,
        max_supply: request.max_supply,
        available: request.initial_supply,
        price: 0.0,
        creator_auth0_sub: request.auth0_id.clone(),
        created_at: Utc::now(),
    }
}

/// Create a token on Hedera and list it in the marketplace.
#[utoipa::path(
    post,
    path = "/create-token",
    tag = "Tokens",
    request_body = CreateTokenRequest,
    responses(
        (status = 200, description = "Token created", body = CreateTokenResponse),
        (status = 400, description = "Invalid request"),
        (status = 502, description = "Hedera network unavailable")
    )
)]
pub async fn create_token(
    State(state): State<AppState>,
    Json(request): Json<CreateTokenRequest>,
) -> Result<Json<CreateTokenResponse>, ApiError> {
    let spec = TokenSpec {
        name: request.name.clone(),
        symbol: request.symbol.clone(),
        decimals: request.decimals,
        initial_supply: request.initial_supply,
        max_supply: request.max_supply,
        token_class: TokenClass::parse(&request.token_type)
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        supply_class: SupplyClass::parse(&request.supply_type)
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        freeze_default: request.freeze_default,
        treasury_account_id: request.treasury_account_id.clone(),
        keys: TokenKeys {
            admin: request.admin_key.clone(),
            supply: request.supply_key.clone(),
            freeze: request.freeze_key.clone(),
            wipe: request.wipe_key.clone(),
            kyc: request.kyc_key.clone(),
            pause: request.pause_key.clone(),
        },
    };

    let created = state.ledger().create_token(&spec).await?;

    let listing = build_listing(&request, &created.token_id);
    ListingRepository::new(state.storage()).insert(&listing)?;

    tracing::info!(token_id = %created.token_id, symbol = %request.symbol, "created token");

    Ok(Json(CreateTokenResponse {
        token_id: created.token_id,
        transaction_id: created.transaction_id,
    }))
}

/// Request body for minting.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MintTokenRequest {
    pub token_id: String,
    pub amount: i64,
    /// Key authorized to mint (the token's supply/admin key).
    pub admin_key: String,
}

/// Response for minting.
#[derive(Debug, Serialize, ToSchema)]
pub struct MintTokenResponse {
    pub token_id: String,
    pub new_total_supply: u64,
    pub transaction_id: String,
}

/// Validate a requested mint amount.
fn validate_mint_amount(amount: i64) -> Result<u64, ApiError> {
    if amount <= 0 {
        return Err(ApiError::bad_request("amount must be greater than zero"));
    }
    Ok(amount as u64)
}

/// Mint additional supply of a fungible token.
#[utoipa::path(
    post,
    path = "/mint-token",
    tag = "Tokens",
    request_body = MintTokenRequest,
    responses(
        (status = 200, description = "Supply minted", body = MintTokenResponse),
        (status = 400, description = "Invalid amount or token id"),
        (status = 502, description = "Hedera network unavailable")
    )
)]
pub async fn mint_token(
    State(state): State<AppState>,
    Json(request): Json<MintTokenRequest>,
) -> Result<Json<MintTokenResponse>, ApiError> {
    let amount = validate_mint_amount(request.amount)?;

    let outcome = state
        .ledger()
        .mint_token(&request.token_id, amount, &request.admin_key)
        .await?;

    Ok(Json(MintTokenResponse {
        token_id: request.token_id,
        new_total_supply: outcome.new_total_supply,
        transaction_id: outcome.transaction_id,
    }))
}

/// Request body for a token transfer.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferTokenRequest {
    pub token_id: String,
    pub recipient_id: String,
    pub amount: i64,
}

/// Response for a token transfer.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransferTokenResponse {
    pub transaction_id: String,
}

/// Transfer fungible token units from the operator to a recipient.
#[utoipa::path(
    post,
    path = "/transfer-token",
    tag = "Tokens",
    request_body = TransferTokenRequest,
    responses(
        (status = 200, description = "Transfer submitted", body = TransferTokenResponse),
        (status = 400, description = "Invalid token or recipient id"),
        (status = 502, description = "Hedera network unavailable")
    )
)]
pub async fn transfer_token(
    State(state): State<AppState>,
    Json(request): Json<TransferTokenRequest>,
) -> Result<Json<TransferTokenResponse>, ApiError> {
    let transaction_id = state
        .ledger()
        .transfer_token(&request.token_id, &request.recipient_id, request.amount)
        .await?;

    Ok(Json(TransferTokenResponse { transaction_id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_request() -> CreateTokenRequest {
        serde_json::from_str(
            r#"{
                "name": "Harbor View Apartments",
                "symbol": "HVA",
                "decimals": 0,
                "initial_supply": 10000,
                "max_supply": 10000,
                "description": "Fractional rental property",
                "category": "real-estate",
                "auth0_id": "auth0|creator"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn request_defaults_are_applied() {
        let request = minimal_request();
        assert_eq!(request.token_type, "FUNGIBLE_COMMON");
        assert_eq!(request.supply_type, "FINITE");
        assert!(!request.freeze_default);
        assert!(request.treasury_account_id.is_none());
    }

    #[test]
    fn listing_starts_with_full_supply_on_sale() {
        let request = minimal_request();
        let listing = build_listing(&request, "0.0.5005");

        assert_eq!(listing.token_id, "0.0.5005");
        assert_eq!(listing.available, listing.initial_supply);
        assert_eq!(listing.price, 0.0);
        assert_eq!(listing.creator_auth0_sub.as_deref(), Some("auth0|creator"));
    }

    #[test]
    fn mint_amount_must_be_positive() {
        assert!(validate_mint_amount(0).is_err());
        assert!(validate_mint_amount(-5).is_err());
        assert_eq!(validate_mint_amount(42).unwrap(), 42);
    }
}
