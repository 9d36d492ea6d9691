// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Portfolio endpoints: holdings view and investment recording.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::ApiError,
    state::AppState,
    storage::{HoldingDocument, ListingRepository, PortfolioRepository},
};

/// Query parameters for the portfolio view.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PortfolioQuery {
    /// Auth0 subject whose holdings to list.
    pub auth0_id: String,
}

/// Portfolio response.
#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioResponse {
    pub auth0_id: String,
    pub count: usize,
    pub holdings: Vec<HoldingDocument>,
}

/// List all holding rows for an identity.
///
/// Repeated investments in the same token are separate rows; current
/// position is the caller-side sum.
#[utoipa::path(
    get,
    path = "/portfolio",
    tag = "Marketplace",
    params(PortfolioQuery),
    responses(
        (status = 200, description = "Holdings retrieved", body = PortfolioResponse),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_portfolio(
    State(state): State<AppState>,
    Query(query): Query<PortfolioQuery>,
) -> Result<Json<PortfolioResponse>, ApiError> {
    let holdings = PortfolioRepository::new(state.storage()).list_by_sub(&query.auth0_id)?;

    Ok(Json(PortfolioResponse {
        auth0_id: query.auth0_id,
        count: holdings.len(),
        holdings,
    }))
}

/// Request body for recording an investment.
#[derive(Debug, Deserialize, ToSchema)]
pub struct InvestRequest {
    pub auth0_id: String,
    pub token_id: String,
    pub amount: u64,
    /// Hedera transaction id of the matching token transfer, if one
    /// was already made.
    pub transaction_id: Option<String>,
}

/// Response for a recorded investment.
#[derive(Debug, Serialize, ToSchema)]
pub struct InvestResponse {
    pub holding_id: String,
    pub token_id: String,
    pub amount: u64,
    pub total_cost: f64,
    pub remaining_available: u64,
}

/// Record an investment against a listing.
///
/// Decrements the listing's `available` counter and inserts one
/// holding row. The two writes are independent documents and are not
/// atomic; a crash between them can leave the counter decremented
/// without a matching row.
#[utoipa::path(
    post,
    path = "/portfolio/invest",
    tag = "Marketplace",
    request_body = InvestRequest,
    responses(
        (status = 200, description = "Investment recorded", body = InvestResponse),
        (status = 400, description = "Invalid amount or insufficient availability"),
        (status = 404, description = "Listing not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn invest(
    State(state): State<AppState>,
    Json(request): Json<InvestRequest>,
) -> Result<Json<InvestResponse>, ApiError> {
    if request.amount == 0 {
        return Err(ApiError::bad_request("amount must be greater than zero"));
    }

    let listings = ListingRepository::new(state.storage());
    let mut listing = listings
        .get(&request.token_id)
        .map_err(|_| ApiError::not_found(format!("Listing {}", request.token_id)))?;

    if listing.available < request.amount {
        return Err(ApiError::bad_request(format!(
            "only {} units available",
            listing.available
        )));
    }

    listing.available -= request.amount;
    listings.update(&listing)?;

    let holding = HoldingDocument {
        holding_id: uuid::Uuid::new_v4().to_string(),
        auth0_sub: request.auth0_id,
        token_id: request.token_id,
        amount: request.amount,
        price_per_unit: listing.price,
        total_cost: request.amount as f64 * listing.price,
        transaction_id: request.transaction_id,
        status: "recorded".to_string(),
        created_at: Utc::now(),
    };
    PortfolioRepository::new(state.storage()).insert(&holding)?;

    tracing::info!(
        holding_id = %holding.holding_id,
        token_id = %holding.token_id,
        amount = holding.amount,
        "recorded investment"
    );

    Ok(Json(InvestResponse {
        holding_id: holding.holding_id,
        token_id: holding.token_id,
        amount: holding.amount,
        total_cost: holding.total_cost,
        remaining_available: listing.available,
    }))
}
