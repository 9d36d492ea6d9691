// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Marketplace listing endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    state::AppState,
    storage::{ListingDocument, ListingRepository},
};

/// Marketplace response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MarketplaceResponse {
    pub count: usize,
    pub listings: Vec<ListingDocument>,
}

/// List every asset in the marketplace.
#[utoipa::path(
    get,
    path = "/marketplace",
    tag = "Marketplace",
    responses(
        (status = 200, description = "Listings retrieved", body = MarketplaceResponse),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_marketplace(
    State(state): State<AppState>,
) -> Result<Json<MarketplaceResponse>, ApiError> {
    let listings = ListingRepository::new(state.storage()).list_all()?;

    Ok(Json(MarketplaceResponse {
        count: listings.len(),
        listings,
    }))
}
