// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Mirror-node transaction history endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// One transaction in an account's history.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionEntry {
    pub transaction_id: String,
    pub name: String,
    pub result: String,
}

/// Transaction history response.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionsResponse {
    pub account_id: String,
    pub count: usize,
    pub transactions: Vec<TransactionEntry>,
}

/// Get the full transaction history of an account, newest first.
#[utoipa::path(
    get,
    path = "/transactions/{account_id}",
    tag = "Ledger",
    params(
        ("account_id" = String, Path, description = "Account id (0.0.x)")
    ),
    responses(
        (status = 200, description = "History retrieved", body = TransactionsResponse),
        (status = 502, description = "Mirror node unavailable")
    )
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let records = state.mirror().account_transactions(&account_id).await?;

    let transactions: Vec<TransactionEntry> = records
        .into_iter()
        .map(|r| TransactionEntry {
            transaction_id: r.transaction_id,
            name: r.name,
            result: r.result,
        })
        .collect();

    Ok(Json(TransactionsResponse {
        account_id,
        count: transactions.len(),
        transactions,
    }))
}
