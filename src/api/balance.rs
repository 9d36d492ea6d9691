// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Account balance endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::ApiError, ledger::BalanceSummary, state::AppState};

/// Query parameters for the balance request.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BalanceQuery {
    /// Account to query (`0.0.x`). Required.
    pub account_id: String,
}

/// Balance response.
///
/// All figures are strings so clients never lose precision parsing
/// large tinybar values as floats.
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    pub hbars: String,
    pub tinybars: String,
    pub tokens: String,
}

impl From<BalanceSummary> for BalanceResponse {
    fn from(summary: BalanceSummary) -> Self {
        Self {
            hbars: summary.hbars,
            tinybars: summary.tinybars,
            tokens: summary.tokens,
        }
    }
}

/// Get the hbar and token balances of an account.
#[utoipa::path(
    get,
    path = "/balance",
    tag = "Ledger",
    params(BalanceQuery),
    responses(
        (status = 200, description = "Balance retrieved", body = BalanceResponse),
        (status = 400, description = "Invalid account id"),
        (status = 502, description = "Hedera network unavailable")
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let summary = state.ledger().account_balance(&query.account_id).await?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_is_required() {
        let uri: axum::http::Uri = "http://localhost/balance".parse().unwrap();
        assert!(Query::<BalanceQuery>::try_from_uri(&uri).is_err());

        let uri: axum::http::Uri = "http://localhost/balance?account_id=0.0.1001"
            .parse()
            .unwrap();
        let Query(query) = Query::<BalanceQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.account_id, "0.0.1001");
    }

    #[test]
    fn balance_response_is_three_string_fields() {
        let response: BalanceResponse = BalanceSummary {
            hbars: "1.5".to_string(),
            tinybars: "150000000".to_string(),
            tokens: "{}".to_string(),
        }
        .into();

        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.values().all(|v| v.is_string()));
        assert_eq!(value["tinybars"], "150000000");
    }
}
