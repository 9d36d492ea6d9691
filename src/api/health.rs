// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Health check endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health status of one dependency.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Overall service health.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub storage: ComponentHealth,
    pub operator: ComponentHealth,
}

/// Service health check.
///
/// Verifies the data directory is writable and the operator client is
/// configured. Returns 503 when any component is unhealthy so load
/// balancers can pull the instance.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "One or more components unhealthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match state.storage().health_check() {
        Ok(()) => ComponentHealth {
            healthy: true,
            detail: None,
        },
        Err(e) => ComponentHealth {
            healthy: false,
            detail: Some(e.to_string()),
        },
    };

    let operator = if state.ledger().operator_configured() {
        ComponentHealth {
            healthy: true,
            detail: Some(format!("operator {}", state.ledger().operator_id_string())),
        }
    } else {
        ComponentHealth {
            healthy: false,
            detail: Some("operator account is not configured".to_string()),
        }
    };

    let all_healthy = storage.healthy && operator.healthy;
    let response = HealthResponse {
        status: if all_healthy { "ok" } else { "degraded" }.to_string(),
        storage,
        operator,
    };

    let status = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}
