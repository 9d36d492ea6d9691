// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;
use crate::storage::{HoldingDocument, ListingDocument};

pub mod accounts;
pub mod balance;
pub mod health;
pub mod marketplace;
pub mod portfolio;
pub mod register;
pub mod sync;
pub mod tokens;
pub mod transactions;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/balance", get(balance::get_balance))
        .route("/create-account", post(accounts::create_account))
        .route("/create-token", post(tokens::create_token))
        .route("/mint-token", post(tokens::mint_token))
        .route("/transfer-token", post(tokens::transfer_token))
        .route("/transactions/{account_id}", get(transactions::get_transactions))
        .route("/register", post(register::register))
        .route("/sync-user", post(sync::sync_user))
        .route("/marketplace", get(marketplace::list_marketplace))
        .route("/portfolio", get(portfolio::get_portfolio))
        .route("/portfolio/invest", post(portfolio::invest))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Registers the bearer scheme referenced by `security(("bearer" = []))`.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAuth),
    paths(
        health::health,
        balance::get_balance,
        accounts::create_account,
        tokens::create_token,
        tokens::mint_token,
        tokens::transfer_token,
        transactions::get_transactions,
        register::register,
        sync::sync_user,
        marketplace::list_marketplace,
        portfolio::get_portfolio,
        portfolio::invest
    ),
    components(
        schemas(
            health::HealthResponse,
            health::ComponentHealth,
            balance::BalanceResponse,
            accounts::CreateAccountRequest,
            accounts::CreateAccountResponse,
            tokens::CreateTokenRequest,
            tokens::CreateTokenResponse,
            tokens::MintTokenRequest,
            tokens::MintTokenResponse,
            tokens::TransferTokenRequest,
            tokens::TransferTokenResponse,
            transactions::TransactionEntry,
            transactions::TransactionsResponse,
            register::RegisterRequest,
            register::RegisterResponse,
            sync::SyncUserRequest,
            sync::SyncUserResponse,
            marketplace::MarketplaceResponse,
            portfolio::PortfolioResponse,
            portfolio::InvestRequest,
            portfolio::InvestResponse,
            ListingDocument,
            HoldingDocument
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Ledger", description = "Hedera accounts, balances, and history"),
        (name = "Tokens", description = "Token lifecycle"),
        (name = "Users", description = "Registration and identity sync"),
        (name = "Marketplace", description = "Listings and portfolio")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Auth0Client;
    use crate::ledger::{HederaHandle, MirrorClient};
    use crate::storage::{DocumentStorage, StoragePaths};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const TEST_OPERATOR_KEY: &str =
        "302e020100300506032b657004220420db484b828e64b2d8f12ce3c0a0e93a0b8cce7af1bb8f39c97732394482538e10";

    fn test_state() -> (AppState, TempDir) {
        let temp = TempDir::new().unwrap();
        let paths = StoragePaths::new(temp.path());
        let mut storage = DocumentStorage::new(paths);
        storage.initialize().unwrap();

        let ledger = HederaHandle::new("testnet", "0.0.2", TEST_OPERATOR_KEY).unwrap();
        let mirror = MirrorClient::new("http://127.0.0.1:1");
        let auth0 = Auth0Client::from_base_url("http://127.0.0.1:1");

        (AppState::new(storage, ledger, mirror, auth0), temp)
    }

    #[tokio::test]
    async fn health_route_answers_ok() {
        let (state, _temp) = test_state();
        let app = router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["operator"]["healthy"], true);
    }

    #[tokio::test]
    async fn marketplace_route_starts_empty() {
        let (state, _temp) = test_state();
        let app = router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/marketplace")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn sync_user_route_requires_bearer_token() {
        let (state, _temp) = test_state();
        let app = router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/sync-user")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
