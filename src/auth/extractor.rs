// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(profile): Auth) -> impl IntoResponse {
//!     // profile is the verified Auth0 UserProfile
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{AuthError, UserProfile};
use crate::state::AppState;

/// Extractor for authenticated users.
///
/// Pulls the bearer token from the Authorization header and verifies it
/// against the tenant's `/userinfo` endpoint. Handlers receive the
/// profile Auth0 reported for the token.
pub struct Auth(pub UserProfile);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?;

        let profile = state.auth0().fetch_profile(token).await?;
        Ok(Auth(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Auth0Client;
    use crate::ledger::{HederaHandle, MirrorClient};
    use crate::state::AppState;
    use crate::storage::{DocumentStorage, StoragePaths};
    use axum::http::Request;
    use axum::http::StatusCode;
    use axum::{routing::get, Json, Router};
    use serde_json::json;
    use tempfile::TempDir;

    // Throwaway ed25519 key, DER hex as produced by the SDK.
    const TEST_OPERATOR_KEY: &str =
        "302e020100300506032b657004220420db484b828e64b2d8f12ce3c0a0e93a0b8cce7af1bb8f39c97732394482538e10";

    async fn spawn_auth0_stub() -> String {
        async fn userinfo(
            headers: axum::http::HeaderMap,
        ) -> Result<Json<serde_json::Value>, StatusCode> {
            let token = headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "));
            match token {
                Some("good-token") => Ok(Json(json!({"sub": "auth0|u1"}))),
                _ => Err(StatusCode::UNAUTHORIZED),
            }
        }

        let app = Router::new().route("/userinfo", get(userinfo));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn test_state(auth0_base: &str) -> (AppState, TempDir) {
        let temp = TempDir::new().unwrap();
        let paths = StoragePaths::new(temp.path());
        let mut storage = DocumentStorage::new(paths);
        storage.initialize().unwrap();

        let ledger = HederaHandle::new("testnet", "0.0.2", TEST_OPERATOR_KEY).unwrap();
        let mirror = MirrorClient::new("http://127.0.0.1:1");
        let auth0 = Auth0Client::from_base_url(auth0_base);

        (AppState::new(storage, ledger, mirror, auth0), temp)
    }

    #[tokio::test]
    async fn extractor_requires_auth_header() {
        let (state, _temp) = test_state("http://127.0.0.1:1");
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn extractor_rejects_non_bearer_header() {
        let (state, _temp) = test_state("http://127.0.0.1:1");
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn extractor_returns_profile_for_valid_token() {
        let base = spawn_auth0_stub().await;
        let (state, _temp) = test_state(&base);
        let mut parts = Request::builder()
            .uri("/test")
            .header("Authorization", "Bearer good-token")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        let Auth(profile) = result.unwrap();
        assert_eq!(profile.sub, "auth0|u1");
    }
}
