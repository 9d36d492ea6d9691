// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Auth0 `/userinfo` client.
//!
//! Bearer tokens are verified by presenting them to the tenant's
//! `/userinfo` endpoint. A 200 with a profile means the token is valid;
//! any 4xx means it is not. This trades a network round trip per
//! request for not having to manage JWKS key material locally.

use std::time::Duration;

use serde::Deserialize;

use super::AuthError;

/// Timeout for userinfo calls.
const USERINFO_TIMEOUT: Duration = Duration::from_secs(10);

/// The subset of the Auth0 profile this service uses.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Auth0 subject claim (stable user identifier).
    pub sub: String,
    /// Display name, when the connection provides one.
    #[serde(default)]
    pub name: Option<String>,
    /// Email, when the connection provides one.
    #[serde(default)]
    pub email: Option<String>,
}

/// Client for the Auth0 userinfo endpoint.
#[derive(Debug, Clone)]
pub struct Auth0Client {
    base_url: String,
    http: reqwest::Client,
}

impl Auth0Client {
    /// Build a client for an Auth0 tenant domain (e.g. `tenant.auth0.com`).
    pub fn new(domain: &str) -> Self {
        Self::from_base_url(format!("https://{domain}"))
    }

    /// Build a client against an explicit base URL (useful for testing).
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(USERINFO_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Verify a bearer token and fetch the profile behind it.
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AuthError> {
        let url = format!("{}/userinfo", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            return Err(AuthError::Rejected);
        }
        if !status.is_success() {
            return Err(AuthError::InvalidResponse(format!(
                "userinfo returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }
}
