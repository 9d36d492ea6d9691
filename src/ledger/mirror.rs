// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Mirror node REST client for historical transaction data.

use serde::Deserialize;

/// Errors from mirror node queries.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid mirror node response: {0}")]
    InvalidResponse(String),
}

/// One transaction as reported by the mirror node.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    /// Transaction type name (e.g. `CRYPTOTRANSFER`).
    pub name: String,
    /// Consensus result (e.g. `SUCCESS`).
    pub result: String,
}

#[derive(Debug, Deserialize)]
struct TransactionsPage {
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
    #[serde(default)]
    links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
struct PageLinks {
    next: Option<String>,
}

/// Client for the mirror node REST API.
#[derive(Debug, Clone)]
pub struct MirrorClient {
    base_url: String,
    http: reqwest::Client,
}

impl MirrorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full transaction history of an account, newest first.
    ///
    /// Follows `links.next` until the mirror node stops paginating.
    /// History length is unbounded; for very active accounts this can
    /// mean many round trips.
    pub async fn account_transactions(
        &self,
        account_id: &str,
    ) -> Result<Vec<TransactionRecord>, MirrorError> {
        let mut url = format!(
            "{}/api/v1/transactions?account.id={account_id}&limit=100&order=desc",
            self.base_url
        );
        let mut records = Vec::new();

        loop {
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|e| MirrorError::Http(e.to_string()))?;

            if !response.status().is_success() {
                return Err(MirrorError::Http(format!(
                    "mirror node returned {}",
                    response.status()
                )));
            }

            let page: TransactionsPage = response
                .json()
                .await
                .map_err(|e| MirrorError::InvalidResponse(e.to_string()))?;

            records.extend(page.transactions);

            match page.links.next {
                Some(next) => url = format!("{}{next}", self.base_url),
                None => break,
            }
        }

        Ok(records)
    }
}
