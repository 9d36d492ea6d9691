// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

use std::env;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use fracassets_server::api::router;
use fracassets_server::auth::Auth0Client;
use fracassets_server::config;
use fracassets_server::ledger::{HederaHandle, MirrorClient};
use fracassets_server::state::AppState;
use fracassets_server::storage::{DocumentStorage, StoragePaths};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    // Required configuration: fail fast at startup, not on first request.
    let operator_id =
        env::var(config::OPERATOR_ID_ENV).expect("OPERATOR_ID environment variable is required");
    let operator_key =
        env::var(config::OPERATOR_KEY_ENV).expect("OPERATOR_KEY environment variable is required");
    let auth0_domain =
        env::var(config::AUTH0_DOMAIN_ENV).expect("AUTH0_DOMAIN environment variable is required");

    let network = env::var(config::HEDERA_NETWORK_ENV).unwrap_or_else(|_| "testnet".to_string());
    let mirror_url = env::var(config::MIRROR_NODE_URL_ENV)
        .unwrap_or_else(|_| config::DEFAULT_MIRROR_NODE_URL.to_string());
    let data_dir = env::var(config::DATA_DIR_ENV)
        .map(StoragePaths::new)
        .unwrap_or_default();

    let mut storage = DocumentStorage::new(data_dir);
    storage
        .initialize()
        .expect("Failed to initialize document storage");

    let ledger = HederaHandle::new(&network, &operator_id, &operator_key)
        .expect("Failed to configure Hedera client");
    let mirror = MirrorClient::new(mirror_url);
    let auth0 = Auth0Client::new(&auth0_domain);

    let state = AppState::new(storage, ledger, mirror, auth0);
    let app = router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!(%addr, network, "FracAssets server listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json_logs = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
