// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! FracAssets Server - Hedera Fractional-Asset Marketplace Backend
//!
//! This crate provides a REST backend for tokenizing fractional assets on
//! Hedera, with Auth0 as the identity provider and a JSON document store
//! for marketplace state.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer-token authentication against Auth0 `/userinfo`
//! - `ledger` - Hedera network integration (operator client, mirror node)
//! - `storage` - JSON document storage (users, listings, portfolio)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod ledger;
pub mod state;
pub mod storage;
