// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Hedera network integration.
//!
//! All consensus-node operations go through a single operator-funded
//! client ([`HederaHandle`]). Historical transaction data comes from a
//! mirror node over REST ([`MirrorClient`]).

pub mod accounts;
pub mod client;
pub mod mirror;
pub mod tokens;

pub use accounts::CreatedAccount;
pub use client::{BalanceSummary, HederaHandle, LedgerError};
pub use mirror::{MirrorClient, MirrorError, TransactionRecord};
pub use tokens::{CreatedToken, MintOutcome, SupplyClass, TokenClass, TokenKeys, TokenSpec};
