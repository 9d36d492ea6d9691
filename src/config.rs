// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup (a `.env` file is honored via dotenvy).
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for document storage | `/data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `OPERATOR_ID` | Hedera operator account id (`0.0.x`) | Required |
//! | `OPERATOR_KEY` | Hedera operator private key | Required |
//! | `HEDERA_NETWORK` | Hedera network (`testnet` or `mainnet`) | `testnet` |
//! | `AUTH0_DOMAIN` | Auth0 tenant domain for `/userinfo` calls | Required |
//! | `MIRROR_NODE_URL` | Mirror node REST base URL | Testnet mirror node |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the document storage root directory.
///
/// All user, listing, portfolio, and sync-failure documents live under this
/// directory, one subdirectory per collection.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the Hedera operator account id.
///
/// The operator account pays for and authorizes every transaction this
/// service submits.
pub const OPERATOR_ID_ENV: &str = "OPERATOR_ID";

/// Environment variable name for the Hedera operator private key.
pub const OPERATOR_KEY_ENV: &str = "OPERATOR_KEY";

/// Environment variable name for the Hedera network selector.
pub const HEDERA_NETWORK_ENV: &str = "HEDERA_NETWORK";

/// Environment variable name for the Auth0 tenant domain.
///
/// Bearer tokens presented to `/sync-user` are verified by calling
/// `https://{AUTH0_DOMAIN}/userinfo`.
pub const AUTH0_DOMAIN_ENV: &str = "AUTH0_DOMAIN";

/// Environment variable name for the mirror node REST base URL.
pub const MIRROR_NODE_URL_ENV: &str = "MIRROR_NODE_URL";

/// Default mirror node REST base URL (Hedera testnet).
pub const DEFAULT_MIRROR_NODE_URL: &str = "https://testnet.mirrornode.hedera.com";
