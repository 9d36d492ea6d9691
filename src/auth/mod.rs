// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! # Authentication Module
//!
//! Bearer tokens are opaque to this service. Verification happens by
//! presenting the token to the Auth0 tenant's `/userinfo` endpoint;
//! the profile that comes back identifies the caller.

pub mod error;
pub mod extractor;
pub mod userinfo;

pub use error::AuthError;
pub use extractor::Auth;
pub use userinfo::{Auth0Client, UserProfile};
