// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! Typed repositories over the document store.
//!
//! Each repository borrows the shared [`DocumentStorage`](super::DocumentStorage)
//! and owns one collection directory.

pub mod listings;
pub mod portfolio;
pub mod users;

pub use listings::{ListingDocument, ListingRepository};
pub use portfolio::{HoldingDocument, PortfolioRepository};
pub use users::{UserDocument, UserRepository};
