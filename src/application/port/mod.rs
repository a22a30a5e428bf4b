// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`search`]: Paginated image search and image download
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so a single adapter can be shared across tasks
//! - Methods return boxed futures; callers wrap them in Iced's `Task`

pub mod search;

pub use search::{BytesFuture, ImageSearch, SearchFuture};
