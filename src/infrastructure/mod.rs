// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP stack.
//!
//! # Available Adapters
//!
//! - [`pixabay`]: Image search over the Pixabay REST API (implements [`ImageSearch`])
//!
//! [`ImageSearch`]: crate::application::port::ImageSearch

pub mod pixabay;

// Re-export main types for convenience
pub use pixabay::PixabayClient;
