// SPDX-License-Identifier: MPL-2.0
//! Pixabay adapter for the [`ImageSearch`](crate::application::port::ImageSearch) port.
//!
//! - [`client`]: HTTP client issuing search and image download requests
//! - [`response`]: Decoding of the JSON search response

pub mod client;
pub mod response;

pub use client::PixabayClient;
