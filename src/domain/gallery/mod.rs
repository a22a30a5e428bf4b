// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Value objects describing search results, independent of the HTTP
//! service that produces them and the toolkit that renders them.

mod image;
pub mod newtypes;

pub use image::{ImageId, ImageRecord, PLACEHOLDER_DESCRIPTION};
pub use newtypes::{PageNumber, PAGE_SIZE};
