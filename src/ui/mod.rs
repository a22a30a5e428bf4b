// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `Event` for its parent, an `update` and a `view`.
//!
//! # Components
//!
//! - [`search_bar`] - Query input and submit button
//! - [`gallery`] - Thumbnail grid of the accumulated results
//! - [`load_more`] - Loading spinner and "Load more" button
//! - [`modal`] - Full-size image viewer with Escape and backdrop close
//! - [`notifications`] - Toast notifications
//!
//! # Shared Infrastructure
//!
//! - [`thumbnails`] - LRU cache of decoded thumbnails
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod load_more;
pub mod modal;
pub mod notifications;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod thumbnails;
pub mod widgets;
