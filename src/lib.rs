// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image search gallery built with the Iced GUI framework.
//!
//! It queries the Pixabay API, lays the results out as a thumbnail grid with
//! incremental "Load more" pagination, and shows a selected image full size
//! in a modal viewer. Strings are localized with Fluent and preferences live
//! in a TOML settings file.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
