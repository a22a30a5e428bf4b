// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`search`]: The search/pagination state machine
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::search::{SearchController, SearchEvent};
//!
//! let mut controller = SearchController::new();
//! if let Some(ticket) = controller.apply(SearchEvent::QuerySubmitted("cats".into())) {
//!     // execute the fetch described by `ticket`, then feed the outcome back
//! }
//! ```

pub mod port;
pub mod search;
