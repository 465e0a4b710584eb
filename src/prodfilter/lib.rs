//! # prodfilter
//!
//! Product filtering with composable specifications: a small demonstration of
//! the open/closed principle. Filtering is closed for modification, since
//! [`filter::filter`] never changes, and open for extension, since every new
//! criterion is just another [`spec::Specification`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, sets up logging, prints results        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the catalog, parses textual criteria                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Pure functions returning `CmdResult`                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (spec.rs, filter.rs, model.rs)                        │
//! │  - Specifications and the filter engine                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the CLI writes to stdout or stderr.
//!
//! ## Module Overview
//!
//! - [`spec`]: The `Specification` trait and built-in `ProductSpec`
//! - [`filter`]: Applies a specification to a slice of items
//! - [`model`]: `Product`, `Color`, `Size` and the sample catalog
//! - [`commands`]: Demo and list queries
//! - [`api`]: The facade UI clients call
//! - [`config`]: Display configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod spec;
