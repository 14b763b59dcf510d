//! # Lingoboard - a localized demo task board
//!
//! Lingoboard renders a fixed set of demo tasks as a three-column Kanban
//! board (to do, in progress, done) in several languages. Titles, labels,
//! counts, plurals and dates all go through a [`i18n::Translator`], and the
//! page is served per locale under `/{locale}`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the board on http://localhost:3000 (redirects / to /en, /fr, ...)
//! lingoboard serve
//!
//! # Print the Japanese board in the terminal
//! lingoboard render --locale ja
//!
//! # See where a browser asking for French would be sent
//! lingoboard route / --accept-language "fr-CA,fr;q=0.9"
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `Task`, `TaskStatus`, `TaskPriority`
//! - [`catalog`]: the eight demo tasks
//! - [`board`]: grouping tasks into columns
//! - [`i18n`]: locales, translators, plural rules and formatting
//! - [`render`]: render tree, metadata and HTML output
//! - [`routing`]: locale negotiation and redirects
//! - [`server`]: axum HTTP server
//! - [`cli`]: command-line interface definitions

/// Grouping tasks into ordered columns.
pub mod board;

/// The fixed demo dataset.
pub mod catalog;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.lingoboard.toml` files and the supported locale list.
pub mod config;

/// Per-request render context.
pub mod context;

/// Error types and result aliases.
///
/// Defines the `BoardError` enum and `Result<T>` type alias.
pub mod error;

/// Localization.
pub mod i18n;

pub mod logging;

/// Data models for the board.
pub mod model;

/// Render tree, page metadata and HTML templates.
pub mod render;

/// Locale routing as a pure function of path and headers.
pub mod routing;

/// HTTP server built on axum.
pub mod server;
