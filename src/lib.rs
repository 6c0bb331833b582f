//! # wordbloom
//!
//! Word and story generation service for children's typing games.
//!
//! ## Overview
//!
//! This crate implements the backend for a family of browser typing games
//! (acid rain, spelling bloom, story time, word race, letter pop). A single
//! stateless HTTP endpoint produces difficulty-tiered word lists and short
//! stories, using a hosted language model when one is configured and a
//! built-in dictionary otherwise. Successful payloads are memoized in an
//! in-process cache keyed by the exact request signature.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Request/response data model and provenance tags |
//! | [`cache`] | TTL memoization with pluggable backends |
//! | [`model`] | Language-model client over HTTP |
//! | [`generate`] | Word-list and story generation with dictionary fallback |
//! | [`progress`] | Per-game score/streak/badge state container |
//! | [`config`] | Environment-driven service configuration |
//! | [`server`] | Axum HTTP layer (single generation route) |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordbloom::cache::{CacheManager, CachePolicy, MemoryCache};
//! use wordbloom::generate::ContentGenerator;
//! use wordbloom::server::{self, AppState};
//!
//! #[tokio::main]
//! async fn main() -> wordbloom::Result<()> {
//!     let cache = CacheManager::new(CachePolicy::default(), Box::new(MemoryCache::new(1024)));
//!     let state = Arc::new(AppState::new(ContentGenerator::new(None), cache));
//!     let app = server::router(state);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8788").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod generate;
pub mod model;
pub mod progress;
pub mod server;
pub mod types;

// Re-export main types for convenience
pub use config::{ModelConfig, ServiceConfig};
pub use generate::ContentGenerator;
pub use types::{Difficulty, GameMode, GenerationRequest, GenerationResponse, Provenance, WordItem};

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the crate
pub mod error;
pub use error::Error;
