//! Mood-based music recommendations from a flat-file catalog.
//!
//! Core modules:
//! - [`store`] - CSV-backed record store with bootstrap and top-up logic
//! - [`seeder`] - Deterministic placeholder generation per language
//! - [`query`] - Filtering, mood-aware sorting and sampling
//! - [`link`] - Search-link fallback for records without a URL
//!
//! ### Supporting Modules
//!
//! - [`track`] - Domain types and submission validation
//! - [`display`] - Display-field truncation and table rendering
//! - [`config`] - Data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use moodsync::query::{self, TrackQuery};
//! use moodsync::store::CatalogStore;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Bootstrap the catalog (idempotent) and load it
//! let store = CatalogStore::new("songs.csv");
//! store.ensure_catalog(20)?;
//! let tracks = store.load_all()?;
//!
//! // Ask for Happy tracks in any language
//! let query = TrackQuery {
//!     mood: Some("Happy".to_string()),
//!     ..Default::default()
//! };
//! let results = query::filter(&tracks, &query);
//! println!("{} recommendations", results.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Catalog Lifecycle
//!
//! The catalog is a UTF-8 CSV file with the header
//! `title,artist,mood,energy,language,link`. A fresh catalog starts with a
//! curated seed list plus generated filler that guarantees at least N
//! entries per tracked language; [`store::CatalogStore::ensure_catalog`]
//! re-verifies that coverage on every call and appends only the deficit.
//! Records are append-only: they are never mutated or deleted, and an
//! unreadable catalog is rebuilt from the seed rather than repaired row by
//! row.
//!
//! ## Query Semantics
//!
//! [`query::filter`] applies the optional criteria in a fixed order (mood,
//! language, text search, energy bounds), then sorts by energy. The sort
//! direction follows the mood: Happy and Energetic surface intense tracks
//! first (descending), every other mood starts gentle (ascending). The
//! tie-break is stable. All caps are documented in [`query`] as part of the
//! observable contract.
//!
//! ## Error Handling
//!
//! Operational failures (filesystem, malformed files past repair) return
//! `Result<T, anyhow::Error>` with context attached. User mistakes in an
//! `add` submission are a separate [`track::ValidationError`], rejected
//! before anything is written.

pub mod cli;
pub mod completion;
pub mod config;
pub mod display;
pub mod link;
pub mod query;
pub mod seeder;
pub mod store;
pub mod track;
