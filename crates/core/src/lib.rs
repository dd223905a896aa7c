//! Core library for pokedex
//!
//! This crate implements the **Functional Core** of the pokedex application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The pokedex project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`pokedex_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokedex`**: HTTP, terminal rendering and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`pokemon`]: PokeAPI response shapes, the [`pokemon::Record`] model and the
//!   list/detail outputs derived from it
//! - [`colors`]: The static type-to-color table used for badges
//! - [`limit`]: The "load more" arithmetic for the list views
//! - [`view`]: The `loading | loaded` view state with generation tickets
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use pokedex_core::pokemon::{build_detail_output, transform_record};
//!
//! // Parse fixture data (no HTTP required)
//! let api: ApiPokemon = serde_json::from_str(BULBASAUR_JSON)?;
//! let detail = build_detail_output(transform_record(api));
//!
//! assert_eq!(detail.height_m, 0.7);
//! assert_eq!(detail.total, Some(318));
//! ```

pub mod colors;
pub mod limit;
pub mod pokemon;
pub mod view;
