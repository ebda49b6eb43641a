// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read **one** remote page: where the ground truth sits
//! in its markup and how to get it out in a shape the rest of the pipeline can
//! rely on.
//!
//! ## What lives here
//! - **Pure parsing** of fetched markup. No network, no filesystem.
//! - **Section and heading heuristics** (e.g. where the "Winners & Nominees"
//!   list begins and ends, which text line is a category heading).
//! - **Light shaping** into small structs (`CategoryBlock`, `RawEntry`).
//!
//! ## What does **not** live here
//! - Fetching (`core::net`) and retry policy (`runner`).
//! - Category key normalization (`categories`) and film-title extraction
//!   (`title`). Specs hand over labels and entry text as printed.
//! - Deduplication and export (`data`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::Fetch::fetch(year) → specs::ceremony::parse(html, year)
//!                                       ↘  CategoryBlock stream
//!        → categories::normalize + title::extract_title → data::Aggregator
//! ```
//!
//! ## Conventions
//! - Specs are testable **offline** against inline fixtures.
//! - Page-level failures (section missing) are distinct from block-level ones
//!   (entries with no heading); neither panics.
//!
//! ## Current specs
//! - `ceremony` – nominees per category on `/oscars/ceremonies/{year}`.
pub mod ceremony;
