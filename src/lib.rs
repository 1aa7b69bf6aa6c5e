//! Deterministic upload ordering for build artifacts.
//!
//! Release pipelines publish artifacts one file at a time. This crate orders
//! the discovered files so that, within each module/version directory, the
//! primary artifact goes first, then its descriptor, then metadata and
//! checksum sidecars, and finally classifier variants in alphabetical order.
//!
//! # Modules
//!
//! - [`category`] - Classification of a file into an upload tier
//! - [`checksum`] - Read-only checksum index handed to the orderer
//! - [`config`] - Classification settings loaded from TOML
//! - [`error`] - Errors raised while loading configuration or indexes
//! - [`orderer`] - The comparison function and sorting entry points

pub mod category;
pub mod checksum;
pub mod config;
pub mod error;
pub mod orderer;

pub use artifact_order_common::ArtifactPath;
pub use category::{Category, classify};
pub use checksum::{ChecksumIndex, Checksums};
pub use config::OrderingConfig;
pub use error::{OrderingError, Result};
pub use orderer::{PathOrderer, sort_paths};
