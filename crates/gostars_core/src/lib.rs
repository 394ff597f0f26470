//! Core utilities for gostars.
//!
//! This crate discovers the transitive dependency closure of a Go package:
//! - Resolving import paths through an [`ImportOracle`] (`go list` or an in-memory table)
//! - Walking the import graph once per distinct path, skipping the standard library
//! - Filtering the discovered set by forge host and ordering it deterministically

mod error;
mod filter;
mod oracle;
mod types;
mod walker;

// Re-export public API
pub use error::ResolveError;
pub use filter::{filter_and_order, is_host_path};
pub use oracle::{GoListOracle, ImportOracle, MemoryOracle};
pub use types::{ImportSet, Package};
pub use walker::discover;
