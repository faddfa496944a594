//! Foundation types for Strata.
//!
//! This crate provides the structured [`Identifier`] used to address records
//! in a metastore, plus the segment escaping rules shared by everything that
//! turns identifiers into filesystem or URL components. It performs no I/O;
//! the storage backends live in `strata-store`.
//!
//! # Key Types
//!
//! - [`Identifier`] — hierarchical record address: scheme, domain path, name
//! - [`escape`] / [`unescape`] — reserved-character encoding for segments
//! - [`IdentifierError`] — URN parse failures

pub mod error;
pub mod identifier;

pub use error::IdentifierError;
pub use identifier::{escape, unescape, Identifier};
