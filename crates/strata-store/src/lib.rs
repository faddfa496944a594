//! Typed record persistence for Strata.
//!
//! This crate implements a small metastore: records are plain serde types
//! addressed by a hierarchical [`Identifier`](strata_types::Identifier) and
//! stored one JSON file per record under a base directory. The non-trivial
//! part is [`path`] — resolving an identifier to an on-disk location while
//! refusing any resolution that escapes the base directory, whether through
//! `..` segments or symlinks.
//!
//! # Storage Backends
//!
//! All backends implement the [`Metastore`] trait:
//!
//! - [`FileMetastore`] -- one file per record under a base directory
//! - [`InMemoryMetastore`] -- `HashMap`-based store for tests and embedding
//! - [`FederatedMetastore`] -- read-only first-hit composite over delegates
//! - [`Router`] -- dispatches per record type to registered stores
//!
//! # Design Rules
//!
//! 1. A resolved path is always a strict descendant of the base directory;
//!    violations fail before any I/O.
//! 2. Absence is not an error: missing records read as `None` and deleting
//!    an absent record succeeds.
//! 3. Unreadable or corrupt record files are logged and treated as absent,
//!    never surfaced to the reader.
//! 4. No locking and no write-temp-then-rename: concurrent writers race
//!    last-writer-wins, and readers may observe partial writes.

pub mod error;
pub mod federated;
pub mod file;
pub mod memory;
pub mod path;
pub mod record;
pub mod router;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use federated::FederatedMetastore;
pub use file::FileMetastore;
pub use memory::InMemoryMetastore;
pub use record::Record;
pub use router::Router;
pub use traits::Metastore;
