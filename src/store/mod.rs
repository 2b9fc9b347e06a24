//! # Storage Layer
//!
//! This module defines the persistence abstraction for menagerie. The [`AnimalStore`]
//! trait lets the repository work against different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep the repository's validation and uniqueness rules **decoupled** from
//!   how bytes reach the disk
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: Production storage, one JSON document on disk
//!   - The whole collection is a JSON array, pretty-printed by default
//!   - Writes go to a temporary sibling file and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures and seeded (even malformed) documents
//!
//! ## Contract
//!
//! A store always moves the **whole** collection: `save` replaces the document,
//! `read` returns every record or fails. A missing document is not an error here;
//! `read` reports it as `Ok(None)` and the repository decides what that means.

use crate::error::Result;
use crate::model::Animal;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the animal collection.
pub trait AnimalStore {
    /// Read the persisted document.
    ///
    /// Returns `Ok(None)` when there is no document yet (absent or blank).
    /// Returns `Err(ZooError::Persistence)` when the document exists but cannot
    /// be turned into a valid collection.
    fn read(&self) -> Result<Option<Vec<Animal>>>;

    /// Replace the persisted document with `animals`, in order.
    fn save(&mut self, animals: &[Animal]) -> Result<()>;

    /// Where the document lives (real path for files, a virtual one for memory).
    fn location(&self) -> PathBuf;
}
