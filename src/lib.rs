//! # Menagerie Architecture
//!
//! Menagerie is a **UI-agnostic record library** for zoo animal inventories. A desktop
//! form, a terminal front end or a test harness all drive the same core; none of them
//! is part of this crate.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Collaborator (not in this crate)                        │
//! │  - Forms, dialogs, confirmation prompts, clock display      │
//! │  - Hands in plain field values, renders returned records    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: load / add / update / remove / list /       │
//! │    query / export                                           │
//! │  - Returns structured Result types and user messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs) + Query (query/) + Export       │
//! │  - Validation, id uniqueness, filter/sort pipeline          │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract AnimalStore trait                               │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Apart from the store and export writers, code in this crate:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T, ZooError>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! Everything is synchronous and single-threaded: a call returns once the
//! document on disk reflects it, or with the error that prevented that.
//!
//! ## Testing Strategy
//!
//! 1. **Model, validation, query** (`model.rs`, `validation.rs`, `query/`): pure unit
//!    tests over fixture collections.
//! 2. **Repository** (`repository.rs`): behavior against `InMemoryStore`, including
//!    simulated write failures and malformed documents.
//! 3. **Stores and export**: real files in temporary directories.
//! 4. **API** (`api.rs` and `tests/`): dispatch, messages and end-to-end scenarios.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`repository`]: Owner of the collection and its mutation rules
//! - [`query`]: Filter and sort pipeline
//! - [`export`]: Snapshot export and default export file names
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Animal`, `Habitat`, `HealthStatus`, drafts, patches)
//! - [`validation`]: Field validation for drafts
//! - [`config`]: Configuration and data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod query;
pub mod repository;
pub mod store;
pub mod validation;

pub use api::ZooApi;
pub use error::{Result, ZooError};
pub use model::{Animal, AnimalDraft, AnimalId, AnimalPatch, Habitat, HealthStatus};
pub use repository::Repository;
