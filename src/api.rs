//! # API Facade
//!
//! The API layer is a **thin facade** over the repository, the query engine and the
//! export service. It is the single entry point a UI collaborator talks to.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the repository, [`crate::query`] and [`crate::export`]
//! - **Remembers the last query** so the current view can be refreshed after a
//!   mutation and exported on request
//! - **Returns structured types** (`Result<CmdResult>`) carrying the records
//!   involved and user-facing messages
//!
//! ## What the API Does NOT Do
//!
//! - **Validation or uniqueness rules**: those belong to [`crate::repository`]
//! - **Presentation**: messages are plain text with a level; showing them as
//!   dialogs, toasts or inline labels is up to the caller
//! - **Selection tracking**: callers pass the id they want to modify or delete
//!
//! ## Generic Over AnimalStore
//!
//! `ZooApi<S: AnimalStore>` is generic over the storage backend:
//! - Production: `ZooApi<JsonFileStore>` via [`ZooApi::open`]
//! - Testing: `ZooApi<InMemoryStore>`

use crate::config::{ZooConfig, ZooPaths};
use crate::error::Result;
use crate::export;
use crate::model::{Animal, AnimalDraft, AnimalId, AnimalPatch};
use crate::repository::Repository;
use crate::store::fs::JsonFileStore;
use crate::store::AnimalStore;
use std::path::Path;

pub use crate::export::{ExportReport, ExportSelection};
pub use crate::query::{FilterSpec, Selection, SortDirection, SortKey, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_animals: Vec<Animal>,
    pub export: Option<ExportReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_animals(mut self, animals: Vec<Animal>) -> Self {
        self.affected_animals = animals;
        self
    }

    pub fn with_export(mut self, report: ExportReport) -> Self {
        self.export = Some(report);
        self
    }
}

struct LastQuery {
    filter: FilterSpec,
    sort: Option<SortSpec>,
    view: Vec<Animal>,
}

/// The main API facade for menagerie operations.
pub struct ZooApi<S: AnimalStore> {
    repo: Repository<S>,
    config: ZooConfig,
    last_query: Option<LastQuery>,
}

impl ZooApi<JsonFileStore> {
    /// Open the document configured under `paths` and load it.
    pub fn open(paths: &ZooPaths) -> Result<Self> {
        let config = paths.config()?;
        let store = JsonFileStore::new(paths.data_file(&config)).with_pretty(config.pretty);
        let mut api = Self::new(store, config);
        api.load()?;
        Ok(api)
    }
}

impl<S: AnimalStore> ZooApi<S> {
    /// Wrap a store without reading it. Call [`ZooApi::load`] next.
    pub fn new(store: S, config: ZooConfig) -> Self {
        Self {
            repo: Repository::new(store),
            config,
            last_query: None,
        }
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        let count = self.repo.load()?;
        self.refresh_last_query();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("Loaded {} animals.", count)));
        Ok(result)
    }

    pub fn add(&mut self, draft: impl Into<AnimalDraft>) -> Result<CmdResult> {
        let outcome = self.repo.add(draft);
        self.refresh_last_query();
        let animal = outcome?;

        let mut result = CmdResult::default().with_affected_animals(vec![animal]);
        result.add_message(CmdMessage::success("Animal added successfully."));
        Ok(result)
    }

    pub fn update(&mut self, id: AnimalId, patch: &AnimalPatch) -> Result<CmdResult> {
        let outcome = self.repo.update(id, patch);
        self.refresh_last_query();
        let animal = outcome?;

        let mut result = CmdResult::default().with_affected_animals(vec![animal]);
        result.add_message(CmdMessage::success("Animal updated successfully."));
        Ok(result)
    }

    /// Delete without asking. Confirmation is the caller's job.
    pub fn remove(&mut self, id: AnimalId) -> Result<CmdResult> {
        let outcome = self.repo.remove(id);
        self.refresh_last_query();
        let animal = outcome?;

        let mut result = CmdResult::default().with_affected_animals(vec![animal]);
        result.add_message(CmdMessage::success("Animal deleted successfully."));
        Ok(result)
    }

    pub fn list(&self) -> Vec<Animal> {
        self.repo.list()
    }

    pub fn get(&self, id: AnimalId) -> Option<Animal> {
        self.repo.get(id)
    }

    pub fn draft_for(&self, id: AnimalId) -> Result<AnimalDraft> {
        self.repo.draft_for(id)
    }

    /// Compute and remember the current view.
    pub fn query(&mut self, filter: &FilterSpec, sort: Option<SortSpec>) -> Vec<Animal> {
        let view = self.repo.query(filter, sort);
        self.last_query = Some(LastQuery {
            filter: filter.clone(),
            sort,
            view: view.clone(),
        });
        view
    }

    /// The view from the most recent query, kept current across mutations.
    pub fn last_query(&self) -> Option<&[Animal]> {
        self.last_query.as_ref().map(|q| q.view.as_slice())
    }

    /// Export a snapshot to `destination`.
    ///
    /// An empty snapshot writes nothing and reports a warning. Without a prior
    /// query, `LastQuery` exports the whole collection.
    pub fn export(
        &self,
        selection: ExportSelection,
        destination: impl AsRef<Path>,
    ) -> Result<CmdResult> {
        let snapshot = match (selection, &self.last_query) {
            (ExportSelection::LastQuery, Some(last)) => last.view.clone(),
            _ => self.repo.list(),
        };

        let mut result = CmdResult::default();
        if snapshot.is_empty() {
            result.add_message(CmdMessage::warning("No data to export."));
            return Ok(result);
        }

        let path = self.config.export_path(destination);
        let count = export::run(&snapshot, &path)?;

        result.add_message(CmdMessage::success(format!(
            "Data exported successfully to: {}",
            path.display()
        )));
        Ok(result.with_export(ExportReport { path, count }))
    }

    pub fn repository(&self) -> &Repository<S> {
        &self.repo
    }

    pub fn config(&self) -> &ZooConfig {
        &self.config
    }

    fn refresh_last_query(&mut self) {
        if let Some(last) = self.last_query.as_mut() {
            last.view = self.repo.query(&last.filter, last.sort);
        }
    }
}
