//! # Repository
//!
//! [`Repository`] is the sole owner of the animal collection. Every mutation goes
//! through it, and every successful mutation is flushed to the backing
//! [`AnimalStore`] before the call returns.
//!
//! ## Mutation Rules
//!
//! 1. **Validate first.** Drafts and patches are validated in full before the
//!    collection is touched. A failed validation reports every bad field.
//! 2. **Identity is fixed.** Ids are caller-supplied, unique, and never change
//!    after creation.
//! 3. **Persist after.** The collection is saved once the in-memory change is
//!    applied. A failed save is reported but the in-memory change stays: memory
//!    and disk now differ and the caller decides whether to retry.
//!
//! ## Snapshots
//!
//! [`Repository::list`] and [`Repository::get`] hand out owned copies. Editing a
//! copy has no effect on the collection; use [`Repository::update`].

use crate::error::{Result, ZooError};
use crate::model::{Animal, AnimalDraft, AnimalId, AnimalPatch};
use crate::query::{self, FilterSpec, SortSpec};
use crate::store::AnimalStore;
use crate::validation::validate_draft;
use tracing::{debug, info, warn};

pub struct Repository<S: AnimalStore> {
    store: S,
    animals: Vec<Animal>,
}

impl<S: AnimalStore> Repository<S> {
    /// A repository with an empty collection. Call [`Repository::load`] to read
    /// the persisted document.
    pub fn new(store: S) -> Self {
        Self {
            store,
            animals: Vec::new(),
        }
    }

    /// Create a repository and load the persisted document into it.
    pub fn open(store: S) -> Result<Self> {
        let mut repo = Self::new(store);
        repo.load()?;
        Ok(repo)
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// An absent or blank document yields an empty collection. On error the
    /// current collection is left exactly as it was.
    pub fn load(&mut self) -> Result<usize> {
        let loaded = self.store.read()?.unwrap_or_default();
        debug!(
            "Loaded {} animals from {:?}",
            loaded.len(),
            self.store.location()
        );
        self.animals = loaded;
        Ok(self.animals.len())
    }

    pub fn add(&mut self, draft: impl Into<AnimalDraft>) -> Result<Animal> {
        let draft = draft.into();
        let animal = validate_draft(&draft)?;

        if self.contains(animal.id) {
            return Err(ZooError::DuplicateId(animal.id));
        }

        self.animals.push(animal.clone());
        self.persist()?;
        info!("Added animal {} ({})", animal.id, animal.species);
        Ok(animal)
    }

    /// Apply `patch` to the record with `id`. Returns the updated record.
    pub fn update(&mut self, id: AnimalId, patch: &AnimalPatch) -> Result<Animal> {
        let pos = self.position(id).ok_or(ZooError::NotFound(id))?;

        let mut draft = AnimalDraft::from(&self.animals[pos]);
        draft.apply(patch);
        let updated = validate_draft(&draft)?;

        self.animals[pos] = updated.clone();
        self.persist()?;
        info!("Updated animal {} ({})", updated.id, updated.species);
        Ok(updated)
    }

    /// Remove the record with `id`. Returns the removed record.
    pub fn remove(&mut self, id: AnimalId) -> Result<Animal> {
        let pos = self.position(id).ok_or(ZooError::NotFound(id))?;

        let removed = self.animals.remove(pos);
        self.persist()?;
        info!("Removed animal {} ({})", removed.id, removed.species);
        Ok(removed)
    }

    /// All records in collection order.
    pub fn list(&self) -> Vec<Animal> {
        self.animals.clone()
    }

    pub fn get(&self, id: AnimalId) -> Option<Animal> {
        self.animals.iter().find(|a| a.id == id).cloned()
    }

    /// Form values for editing the record with `id`.
    pub fn draft_for(&self, id: AnimalId) -> Result<AnimalDraft> {
        self.animals
            .iter()
            .find(|a| a.id == id)
            .map(AnimalDraft::from)
            .ok_or(ZooError::NotFound(id))
    }

    /// Filtered and sorted view of the collection. Never mutates it.
    pub fn query(&self, filter: &FilterSpec, sort: Option<SortSpec>) -> Vec<Animal> {
        query::run(&self.animals, filter, sort)
    }

    pub fn contains(&self, id: AnimalId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn position(&self, id: AnimalId) -> Option<usize> {
        self.animals.iter().position(|a| a.id == id)
    }

    fn persist(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(&self.animals) {
            warn!(
                "Save to {:?} failed, in-memory collection now differs from disk: {}",
                self.store.location(),
                e
            );
            return Err(e);
        }
        Ok(())
    }
}
