use super::AnimalStore;
use crate::error::{Result, StorageFault, ZooError};
use crate::model::{Animal, AnimalId};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// The conventional name of the persisted document.
pub const DEFAULT_DATA_FILE: &str = "animals.json";

pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Write compact JSON instead of the indented form.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnimalStore for JsonFileStore {
    fn read(&self) -> Result<Option<Vec<Animal>>> {
        if !self.path.exists() {
            debug!("No document at {:?}", self.path);
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ZooError::persistence(&self.path, e))?;
        let animals = decode_document(&content).map_err(|e| ZooError::persistence(&self.path, e))?;

        if let Some(animals) = &animals {
            debug!("Read {} animals from {:?}", animals.len(), self.path);
        }
        Ok(animals)
    }

    fn save(&mut self, animals: &[Animal]) -> Result<()> {
        write_document(&self.path, animals, self.pretty)
            .map_err(|e| ZooError::persistence(&self.path, e))?;
        debug!("Saved {} animals to {:?}", animals.len(), self.path);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Parse a document body. Blank text means "no document".
pub(crate) fn decode_document(
    content: &str,
) -> std::result::Result<Option<Vec<Animal>>, StorageFault> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    let animals: Vec<Animal> = serde_json::from_str(content)?;
    check_collection(&animals)?;
    Ok(Some(animals))
}

/// A parsed document must still satisfy the collection invariants.
pub(crate) fn check_collection(animals: &[Animal]) -> std::result::Result<(), StorageFault> {
    let mut seen: HashSet<AnimalId> = HashSet::with_capacity(animals.len());
    for animal in animals {
        if !seen.insert(animal.id) {
            return Err(StorageFault::Invalid(format!(
                "duplicate animal id {}",
                animal.id
            )));
        }
        if animal.species.trim().is_empty() {
            return Err(StorageFault::Invalid(format!(
                "animal {} has an empty species",
                animal.id
            )));
        }
    }
    Ok(())
}

pub(crate) fn encode_document(
    animals: &[Animal],
    pretty: bool,
) -> std::result::Result<String, StorageFault> {
    let content = if pretty {
        serde_json::to_string_pretty(animals)?
    } else {
        serde_json::to_string(animals)?
    };
    Ok(content)
}

/// Serialize `animals` and atomically replace `path` with the result.
pub(crate) fn write_document(
    path: &Path,
    animals: &[Animal],
    pretty: bool,
) -> std::result::Result<(), StorageFault> {
    let content = encode_document(animals, pretty)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let stem = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("animals");
    let tmp_file = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
    if let Err(e) = fs::write(&tmp_file, content) {
        let _ = fs::remove_file(&tmp_file);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp_file, path) {
        let _ = fs::remove_file(&tmp_file);
        return Err(e.into());
    }
    Ok(())
}
