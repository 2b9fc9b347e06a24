use crate::model::AnimalId;
use crate::validation::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

/// What went wrong underneath a persistence or export failure.
#[derive(Error, Debug)]
pub enum StorageFault {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but breaks a collection invariant.
    #[error("invalid document: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("An animal with ID {0} already exists")]
    DuplicateId(AnimalId),

    #[error("Animal not found: {0}")]
    NotFound(AnimalId),

    #[error("Persistence error ({}): {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: StorageFault,
    },

    #[error("Export error ({}): {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: StorageFault,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl ZooError {
    pub fn persistence(path: impl Into<PathBuf>, source: impl Into<StorageFault>) -> Self {
        Self::Persistence {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn export(path: impl Into<PathBuf>, source: impl Into<StorageFault>) -> Self {
        Self::Export {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl From<ValidationErrors> for ZooError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;
