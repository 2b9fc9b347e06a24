use super::fs::{decode_document, encode_document};
use super::AnimalStore;
use crate::error::{Result, StorageFault, ZooError};
use crate::model::Animal;
use std::cell::Cell;
use std::io;
use std::path::PathBuf;

const VIRTUAL_PATH: &str = "memory://animals.json";

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// The document is kept as serialized text so reads exercise the same decoding
/// as the file store, including rejection of malformed content.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    saves: usize,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw document body, as if it had been found on disk.
    pub fn with_document(content: impl Into<String>) -> Self {
        Self {
            document: Some(content.into()),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// The current raw document, if anything was saved or seeded.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// How many successful saves this store has seen.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl AnimalStore for InMemoryStore {
    fn read(&self) -> Result<Option<Vec<Animal>>> {
        match &self.document {
            None => Ok(None),
            Some(content) => {
                decode_document(content).map_err(|e| ZooError::persistence(VIRTUAL_PATH, e))
            }
        }
    }

    fn save(&mut self, animals: &[Animal]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ZooError::persistence(
                VIRTUAL_PATH,
                StorageFault::Io(io::Error::new(
                    io::ErrorKind::Other,
                    "Simulated write error",
                )),
            ));
        }
        let content =
            encode_document(animals, true).map_err(|e| ZooError::persistence(VIRTUAL_PATH, e))?;
        self.document = Some(content);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(VIRTUAL_PATH)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Habitat, HealthStatus};
    use chrono::NaiveDate;

    pub struct StoreFixture {
        animals: Vec<Animal>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                animals: Vec::new(),
            }
        }

        pub fn with_animal(
            mut self,
            id: i64,
            species: &str,
            habitat: Habitat,
            arrival: (i32, u32, u32),
        ) -> Self {
            let (y, m, d) = arrival;
            self.animals.push(Animal {
                id,
                species: species.to_string(),
                habitat,
                arrival_date: NaiveDate::from_ymd_opt(y, m, d).expect("fixture date"),
                health_status: HealthStatus::Good,
                is_fed: true,
            });
            self
        }

        pub fn with_health(mut self, status: HealthStatus) -> Self {
            if let Some(last) = self.animals.last_mut() {
                last.health_status = status;
            }
            self
        }

        pub fn unfed(mut self) -> Self {
            if let Some(last) = self.animals.last_mut() {
                last.is_fed = false;
            }
            self
        }

        /// A small mixed collection used across query and repository tests.
        pub fn sample() -> Self {
            Self::new()
                .with_animal(3, "Lion", Habitat::Savannah, (2020, 5, 1))
                .with_animal(1, "Penguin", Habitat::Arctic, (1999, 12, 31))
                .with_health(HealthStatus::Excellent)
                .with_animal(2, "Jaguar", Habitat::Rainforest, (2020, 1, 1))
                .with_health(HealthStatus::Poor)
                .unfed()
                .with_animal(4, "lioness cub", Habitat::Savannah, (2021, 7, 15))
                .with_health(HealthStatus::Fair)
        }

        pub fn animals(&self) -> Vec<Animal> {
            self.animals.clone()
        }

        pub fn build(self) -> InMemoryStore {
            let content = encode_document(&self.animals, true).expect("fixture encodes");
            InMemoryStore::with_document(content)
        }
    }
}
