//! Record filtering.
//!
//! A [`FilterSpec`] names at most one predicate. The variants mirror the search
//! modes offered to a user: a free-text id or species box, a habitat or health
//! dropdown that includes "All", or a fed checkbox.

use crate::model::{Animal, AnimalId, Habitat, HealthStatus, ALL_SENTINEL};
use std::str::FromStr;

/// A dropdown value that is either the "All" sentinel or one concrete term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::Only)
    }
}

/// Which records a query keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterSpec {
    /// Keep everything.
    #[default]
    None,
    /// Exact id match on the search text. Text that is empty or not a number
    /// keeps everything, the same as no search yet.
    Id(String),
    /// Case-insensitive substring match on species.
    Species(String),
    Habitat(Selection<Habitat>),
    HealthStatus(Selection<HealthStatus>),
    Fed(bool),
}

impl FilterSpec {
    pub fn id(text: impl Into<String>) -> Self {
        Self::Id(text.into())
    }

    pub fn species(text: impl Into<String>) -> Self {
        Self::Species(text.into())
    }

    pub fn habitat(habitat: Habitat) -> Self {
        Self::Habitat(Selection::Only(habitat))
    }

    pub fn health_status(status: HealthStatus) -> Self {
        Self::HealthStatus(Selection::Only(status))
    }

    pub fn fed(is_fed: bool) -> Self {
        Self::Fed(is_fed)
    }

    pub fn matches(&self, animal: &Animal) -> bool {
        match self {
            FilterSpec::None => true,
            FilterSpec::Id(text) => match text.trim().parse::<AnimalId>() {
                Ok(id) => animal.id == id,
                Err(_) => true,
            },
            FilterSpec::Species(text) => animal
                .species
                .to_lowercase()
                .contains(&text.to_lowercase()),
            FilterSpec::Habitat(selection) => selection.accepts(&animal.habitat),
            FilterSpec::HealthStatus(selection) => selection.accepts(&animal.health_status),
            FilterSpec::Fed(is_fed) => animal.is_fed == *is_fed,
        }
    }
}
