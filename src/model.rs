//! # Domain Model: Animal Records and Vocabularies
//!
//! This module defines the single entity of menagerie, [`Animal`], together with the
//! closed vocabularies its enum-like fields draw from ([`Habitat`], [`HealthStatus`]).
//!
//! ## Two Shapes of a Record
//!
//! - [`Animal`] is the *validated* record. Habitat and health are enumerations and
//!   the arrival date is a real calendar date, so a stored `Animal` cannot hold a
//!   value outside the vocabulary.
//! - [`AnimalDraft`] is the *plain data* a form hands over: the same six fields,
//!   with the id, the enum-like ones and the date still as text. Drafts become animals only
//!   through [`crate::validation::validate_draft`].
//!
//! [`AnimalPatch`] describes a modification: every field except `id` is optional and
//! only the present ones override the stored values.
//!
//! ## On-Disk Shape
//!
//! `Animal` serializes to exactly the six snake_case fields of the persisted document:
//!
//! ```text
//! {
//!   "id": 1,
//!   "species": "Lion",
//!   "habitat": "Savannah",
//!   "arrival_date": "2023-06-01",
//!   "health_status": "Good",
//!   "is_fed": true
//! }
//! ```
//!
//! Documents missing `health_status` or `is_fed` read back with the defaults
//! ("Good" and `true`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Caller-supplied record identity. Never generated by the library.
pub type AnimalId = i64;

/// Sentinel used by selection lists and filters to mean "do not filter".
pub const ALL_SENTINEL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Habitat {
    Savannah,
    Rainforest,
    Desert,
    Aquatic,
    Mountain,
    Grassland,
    Arctic,
}

impl Habitat {
    /// The canonical habitat vocabulary, in presentation order.
    pub const ALL: [Habitat; 7] = [
        Habitat::Savannah,
        Habitat::Rainforest,
        Habitat::Desert,
        Habitat::Aquatic,
        Habitat::Mountain,
        Habitat::Grassland,
        Habitat::Arctic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Habitat::Savannah => "Savannah",
            Habitat::Rainforest => "Rainforest",
            Habitat::Desert => "Desert",
            Habitat::Aquatic => "Aquatic",
            Habitat::Mountain => "Mountain",
            Habitat::Grassland => "Grassland",
            Habitat::Arctic => "Arctic",
        }
    }

    /// Entries for a search selection list: "All" followed by every habitat.
    pub fn choices() -> Vec<&'static str> {
        std::iter::once(ALL_SENTINEL)
            .chain(Self::ALL.iter().map(Habitat::as_str))
            .collect()
    }
}

impl fmt::Display for Habitat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Habitat {
    type Err = UnknownTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| UnknownTerm::new("habitat", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    /// The canonical health vocabulary, in presentation order.
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::Excellent,
        HealthStatus::Good,
        HealthStatus::Fair,
        HealthStatus::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::Poor => "Poor",
        }
    }

    /// Entries for a search selection list: "All" followed by every status.
    pub fn choices() -> Vec<&'static str> {
        std::iter::once(ALL_SENTINEL)
            .chain(Self::ALL.iter().map(HealthStatus::as_str))
            .collect()
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = UnknownTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| UnknownTerm::new("health status", s))
    }
}

/// A value outside one of the fixed vocabularies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownTerm {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownTerm {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// The six record fields, used to report which ones failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    Species,
    Habitat,
    ArrivalDate,
    HealthStatus,
    IsFed,
}

impl Field {
    /// The snake_case name used in the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Species => "species",
            Field::Habitat => "habitat",
            Field::ArrivalDate => "arrival_date",
            Field::HealthStatus => "health_status",
            Field::IsFed => "is_fed",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_is_fed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub species: String,
    pub habitat: Habitat,
    pub arrival_date: NaiveDate,
    #[serde(default)]
    pub health_status: HealthStatus,
    #[serde(default = "default_is_fed")]
    pub is_fed: bool,
}

impl Animal {
    /// One-line label used by card-style listings.
    pub fn summary_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Species: {} | Habitat: {} | Arrival: {} | Health: {} | Fed: {}",
            self.id,
            self.species,
            self.habitat,
            self.arrival_date.format(crate::validation::DATE_FORMAT),
            self.health_status,
            if self.is_fed { "True" } else { "False" }
        )
    }
}

/// Field values as entered on a form, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDraft {
    pub id: String,
    pub species: String,
    pub habitat: String,
    pub arrival_date: String,
    pub health_status: String,
    pub is_fed: bool,
}

impl AnimalDraft {
    /// A draft with the form defaults: health "Good", fed.
    pub fn new(
        id: impl fmt::Display,
        species: impl Into<String>,
        habitat: impl Into<String>,
        arrival_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            species: species.into(),
            habitat: habitat.into(),
            arrival_date: arrival_date.into(),
            health_status: HealthStatus::default().as_str().to_string(),
            is_fed: default_is_fed(),
        }
    }

    pub fn with_health_status(mut self, status: impl Into<String>) -> Self {
        self.health_status = status.into();
        self
    }

    pub fn with_fed(mut self, is_fed: bool) -> Self {
        self.is_fed = is_fed;
        self
    }

    /// Overlay the fields present in `patch`. The id is never touched.
    pub fn apply(&mut self, patch: &AnimalPatch) {
        if let Some(species) = &patch.species {
            self.species = species.clone();
        }
        if let Some(habitat) = &patch.habitat {
            self.habitat = habitat.clone();
        }
        if let Some(date) = &patch.arrival_date {
            self.arrival_date = date.clone();
        }
        if let Some(status) = &patch.health_status {
            self.health_status = status.clone();
        }
        if let Some(is_fed) = patch.is_fed {
            self.is_fed = is_fed;
        }
    }
}

impl From<&Animal> for AnimalDraft {
    fn from(animal: &Animal) -> Self {
        Self {
            id: animal.id.to_string(),
            species: animal.species.clone(),
            habitat: animal.habitat.as_str().to_string(),
            arrival_date: animal
                .arrival_date
                .format(crate::validation::DATE_FORMAT)
                .to_string(),
            health_status: animal.health_status.as_str().to_string(),
            is_fed: animal.is_fed,
        }
    }
}

impl From<Animal> for AnimalDraft {
    fn from(animal: Animal) -> Self {
        Self::from(&animal)
    }
}

/// A modification request. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalPatch {
    pub species: Option<String>,
    pub habitat: Option<String>,
    pub arrival_date: Option<String>,
    pub health_status: Option<String>,
    pub is_fed: Option<bool>,
}

impl AnimalPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn habitat(mut self, habitat: impl Into<String>) -> Self {
        self.habitat = Some(habitat.into());
        self
    }

    pub fn arrival_date(mut self, date: impl Into<String>) -> Self {
        self.arrival_date = Some(date.into());
        self
    }

    pub fn health_status(mut self, status: impl Into<String>) -> Self {
        self.health_status = Some(status.into());
        self
    }

    pub fn is_fed(mut self, is_fed: bool) -> Self {
        self.is_fed = Some(is_fed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.habitat.is_none()
            && self.arrival_date.is_none()
            && self.health_status.is_none()
            && self.is_fed.is_none()
    }
}

/// A form filled from a full draft replaces every mutable field.
impl From<AnimalDraft> for AnimalPatch {
    fn from(draft: AnimalDraft) -> Self {
        Self {
            species: Some(draft.species),
            habitat: Some(draft.habitat),
            arrival_date: Some(draft.arrival_date),
            health_status: Some(draft.health_status),
            is_fed: Some(draft.is_fed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lion() -> Animal {
        Animal {
            id: 1,
            species: "Lion".into(),
            habitat: Habitat::Savannah,
            arrival_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            health_status: HealthStatus::Good,
            is_fed: true,
        }
    }

    #[test]
    fn test_habitat_parses_only_canonical_names() {
        assert_eq!("Arctic".parse::<Habitat>().unwrap(), Habitat::Arctic);
        assert!("arctic".parse::<Habitat>().is_err());
        assert!("Tundra".parse::<Habitat>().is_err());
        assert!(ALL_SENTINEL.parse::<Habitat>().is_err());
    }

    #[test]
    fn test_health_defaults_to_good() {
        assert_eq!(HealthStatus::default(), HealthStatus::Good);
        let draft = AnimalDraft::new(7, "Yak", "Mountain", "2021-01-01");
        assert_eq!(draft.health_status, "Good");
        assert!(draft.is_fed);
    }

    #[test]
    fn test_choices_start_with_all() {
        let habitats = Habitat::choices();
        assert_eq!(habitats.len(), 8);
        assert_eq!(habitats[0], "All");
        assert_eq!(habitats[1], "Savannah");

        let health = HealthStatus::choices();
        assert_eq!(health, vec!["All", "Excellent", "Good", "Fair", "Poor"]);
    }

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let value = serde_json::to_value(lion()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["species"], "Lion");
        assert_eq!(value["habitat"], "Savannah");
        assert_eq!(value["arrival_date"], "2023-06-01");
        assert_eq!(value["health_status"], "Good");
        assert_eq!(value["is_fed"], true);
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let json = r#"{"id":3,"species":"Seal","habitat":"Aquatic","arrival_date":"2019-02-28"}"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.health_status, HealthStatus::Good);
        assert!(animal.is_fed);
    }

    #[test]
    fn test_unknown_habitat_in_document_is_rejected() {
        let json = r#"{"id":3,"species":"Seal","habitat":"Ocean","arrival_date":"2019-02-28"}"#;
        assert!(serde_json::from_str::<Animal>(json).is_err());
    }

    #[test]
    fn test_summary_line_matches_label_format() {
        let mut animal = lion();
        animal.is_fed = false;
        assert_eq!(
            animal.summary_line(),
            "ID: 1 | Species: Lion | Habitat: Savannah | Arrival: 2023-06-01 | Health: Good | Fed: False"
        );
    }

    #[test]
    fn test_draft_from_animal_round_trips_text() {
        let draft = AnimalDraft::from(&lion());
        assert_eq!(draft.habitat, "Savannah");
        assert_eq!(draft.arrival_date, "2023-06-01");
        assert_eq!(draft.health_status, "Good");
    }

    #[test]
    fn test_patch_overrides_only_present_fields() {
        let mut draft = AnimalDraft::from(&lion());
        let patch = AnimalPatch::new().health_status("Fair").is_fed(false);
        draft.apply(&patch);
        assert_eq!(draft.id, "1");
        assert_eq!(draft.species, "Lion");
        assert_eq!(draft.health_status, "Fair");
        assert!(!draft.is_fed);
        assert!(!patch.is_empty());
        assert!(AnimalPatch::new().is_empty());
    }
}
