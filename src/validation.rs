//! Field validation for animal records.
//!
//! A draft is checked field by field and every violation is collected before
//! anything is reported, so a form can flag all bad inputs at once:
//! - `id` must be an integer
//! - `species` must contain something other than whitespace
//! - `habitat` must be one of the [`Habitat`] names
//! - `arrival_date` must be a real calendar date written exactly as `YYYY-MM-DD`
//! - `health_status` must be one of the [`HealthStatus`] names
//!
//! Id uniqueness is a collection property and is checked by the repository.

use crate::model::{Animal, AnimalDraft, AnimalId, Field, Habitat, HealthStatus};
use chrono::NaiveDate;
use std::fmt;

/// On-disk and on-form date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub message: String,
}

/// Every constraint a draft violated, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> Vec<Field> {
        self.violations.iter().map(|v| v.field).collect()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Parses an id typed as text.
pub fn parse_id(text: &str) -> Result<AnimalId, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("id is required".to_string());
    }
    text.parse::<AnimalId>()
        .map_err(|_| format!("id must be an integer, got '{}'", text))
}

/// Parses an arrival date in `YYYY-MM-DD` form.
///
/// chrono alone accepts unpadded months and a leading sign, so the layout is
/// checked before parsing.
pub fn parse_arrival_date(text: &str) -> Result<NaiveDate, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("arrival date is required".to_string());
    }
    let invalid = || format!("'{}' is not a valid YYYY-MM-DD date", text);
    if !has_date_layout(text) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

fn has_date_layout(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Turns a draft into a record, or reports every field that is wrong with it.
///
/// # Examples
/// ```
/// use menagerie::model::{AnimalDraft, Field};
/// use menagerie::validation::validate_draft;
///
/// let ok = AnimalDraft::new(1, "Lion", "Savannah", "2023-06-01");
/// assert!(validate_draft(&ok).is_ok());
///
/// let bad = AnimalDraft::new(2, "", "Ocean", "2023-02-30");
/// let errors = validate_draft(&bad).unwrap_err();
/// assert_eq!(
///     errors.fields(),
///     vec![Field::Species, Field::Habitat, Field::ArrivalDate]
/// );
/// ```
pub fn validate_draft(draft: &AnimalDraft) -> Result<Animal, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let id = match parse_id(&draft.id) {
        Ok(id) => Some(id),
        Err(msg) => {
            errors.push(Field::Id, msg);
            None
        }
    };

    let species = draft.species.trim();
    if species.is_empty() {
        errors.push(Field::Species, "species cannot be empty");
    }

    let habitat = match draft.habitat.trim() {
        "" => {
            errors.push(Field::Habitat, "habitat is required");
            None
        }
        name => match name.parse::<Habitat>() {
            Ok(h) => Some(h),
            Err(e) => {
                errors.push(
                    Field::Habitat,
                    format!("{} (expected one of {})", e, habitat_names()),
                );
                None
            }
        },
    };

    let arrival_date = match parse_arrival_date(&draft.arrival_date) {
        Ok(date) => Some(date),
        Err(msg) => {
            errors.push(Field::ArrivalDate, msg);
            None
        }
    };

    let health_status = match draft.health_status.trim() {
        "" => {
            errors.push(Field::HealthStatus, "health status is required");
            None
        }
        name => match name.parse::<HealthStatus>() {
            Ok(s) => Some(s),
            Err(e) => {
                errors.push(
                    Field::HealthStatus,
                    format!("{} (expected one of {})", e, health_names()),
                );
                None
            }
        },
    };

    match (id, habitat, arrival_date, health_status) {
        (Some(id), Some(habitat), Some(arrival_date), Some(health_status)) if errors.is_empty() => {
            Ok(Animal {
                id,
                species: species.to_string(),
                habitat,
                arrival_date,
                health_status,
                is_fed: draft.is_fed,
            })
        }
        _ => Err(errors),
    }
}

fn habitat_names() -> String {
    Habitat::ALL
        .iter()
        .map(Habitat::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn health_names() -> String {
    HealthStatus::ALL
        .iter()
        .map(HealthStatus::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
