//! Record ordering.
//!
//! Each [`SortKey`] compares by the field's own type: ids numerically, species and
//! habitat by their case-sensitive text, arrival dates chronologically. The
//! [`SortDirection`] flips whichever key is active.

use crate::model::Animal;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Species,
    Habitat,
    ArrivalDate,
}

impl SortKey {
    /// Sort options in the order a sort dropdown lists them.
    pub const ALL: [SortKey; 4] = [
        SortKey::Id,
        SortKey::Species,
        SortKey::Habitat,
        SortKey::ArrivalDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Species => "Species",
            SortKey::Habitat => "Habitat",
            SortKey::ArrivalDate => "Arrival Date",
        }
    }

    /// Map a dropdown position to a key. Out of range means no sort.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn compare(&self, a: &Animal, b: &Animal) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Species => a.species.cmp(&b.species),
            SortKey::Habitat => a.habitat.as_str().cmp(b.habitat.as_str()),
            SortKey::ArrivalDate => a.arrival_date.cmp(&b.arrival_date),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    pub fn compare(&self, a: &Animal, b: &Animal) -> Ordering {
        match self.direction {
            SortDirection::Ascending => self.key.compare(a, b),
            SortDirection::Descending => self.key.compare(b, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn sorted_ids(spec: SortSpec) -> Vec<i64> {
        let mut animals = StoreFixture::sample().animals();
        animals.sort_by(|a, b| spec.compare(a, b));
        animals.into_iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_id_sorts_numerically() {
        assert_eq!(sorted_ids(SortSpec::ascending(SortKey::Id)), vec![1, 2, 3, 4]);
        assert_eq!(sorted_ids(SortSpec::descending(SortKey::Id)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_species_sort_is_case_sensitive() {
        // Uppercase letters order before lowercase ones.
        assert_eq!(
            sorted_ids(SortSpec::ascending(SortKey::Species)),
            vec![2, 3, 1, 4]
        );
    }

    #[test]
    fn test_habitat_sorts_by_name() {
        // Arctic, Rainforest, Savannah, Savannah (ties keep collection order)
        assert_eq!(
            sorted_ids(SortSpec::ascending(SortKey::Habitat)),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            sorted_ids(SortSpec::descending(SortKey::Habitat)),
            vec![3, 4, 2, 1]
        );
    }

    #[test]
    fn test_arrival_sorts_chronologically() {
        assert_eq!(
            sorted_ids(SortSpec::ascending(SortKey::ArrivalDate)),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_dropdown_index_mapping() {
        assert_eq!(SortKey::from_index(0), Some(SortKey::Id));
        assert_eq!(SortKey::from_index(3), Some(SortKey::ArrivalDate));
        assert_eq!(SortKey::from_index(4), None);
        assert_eq!(SortKey::ArrivalDate.label(), "Arrival Date");
    }

    #[test]
    fn test_direction_toggles() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.toggled(),
            SortDirection::Ascending
        );
    }
}
