//! # Query Engine
//!
//! Computes the view a user sees: the collection narrowed by one [`FilterSpec`]
//! and optionally ordered by one [`SortSpec`].
//!
//! ## Pipeline
//!
//! ```text
//! collection ──▶ filter (one predicate or none) ──▶ sort (stable, optional) ──▶ view
//! ```
//!
//! Filtering always runs before sorting. Without a sort the view keeps collection
//! order. The sort is stable, so records with equal keys keep their relative
//! collection order in both directions.
//!
//! Queries are pure: they read the collection and return owned copies, so they
//! can run on every keystroke of a live search box.

use crate::model::Animal;
use tracing::debug;

pub mod filter;
pub mod sort;

pub use filter::{FilterSpec, Selection};
pub use sort::{SortDirection, SortKey, SortSpec};

/// Run the filter/sort pipeline over `animals`.
pub fn run(animals: &[Animal], filter: &FilterSpec, sort: Option<SortSpec>) -> Vec<Animal> {
    let mut view: Vec<Animal> = animals
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect();

    if let Some(spec) = sort {
        view.sort_by(|a, b| spec.compare(a, b));
    }

    debug!(
        "Query {:?} sorted by {:?} kept {} of {} animals",
        filter,
        sort,
        view.len(),
        animals.len()
    );
    view
}
