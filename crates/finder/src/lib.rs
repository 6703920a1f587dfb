//! Faceted search over course collections.
//!
//! This crate provides:
//! - Facet extraction: the selectable values for each filter
//! - Fee ranges: labelled tuition buckets
//! - FilterSelection: the user's search term and filter choices
//! - Filter trait and implementations, composed into a CoursePredicate
//! - FilterEngine: keeps results consistent with the selection
//!
//! ## Architecture
//! Facets and filtering are two separate passes over the same collection:
//! 1. `extract_facets` derives option lists from the full collection
//! 2. `CoursePredicate::compose` turns a selection into one predicate
//! 3. `filter` applies it, keeping source order
//!
//! ## Example Usage
//! ```ignore
//! use finder::{FilterEngine, FilterField};
//!
//! let mut engine = FilterEngine::new(catalog.courses().to_vec());
//! engine.set_search_term("master");
//! engine.select(FilterField::TuitionFeeRange, "NZD 30,000 - 35,000")?;
//!
//! for course in engine.results() {
//!     println!("{} at {}", course.course_name, course.university_name);
//! }
//! engine.reset();
//! ```

pub mod engine;
pub mod facets;
pub mod fee_range;
pub mod filters;
pub mod predicate;
pub mod selection;
pub mod traits;
pub mod universities;

// Re-export main types
pub use engine::{filter, FilterEngine};
pub use facets::{extract_facets, Facets};
pub use fee_range::{default_fee_ranges, find_fee_range, FeeRange};
pub use predicate::CoursePredicate;
pub use selection::{FilterField, FilterSelection, SelectionError};
pub use traits::Filter;
pub use universities::search_universities;
