//! # Catalog Crate
//!
//! Loads and holds the course collection that the finder filters.
//!
//! ## Main Components
//!
//! - **types**: `CourseRecord`, `Scholarship`, `UniversityView`
//! - **parser**: CSV and JSON course files
//! - **catalog**: `Catalog` (courses + university grouping) and `LoadState`
//! - **sample**: the built-in sample collection
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, LoadState};
//! use std::path::Path;
//!
//! let state = LoadState::from_result(Catalog::load_from_file(Path::new("data/courses.csv")));
//! if let Some(catalog) = state.catalog() {
//!     for university in catalog.universities() {
//!         println!("{} ({} courses)", university.name, university.courses.len());
//!     }
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod parser;
pub mod sample;
pub mod types;

pub use catalog::{Catalog, LoadState};
pub use error::{CatalogError, Result};
pub use sample::sample_courses;
pub use types::{group_by_university, CourseRecord, Scholarship, UniversityView};
