//! Filter implementations for the course finder.
//!
//! One filter per selection field. `CoursePredicate` composes all of them.

pub mod attribute;
pub mod duration;
pub mod scholarship;
pub mod search_term;
pub mod tuition_range;

// Re-export for convenience
pub use attribute::{AttributeFilter, CourseAttribute};
pub use duration::DurationFilter;
pub use scholarship::ScholarshipFilter;
pub use search_term::SearchTermFilter;
pub use tuition_range::TuitionRangeFilter;
