//! Core traits for course filtering.
//!
//! This module defines the Filter trait that every predicate in a
//! `CoursePredicate` implements.

use catalog::CourseRecord;

/// A single predicate over course records.
///
/// ## Design Note
/// - An unset filter still takes part in evaluation; it simply matches every
///   course, so a composed predicate never special-cases "no filters"
/// - `matches` is total: a course whose fields can't be interpreted for this
///   filter is rejected, never an error
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// False when this filter is unset and matches everything
    fn is_active(&self) -> bool;

    /// Whether `course` passes this filter
    fn matches(&self, course: &CourseRecord) -> bool;
}
