//! The filter engine.
//!
//! `filter` is the pure stage: one predicate over one collection. The
//! `FilterEngine` wraps it with the state a course finder page needs (the
//! collection, its facets, the current selection and the current results)
//! and recomputes everything synchronously whenever one of them changes.

use crate::facets::{extract_facets, Facets};
use crate::fee_range::{default_fee_ranges, FeeRange};
use crate::predicate::CoursePredicate;
use crate::selection::{FilterField, FilterSelection, SelectionError};
use catalog::{group_by_university, CourseRecord, UniversityView};
use tracing::debug;

/// Apply a predicate to a collection.
///
/// ## Algorithm
/// 1. Start with every course
/// 2. For each filter in the predicate, in order:
///    a. Log filter name and input count
///    b. Keep the courses it matches
///    c. Log output count
/// 3. Clone the survivors
///
/// Each stage keeps relative order, so the output is in source order. Running
/// the stages one after another gives the same result as testing the whole
/// conjunction per course.
pub fn filter(courses: &[CourseRecord], predicate: &CoursePredicate) -> Vec<CourseRecord> {
    let mut current: Vec<&CourseRecord> = courses.iter().collect();
    for stage in predicate.filters() {
        debug!(
            "Applying filter: {} (input count: {})",
            stage.name(),
            current.len()
        );
        current.retain(|course| stage.matches(course));
        debug!(
            "Filter applied: {} (output count: {})",
            stage.name(),
            current.len()
        );
    }
    current.into_iter().cloned().collect()
}

/// Course finder state, always consistent with its inputs.
///
/// Every mutating method recomputes before returning, so `results()` and
/// `facets()` never reflect a stale or half-applied selection.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    courses: Vec<CourseRecord>,
    fee_ranges: Vec<FeeRange>,
    facets: Facets,
    selection: FilterSelection,
    results: Vec<CourseRecord>,
}

impl FilterEngine {
    /// Engine over `courses` with the default fee ranges
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        Self::with_fee_ranges(courses, default_fee_ranges())
    }

    pub fn with_fee_ranges(courses: Vec<CourseRecord>, fee_ranges: Vec<FeeRange>) -> Self {
        let mut engine = Self {
            facets: extract_facets(&courses),
            courses,
            fee_ranges,
            selection: FilterSelection::default(),
            results: Vec::new(),
        };
        engine.recompute();
        engine
    }

    /// Replace the collection; facets and results are rebuilt, the selection kept.
    pub fn set_courses(&mut self, courses: Vec<CourseRecord>) {
        self.facets = extract_facets(&courses);
        self.courses = courses;
        self.recompute();
    }

    /// Replace the whole selection at once
    pub fn apply(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.recompute();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.selection.search_term = term.into();
        self.recompute();
    }

    /// Change one filter from its raw selector value; `""` unsets it.
    ///
    /// An invalid value leaves the selection and results untouched.
    pub fn select(&mut self, field: FilterField, value: &str) -> Result<(), SelectionError> {
        let mut selection = self.selection.clone();
        selection.set(field, value)?;
        self.apply(selection);
        Ok(())
    }

    /// Clear the search term and every filter in a single update.
    pub fn reset(&mut self) {
        self.apply(FilterSelection::default());
    }

    fn recompute(&mut self) {
        let predicate = CoursePredicate::compose(&self.selection, &self.fee_ranges);
        self.results = filter(&self.courses, &predicate);
        debug!(
            total = self.courses.len(),
            matched = self.results.len(),
            active = ?predicate.active_filters(),
            "Recomputed course results"
        );
    }

    /// Courses matching the current selection, in source order
    pub fn results(&self) -> &[CourseRecord] {
        &self.results
    }

    /// Matching courses grouped by university
    pub fn result_universities(&self) -> Vec<UniversityView> {
        group_by_university(&self.results)
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn fee_ranges(&self) -> &[FeeRange] {
        &self.fee_ranges
    }

    /// Fee range labels in display order
    pub fn fee_range_labels(&self) -> Vec<&str> {
        self.fee_ranges.iter().map(|r| r.label.as_str()).collect()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
