//! Composition of every filter into one course predicate.
//!
//! The composed predicate is the AND of the search-term filter and one filter
//! per selection field. Unset fields contribute a filter that matches
//! everything, so evaluation is the same whatever the user has chosen.

use crate::fee_range::{find_fee_range, FeeRange};
use crate::filters::*;
use crate::selection::FilterSelection;
use crate::traits::Filter;
use catalog::CourseRecord;
use tracing::warn;

/// Chains filters together into a single predicate.
///
/// ## Usage
/// ```ignore
/// let predicate = CoursePredicate::compose(&selection, &default_fee_ranges());
/// let results = filter(catalog.courses(), &predicate);
/// ```
pub struct CoursePredicate {
    filters: Vec<Box<dyn Filter>>,
}

impl CoursePredicate {
    /// Create a predicate with no filters, matching every course.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the predicate (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the predicate for a selection.
    ///
    /// `fee_ranges` resolves the selected fee-range label. A label that names
    /// none of the ranges filters nothing and is logged.
    pub fn compose(selection: &FilterSelection, fee_ranges: &[FeeRange]) -> Self {
        let fee_range = selection.tuition_fee_range.as_deref().and_then(|label| {
            let range = find_fee_range(fee_ranges, label);
            if range.is_none() {
                warn!(label, "Unknown tuition fee range; ignoring");
            }
            range.cloned()
        });

        Self::new()
            .add_filter(SearchTermFilter::new(&selection.search_term))
            .add_filter(AttributeFilter::new(
                CourseAttribute::CourseLevel,
                selection.course_level.clone(),
            ))
            .add_filter(AttributeFilter::new(
                CourseAttribute::FieldOfStudy,
                selection.field_of_study.clone(),
            ))
            .add_filter(DurationFilter::new(selection.duration_years))
            .add_filter(TuitionRangeFilter::new(fee_range))
            .add_filter(AttributeFilter::new(
                CourseAttribute::ExamsRequired,
                selection.exams_required.clone(),
            ))
            .add_filter(ScholarshipFilter::new(selection.scholarship_available))
    }

    /// True when the course passes every filter
    pub fn matches(&self, course: &CourseRecord) -> bool {
        self.filters.iter().all(|filter| filter.matches(course))
    }

    /// The composed filters, in evaluation order
    pub fn filters(&self) -> &[Box<dyn Filter>] {
        &self.filters
    }

    /// Names of the filters that actually restrict the result
    pub fn active_filters(&self) -> Vec<&str> {
        self.filters
            .iter()
            .filter(|filter| filter.is_active())
            .map(|filter| filter.name())
            .collect()
    }
}

impl Default for CoursePredicate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fee_range::default_fee_ranges;
    use catalog::{sample_courses, Scholarship};

    #[test]
    fn test_empty_selection_composes_only_tautologies() {
        let predicate = CoursePredicate::compose(&FilterSelection::new(), &default_fee_ranges());

        assert_eq!(predicate.filters().len(), 7);
        assert!(predicate.active_filters().is_empty());
        assert!(sample_courses().iter().all(|c| predicate.matches(c)));
    }

    #[test]
    fn test_active_filters_follow_selection() {
        let selection = FilterSelection::new()
            .with_search_term("master")
            .with_tuition_fee_range("NZD 30,000 - 35,000")
            .with_scholarship(Scholarship::Yes);
        let predicate = CoursePredicate::compose(&selection, &default_fee_ranges());

        assert_eq!(
            predicate.active_filters(),
            vec!["SearchTermFilter", "TuitionRangeFilter", "ScholarshipFilter"]
        );
    }

    #[test]
    fn test_conjunction() {
        let selection = FilterSelection::new()
            .with_course_level("Postgraduate")
            .with_exams_required("IELTS");
        let predicate = CoursePredicate::compose(&selection, &default_fee_ranges());

        let kept: Vec<_> = sample_courses()
            .into_iter()
            .filter(|c| predicate.matches(c))
            .map(|c| c.course_name)
            .collect();
        assert_eq!(kept, vec!["Master of Data Science"]);
    }

    #[test]
    fn test_unknown_fee_range_label_is_ignored() {
        let selection = FilterSelection::new().with_tuition_fee_range("Under NZD 10,000");
        let predicate = CoursePredicate::compose(&selection, &default_fee_ranges());

        assert!(predicate.active_filters().is_empty());
        assert!(sample_courses().iter().all(|c| predicate.matches(c)));
    }

    #[test]
    fn test_custom_fee_ranges() {
        let ranges = vec![FeeRange::between("Mid", 31_000, 33_000)];
        let selection = FilterSelection::new().with_tuition_fee_range("Mid");
        let predicate = CoursePredicate::compose(&selection, &ranges);

        let kept: Vec<_> = sample_courses()
            .into_iter()
            .filter(|c| predicate.matches(c))
            .map(|c| c.tuition_fee_nzd)
            .collect();
        assert_eq!(kept, vec!["32000", "33000"]);
    }
}
