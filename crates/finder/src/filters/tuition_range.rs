//! Filter on tuition fee ranges.

use crate::fee_range::FeeRange;
use crate::traits::Filter;
use catalog::CourseRecord;

/// Keeps courses whose fee falls inside the selected range.
///
/// ## Algorithm
/// 1. Parse the course's fee; a fee that isn't a whole number fails the filter
/// 2. Test it with `FeeRange::contains` (inclusive bounded ranges)
pub struct TuitionRangeFilter {
    range: Option<FeeRange>,
}

impl TuitionRangeFilter {
    pub fn new(range: Option<FeeRange>) -> Self {
        Self { range }
    }
}

impl Filter for TuitionRangeFilter {
    fn name(&self) -> &str {
        "TuitionRangeFilter"
    }

    fn is_active(&self) -> bool {
        self.range.is_some()
    }

    fn matches(&self, course: &CourseRecord) -> bool {
        match &self.range {
            Some(range) => course.tuition_fee().is_some_and(|fee| range.contains(fee)),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fee_range::{default_fee_ranges, find_fee_range};
    use catalog::sample_courses;

    fn filter_for(label: &str) -> TuitionRangeFilter {
        TuitionRangeFilter::new(find_fee_range(&default_fee_ranges(), label).cloned())
    }

    fn universities(filter: &TuitionRangeFilter) -> Vec<String> {
        sample_courses()
            .into_iter()
            .filter(|c| filter.matches(c))
            .map(|c| c.university_name)
            .collect()
    }

    #[test]
    fn test_boundary_fee_in_both_ranges() {
        let lower = universities(&filter_for("NZD 25,000 - 30,000"));
        let upper = universities(&filter_for("NZD 30,000 - 35,000"));

        assert_eq!(lower, vec!["University of Otago", "University of Canterbury"]);
        assert_eq!(
            upper,
            vec![
                "University of Auckland",
                "AUT University",
                "University of Canterbury",
                "Victoria University of Wellington"
            ]
        );
    }

    #[test]
    fn test_nothing_above_top_bound() {
        assert!(universities(&filter_for("Above NZD 35,000")).is_empty());
    }

    #[test]
    fn test_unparseable_fee_excluded() {
        let mut course = sample_courses().remove(1);
        course.tuition_fee_nzd = "NZD 27,000".to_string();

        assert!(!filter_for("NZD 25,000 - 30,000").matches(&course));
        assert!(!filter_for("Under NZD 25,000").matches(&course));
        assert!(TuitionRangeFilter::new(None).matches(&course));
    }
}
