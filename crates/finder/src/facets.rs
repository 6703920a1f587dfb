//! Facet extraction.
//!
//! Derives the selectable values for each discrete filter from the course
//! collection. Values keep first-seen order so UI option lists and test
//! expectations are stable.

use catalog::{CourseRecord, Scholarship};
use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;

/// Distinct values per filterable attribute.
///
/// Never contains the empty "all" sentinel. Durations that aren't whole
/// numbers are left out, so they can never be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub course_levels: Vec<String>,
    pub fields_of_study: Vec<String>,
    pub durations: Vec<u32>,
    pub exams_required: Vec<String>,
}

impl Facets {
    /// Scholarship availability is a fixed facet rather than a derived one
    pub fn scholarship_options(&self) -> &'static [Scholarship] {
        &Scholarship::ALL
    }

    pub fn is_empty(&self) -> bool {
        self.course_levels.is_empty()
            && self.fields_of_study.is_empty()
            && self.durations.is_empty()
            && self.exams_required.is_empty()
    }
}

/// Extract facets from the full collection.
pub fn extract_facets(courses: &[CourseRecord]) -> Facets {
    Facets {
        course_levels: distinct_text(courses, |c| &c.course_level),
        fields_of_study: distinct_text(courses, |c| &c.field_of_study),
        durations: distinct(courses.iter().filter_map(CourseRecord::duration)),
        exams_required: distinct_text(courses, |c| &c.exams_required),
    }
}

fn distinct_text<F>(courses: &[CourseRecord], field: F) -> Vec<String>
where
    F: Fn(&CourseRecord) -> &String,
{
    distinct(
        courses
            .iter()
            .map(field)
            .filter(|value| !value.is_empty())
            .cloned(),
    )
}

/// Deduplicate while keeping the first occurrence of each value
fn distinct<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::sample_courses;

    #[test]
    fn test_extract_sample_facets() {
        let facets = extract_facets(&sample_courses());

        assert_eq!(facets.course_levels, vec!["Postgraduate", "Undergraduate"]);
        assert_eq!(
            facets.fields_of_study,
            vec!["IT", "Business", "Health", "Engineering", "Social Sciences"]
        );
        assert_eq!(facets.durations, vec![2, 3, 4]);
        assert_eq!(facets.exams_required, vec!["IELTS", "PTE", "TOEFL"]);
    }

    #[test]
    fn test_sentinel_and_malformed_values_excluded() {
        let mut courses = sample_courses();
        courses[0].course_level = String::new();
        courses[1].exams_required = String::new();
        courses[2].duration_years = "1.5".to_string();
        courses[3].duration_years = String::new();

        let facets = extract_facets(&courses);
        assert_eq!(facets.course_levels, vec!["Undergraduate", "Postgraduate"]);
        assert_eq!(facets.exams_required, vec!["IELTS", "PTE", "TOEFL"]);
        assert_eq!(facets.durations, vec![2, 3]);
        assert!(!facets.fields_of_study.iter().any(String::is_empty));
    }

    #[test]
    fn test_no_duplicates() {
        let mut courses = sample_courses();
        courses.extend(sample_courses());

        let facets = extract_facets(&courses);
        for values in [&facets.course_levels, &facets.fields_of_study, &facets.exams_required] {
            let unique: HashSet<&String> = values.iter().collect();
            assert_eq!(unique.len(), values.len());
        }
        assert_eq!(facets.durations, vec![2, 3, 4]);
    }

    #[test]
    fn test_empty_collection() {
        let facets = extract_facets(&[]);
        assert!(facets.is_empty());
        assert_eq!(facets.scholarship_options().len(), 2);
    }
}
