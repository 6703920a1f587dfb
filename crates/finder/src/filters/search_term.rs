//! Free-text search over course name, university name and field of study.

use crate::traits::Filter;
use catalog::CourseRecord;

/// Case-insensitive substring search.
///
/// An empty term matches every course. The term is not trimmed: a single
/// space is a real search for names containing a space.
pub struct SearchTermFilter {
    /// Lowercased term, `None` when empty
    needle: Option<String>,
}

impl SearchTermFilter {
    pub fn new(term: &str) -> Self {
        Self {
            needle: (!term.is_empty()).then(|| term.to_lowercase()),
        }
    }
}

impl Filter for SearchTermFilter {
    fn name(&self) -> &str {
        "SearchTermFilter"
    }

    fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    fn matches(&self, course: &CourseRecord) -> bool {
        let needle = match &self.needle {
            Some(needle) => needle,
            None => return true,
        };

        [
            &course.course_name,
            &course.university_name,
            &course.field_of_study,
        ]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(needle.as_str()))
    }
}
