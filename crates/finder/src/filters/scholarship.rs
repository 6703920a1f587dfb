//! Filter on scholarship availability.

use crate::traits::Filter;
use catalog::{CourseRecord, Scholarship};

/// Keeps courses whose scholarship flag equals the selected one.
pub struct ScholarshipFilter {
    wanted: Option<Scholarship>,
}

impl ScholarshipFilter {
    pub fn new(wanted: Option<Scholarship>) -> Self {
        Self { wanted }
    }
}

impl Filter for ScholarshipFilter {
    fn name(&self) -> &str {
        "ScholarshipFilter"
    }

    fn is_active(&self) -> bool {
        self.wanted.is_some()
    }

    fn matches(&self, course: &CourseRecord) -> bool {
        self.wanted
            .is_none_or(|wanted| course.scholarship_available == wanted.as_str())
    }
}
