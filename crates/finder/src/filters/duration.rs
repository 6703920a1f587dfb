//! Filter on course duration in whole years.

use crate::traits::Filter;
use catalog::CourseRecord;

/// Keeps courses lasting exactly the selected number of years.
///
/// Courses whose duration isn't a whole number never match a set filter.
pub struct DurationFilter {
    years: Option<u32>,
}

impl DurationFilter {
    pub fn new(years: Option<u32>) -> Self {
        Self { years }
    }
}

impl Filter for DurationFilter {
    fn name(&self) -> &str {
        "DurationFilter"
    }

    fn is_active(&self) -> bool {
        self.years.is_some()
    }

    fn matches(&self, course: &CourseRecord) -> bool {
        match self.years {
            Some(years) => course.duration() == Some(years),
            None => true,
        }
    }
}
