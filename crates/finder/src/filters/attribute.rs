//! Exact-match filters on text attributes.

use crate::traits::Filter;
use catalog::CourseRecord;

/// Text attributes that are filtered by exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAttribute {
    CourseLevel,
    FieldOfStudy,
    ExamsRequired,
}

impl CourseAttribute {
    fn value<'a>(&self, course: &'a CourseRecord) -> &'a str {
        match self {
            CourseAttribute::CourseLevel => &course.course_level,
            CourseAttribute::FieldOfStudy => &course.field_of_study,
            CourseAttribute::ExamsRequired => &course.exams_required,
        }
    }

    fn filter_name(&self) -> &'static str {
        match self {
            CourseAttribute::CourseLevel => "CourseLevelFilter",
            CourseAttribute::FieldOfStudy => "FieldOfStudyFilter",
            CourseAttribute::ExamsRequired => "ExamsRequiredFilter",
        }
    }
}

/// Keeps courses whose attribute equals the selected value (case-sensitive).
pub struct AttributeFilter {
    attribute: CourseAttribute,
    wanted: Option<String>,
}

impl AttributeFilter {
    pub fn new(attribute: CourseAttribute, wanted: Option<String>) -> Self {
        Self { attribute, wanted }
    }
}

impl Filter for AttributeFilter {
    fn name(&self) -> &str {
        self.attribute.filter_name()
    }

    fn is_active(&self) -> bool {
        self.wanted.is_some()
    }

    fn matches(&self, course: &CourseRecord) -> bool {
        self.wanted
            .as_deref()
            .is_none_or(|wanted| self.attribute.value(course) == wanted)
    }
}
