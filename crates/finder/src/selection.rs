//! The user's current search term and filter choices.
//!
//! `FilterSelection` is a plain value: the engine receives a whole selection on
//! every recomputation and never holds a partially-updated one. Each filter is
//! a typed `Option`, `None` meaning "all". The UI convention of an empty
//! string for "all" is translated at the boundary by `FilterSelection::set`.

use catalog::Scholarship;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The filters a user can set, one per facet plus the fee range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    CourseLevel,
    FieldOfStudy,
    DurationYears,
    TuitionFeeRange,
    ExamsRequired,
    ScholarshipAvailable,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::CourseLevel,
        FilterField::FieldOfStudy,
        FilterField::DurationYears,
        FilterField::TuitionFeeRange,
        FilterField::ExamsRequired,
        FilterField::ScholarshipAvailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::CourseLevel => "courseLevel",
            FilterField::FieldOfStudy => "fieldOfStudy",
            FilterField::DurationYears => "durationYears",
            FilterField::TuitionFeeRange => "tuitionFeeRange",
            FilterField::ExamsRequired => "examsRequired",
            FilterField::ScholarshipAvailable => "scholarshipAvailable",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SelectionError::UnknownField(s.to_string()))
    }
}

/// A raw selector value that can't be stored in a typed field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown filter: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: FilterField, value: String },
}

/// Search term plus one optional value per filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub search_term: String,
    pub course_level: Option<String>,
    pub field_of_study: Option<String>,
    pub duration_years: Option<u32>,
    /// Label of one of the configured fee ranges
    pub tuition_fee_range: Option<String>,
    pub exams_required: Option<String>,
    pub scholarship_available: Option<Scholarship>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every filter is unset and the search term is empty
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Clear the search term and every filter in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set a filter from its raw selector value; `""` unsets it.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), SelectionError> {
        let text = (!value.is_empty()).then(|| value.to_string());
        match field {
            FilterField::CourseLevel => self.course_level = text,
            FilterField::FieldOfStudy => self.field_of_study = text,
            FilterField::TuitionFeeRange => self.tuition_fee_range = text,
            FilterField::ExamsRequired => self.exams_required = text,
            FilterField::DurationYears => {
                self.duration_years = parse_optional(field, value)?;
            }
            FilterField::ScholarshipAvailable => {
                self.scholarship_available = parse_optional(field, value)?;
            }
        }
        Ok(())
    }

    /// The raw selector value of a filter, `""` when unset
    pub fn get(&self, field: FilterField) -> String {
        match field {
            FilterField::CourseLevel => self.course_level.clone().unwrap_or_default(),
            FilterField::FieldOfStudy => self.field_of_study.clone().unwrap_or_default(),
            FilterField::DurationYears => self
                .duration_years
                .map(|years| years.to_string())
                .unwrap_or_default(),
            FilterField::TuitionFeeRange => self.tuition_fee_range.clone().unwrap_or_default(),
            FilterField::ExamsRequired => self.exams_required.clone().unwrap_or_default(),
            FilterField::ScholarshipAvailable => self
                .scholarship_available
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_course_level(mut self, level: impl Into<String>) -> Self {
        self.course_level = Some(level.into());
        self
    }

    pub fn with_field_of_study(mut self, field: impl Into<String>) -> Self {
        self.field_of_study = Some(field.into());
        self
    }

    pub fn with_duration_years(mut self, years: u32) -> Self {
        self.duration_years = Some(years);
        self
    }

    pub fn with_tuition_fee_range(mut self, label: impl Into<String>) -> Self {
        self.tuition_fee_range = Some(label.into());
        self
    }

    pub fn with_exams_required(mut self, exam: impl Into<String>) -> Self {
        self.exams_required = Some(exam.into());
        self
    }

    pub fn with_scholarship(mut self, scholarship: Scholarship) -> Self {
        self.scholarship_available = Some(scholarship);
        self
    }
}

fn parse_optional<T: FromStr>(field: FilterField, value: &str) -> Result<Option<T>, SelectionError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| SelectionError::InvalidValue {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_unset_with_sentinel() {
        let mut selection = FilterSelection::new();
        selection.set(FilterField::CourseLevel, "Postgraduate").unwrap();
        selection.set(FilterField::DurationYears, "2").unwrap();
        selection.set(FilterField::ScholarshipAvailable, "No").unwrap();

        assert_eq!(selection.course_level.as_deref(), Some("Postgraduate"));
        assert_eq!(selection.duration_years, Some(2));
        assert_eq!(selection.scholarship_available, Some(Scholarship::No));
        assert_eq!(selection.get(FilterField::DurationYears), "2");

        selection.set(FilterField::CourseLevel, "").unwrap();
        selection.set(FilterField::DurationYears, "").unwrap();
        assert_eq!(selection.course_level, None);
        assert_eq!(selection.duration_years, None);
        assert_eq!(selection.get(FilterField::CourseLevel), "");
    }

    #[test]
    fn test_invalid_values_leave_selection_unchanged() {
        let mut selection = FilterSelection::new().with_duration_years(3);

        let err = selection.set(FilterField::DurationYears, "three").unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidValue {
                field: FilterField::DurationYears,
                value: "three".to_string()
            }
        );
        assert!(selection.set(FilterField::ScholarshipAvailable, "maybe").is_err());
        assert_eq!(selection.duration_years, Some(3));
        assert_eq!(selection.scholarship_available, None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut selection = FilterSelection::new()
            .with_search_term("data")
            .with_course_level("Postgraduate")
            .with_field_of_study("IT")
            .with_duration_years(2)
            .with_tuition_fee_range("Above NZD 35,000")
            .with_exams_required("IELTS")
            .with_scholarship(Scholarship::Yes);
        assert!(!selection.is_empty());

        selection.reset();
        assert!(selection.is_empty());
        for field in FilterField::ALL {
            assert_eq!(selection.get(field), "");
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FilterField::ALL {
            assert_eq!(field.as_str().parse::<FilterField>(), Ok(field));
        }
        assert!("course_level".parse::<FilterField>().is_err());
    }
}
