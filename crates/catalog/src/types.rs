//! Core domain types for the course catalog.
//!
//! Records keep every field as the raw string it was loaded with, because
//! equality filters compare against exactly those strings. Numeric fields are
//! interpreted on demand through the typed accessors on `CourseRecord`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Course Records
// =============================================================================

/// One course offered by one university.
///
/// Field names follow the column names of the course spreadsheet so the same
/// struct deserializes from both the CSV export and the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub university_name: String,
    pub location: String,
    #[serde(default)]
    pub image_url: String,
    pub course_name: String,
    /// "Undergraduate", "Postgraduate", ...
    pub course_level: String,
    pub field_of_study: String,
    /// Whole years, kept as loaded (e.g. "2")
    pub duration_years: String,
    /// Annual tuition in NZD, kept as loaded (e.g. "35000")
    pub tuition_fee_nzd: String,
    pub entry_requirements: String,
    pub exams_required: String,
    /// "Yes" or "No"
    pub scholarship_available: String,
    #[serde(default)]
    pub scholarship_details: String,
    pub apply_link: String,
}

impl CourseRecord {
    /// Duration in whole years, or `None` if the stored value isn't an integer.
    pub fn duration(&self) -> Option<u32> {
        self.duration_years.trim().parse().ok()
    }

    /// Tuition fee in NZD, or `None` if the stored value isn't an integer.
    pub fn tuition_fee(&self) -> Option<u64> {
        self.tuition_fee_nzd.trim().parse().ok()
    }

    /// Scholarship availability, or `None` for anything other than "Yes"/"No".
    pub fn scholarship(&self) -> Option<Scholarship> {
        self.scholarship_available.parse().ok()
    }

    /// True when a scholarship is offered and actually described.
    pub fn offers_described_scholarship(&self) -> bool {
        self.scholarship() == Some(Scholarship::Yes) && !self.scholarship_details.trim().is_empty()
    }

    /// Names of the numeric fields that failed to parse (used for load warnings)
    pub fn malformed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.duration().is_none() {
            fields.push("duration_years");
        }
        if self.tuition_fee().is_none() {
            fields.push("tuition_fee_nzd");
        }
        fields
    }
}

/// Scholarship availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scholarship {
    Yes,
    No,
}

impl Scholarship {
    /// Both values in display order
    pub const ALL: [Scholarship; 2] = [Scholarship::Yes, Scholarship::No];

    /// The exact string stored in course records
    pub fn as_str(&self) -> &'static str {
        match self {
            Scholarship::Yes => "Yes",
            Scholarship::No => "No",
        }
    }
}

impl fmt::Display for Scholarship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scholarship {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Scholarship::Yes),
            "No" => Ok(Scholarship::No),
            other => Err(format!("expected \"Yes\" or \"No\", got {:?}", other)),
        }
    }
}

// =============================================================================
// University Views
// =============================================================================

/// All courses sharing one university name.
///
/// Views are derived from the course list and have no identity beyond the
/// name; rebuild them with `group_by_university` whenever the list changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniversityView {
    pub name: String,
    /// Location of the first course seen for this university
    pub location: String,
    pub image_url: String,
    pub courses: Vec<CourseRecord>,
}

impl UniversityView {
    /// Lowest and highest parseable tuition fee across this university's courses.
    pub fn fee_span(&self) -> Option<(u64, u64)> {
        let mut fees = self.courses.iter().filter_map(CourseRecord::tuition_fee);
        let first = fees.next()?;
        Some(fees.fold((first, first), |(lo, hi), fee| (lo.min(fee), hi.max(fee))))
    }
}

/// Group courses by university name.
///
/// Universities appear in the order their first course appears; each
/// university's courses keep their relative order from `courses`.
pub fn group_by_university(courses: &[CourseRecord]) -> Vec<UniversityView> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut views: Vec<UniversityView> = Vec::new();

    for course in courses {
        let idx = *positions
            .entry(course.university_name.as_str())
            .or_insert_with(|| {
                views.push(UniversityView {
                    name: course.university_name.clone(),
                    location: course.location.clone(),
                    image_url: course.image_url.clone(),
                    courses: Vec::new(),
                });
                views.len() - 1
            });
        views[idx].courses.push(course.clone());
    }

    views
}
