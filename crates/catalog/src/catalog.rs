//! Catalog building and load state.
//!
//! A `Catalog` owns the course collection for one browsing session together
//! with its university grouping. The grouping is rebuilt whenever a new
//! catalog is built, never patched in place.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{group_by_university, CourseRecord, UniversityView};
use std::path::Path;
use tracing::{info, warn};

/// Immutable course collection plus its derived university views.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<CourseRecord>,
    universities: Vec<UniversityView>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-loaded records.
    ///
    /// Logs one warning per record whose duration or fee isn't numeric; such
    /// records stay in the catalog but can never match a numeric filter.
    pub fn from_courses(courses: Vec<CourseRecord>) -> Self {
        for (idx, course) in courses.iter().enumerate() {
            let malformed = course.malformed_fields();
            if !malformed.is_empty() {
                warn!(
                    record = idx,
                    university = %course.university_name,
                    course = %course.course_name,
                    fields = ?malformed,
                    "Course has non-numeric fields"
                );
            }
        }

        let universities = group_by_university(&courses);
        Self {
            courses,
            universities,
        }
    }

    /// Load a course collection from a `.csv` or `.json` file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading courses from {}", path.display());

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
        let courses = match extension.as_deref() {
            Some("csv") => parser::parse_courses_csv(path)?,
            Some("json") => parser::parse_courses_json(path)?,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        let catalog = Self::from_courses(courses);
        let (universities, courses) = catalog.counts();
        info!("Loaded {} courses from {} universities", courses, universities);
        Ok(catalog)
    }

    /// All courses in load order
    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// University views in first-seen order
    pub fn universities(&self) -> &[UniversityView] {
        &self.universities
    }

    /// Look up a university by its exact name
    pub fn university(&self, name: &str) -> Option<&UniversityView> {
        self.universities.iter().find(|u| u.name == name)
    }

    /// Courses that offer a scholarship and describe it
    pub fn scholarship_courses(&self) -> Vec<&CourseRecord> {
        self.courses
            .iter()
            .filter(|course| course.offers_described_scholarship())
            .collect()
    }

    /// (universities, courses)
    pub fn counts(&self) -> (usize, usize) {
        (self.universities.len(), self.courses.len())
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Where the course collection is in its one-shot load.
///
/// Filtering code never sees `Loading` or `Failed` directly; callers check the
/// state and hand `courses()` (empty unless ready) to the engine.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(String),
}

impl LoadState {
    /// Fold a load result into a state, keeping only the error message
    pub fn from_result(result: Result<Catalog>) -> Self {
        match result {
            Ok(catalog) => LoadState::Ready(catalog),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Loaded courses, or an empty slice while loading or after a failure
    pub fn courses(&self) -> &[CourseRecord] {
        self.catalog().map(Catalog::courses).unwrap_or(&[])
    }
}
