//! University search for the universities listing.

use catalog::UniversityView;

/// Universities whose name or location contains `term`, ignoring case.
///
/// An empty term returns every university. Order follows `universities`.
pub fn search_universities<'a>(universities: &'a [UniversityView], term: &str) -> Vec<&'a UniversityView> {
    let needle = term.to_lowercase();
    universities
        .iter()
        .filter(|university| {
            university.name.to_lowercase().contains(&needle)
                || university.location.to_lowercase().contains(&needle)
        })
        .collect()
}
