use models::{
    course_record::CourseRecord,
    facet::{FacetField, FacetSelections, is_unconstrained},
};
use strum::IntoEnumIterator;

pub struct FilterService;

impl FilterService {
    /// Keeps the courses matching every constrained facet, in their input order
    pub fn filter_courses(
        courses: &[CourseRecord],
        selections: &FacetSelections,
    ) -> Vec<CourseRecord> {
        if selections.is_unconstrained() {
            return courses.to_vec();
        }

        courses
            .iter()
            .filter(|course| Self::matches(course, selections))
            .cloned()
            .collect()
    }

    /// Whether a course satisfies all facet selections
    pub fn matches(course: &CourseRecord, selections: &FacetSelections) -> bool {
        FacetField::iter().all(|field| {
            let selection = selections.get(field);
            is_unconstrained(selection) || Self::field_matches(course, field, selection)
        })
    }

    fn field_matches(course: &CourseRecord, field: FacetField, selection: &str) -> bool {
        let value = field.value_of(course);

        if field.compares_as_string() {
            value.label() == selection
        } else {
            // Department and instructor only match text values
            value.as_text() == Some(selection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_courses;

    fn courses() -> Vec<CourseRecord> {
        parse_courses(
            r#"[
                {"id": "CS101", "department": "CS", "level": 100, "credits": 3, "instructor": "Smith"},
                {"id": "MA201", "department": "MATH", "level": 200, "credits": 4},
                {"id": "CS202", "department": "CS", "level": 200, "credits": 3, "instructor": "Jones"},
                {"id": "CS303", "department": "CS", "level": "200", "credits": "3", "instructor": "Smith"},
                {"id": "X1", "department": 7, "level": 100, "credits": 1}
            ]"#,
        )
        .unwrap()
    }

    fn ids(courses: &[CourseRecord]) -> Vec<String> {
        courses.iter().map(CourseRecord::display_id).collect()
    }

    #[test]
    fn test_all_wildcards_returns_full_set() {
        let full = courses();
        let filtered = FilterService::filter_courses(&full, &FacetSelections::default());
        assert_eq!(filtered, full);
    }

    #[test]
    fn test_empty_selection_is_unconstrained() {
        let full = courses();
        let selections = FacetSelections::default().with(FacetField::Department, "");
        assert_eq!(FilterService::filter_courses(&full, &selections), full);
    }

    #[test]
    fn test_department_filter_preserves_order() {
        let selections = FacetSelections::default().with(FacetField::Department, "CS");
        let filtered = FilterService::filter_courses(&courses(), &selections);
        assert_eq!(ids(&filtered), vec!["CS101", "CS202", "CS303"]);
    }

    #[test]
    fn test_level_matches_numbers_and_text_alike() {
        let selections = FacetSelections::default().with(FacetField::Level, "200");
        let filtered = FilterService::filter_courses(&courses(), &selections);
        assert_eq!(ids(&filtered), vec!["MA201", "CS202", "CS303"]);
    }

    #[test]
    fn test_numeric_department_never_matches_text_selection() {
        let selections = FacetSelections::default().with(FacetField::Department, "7");
        assert!(FilterService::filter_courses(&courses(), &selections).is_empty());
    }

    #[test]
    fn test_default_instructor_is_selectable() {
        let selections = FacetSelections::default().with(FacetField::Instructor, "TBA");
        let filtered = FilterService::filter_courses(&courses(), &selections);
        assert_eq!(ids(&filtered), vec!["MA201", "X1"]);
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let selections = FacetSelections::default()
            .with(FacetField::Department, "CS")
            .with(FacetField::Credits, "3")
            .with(FacetField::Instructor, "Smith");
        let filtered = FilterService::filter_courses(&courses(), &selections);
        assert_eq!(ids(&filtered), vec!["CS101", "CS303"]);
    }

    #[test]
    fn test_exact_case_sensitive_match() {
        let selections = FacetSelections::default().with(FacetField::Department, "cs");
        assert!(FilterService::filter_courses(&courses(), &selections).is_empty());

        let selections = FacetSelections::default().with(FacetField::Instructor, "Smi");
        assert!(FilterService::filter_courses(&courses(), &selections).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let selections = FacetSelections::default().with(FacetField::Level, "200");
        let once = FilterService::filter_courses(&courses(), &selections);
        let twice = FilterService::filter_courses(&once, &selections);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let selections = FacetSelections::default().with(FacetField::Credits, "99");
        assert!(FilterService::filter_courses(&courses(), &selections).is_empty());
    }
}
