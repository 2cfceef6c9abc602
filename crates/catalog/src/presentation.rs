use models::{course_record::CourseRecord, field_value::FieldValue};
use serde::Serialize;

pub const NO_MATCHES_MESSAGE: &str = "No courses match the selected filters.";
pub const NO_MATCHES_DETAIL: &str = "Select a different filter or load more data.";
pub const LOAD_FAILED_DETAIL: &str = "Could not load data.";
pub const IDLE_DETAIL: &str = "Load a catalog file to browse courses.";
pub const INVALID_FORMAT_ERROR: &str = "Invalid JSON file format.";
pub const READ_ERROR: &str = "Error reading file.";

/// A labelled line of a course's details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Every field of a course, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetails {
    /// Shown as the heading
    pub id: String,
    pub fields: Vec<DetailField>,
    pub description: String,
}

/// Formats a course for the detail view
pub fn formatted_details(course: &CourseRecord) -> CourseDetails {
    let field = |label, value: &FieldValue| DetailField {
        label,
        value: value.label(),
    };

    CourseDetails {
        id: course.display_id(),
        fields: vec![
            field("Title", &course.title),
            field("Department", &course.department),
            field("Level", &course.level),
            field("Credits", &course.credits),
            field("Instructor", &course.instructor),
            field("Semester", &course.semester),
        ],
        description: course.description.label(),
    }
}

/// One entry of the course list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub id: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum ListView {
    /// Nothing has been loaded yet
    Idle,
    Items(Vec<ListItem>),
    /// The working set is empty
    NoMatches,
    /// The last load failed structurally
    Cleared,
}

impl ListView {
    /// Builds the list for a working set, marking the selected entry
    pub fn from_courses(courses: &[CourseRecord], selected: Option<usize>) -> Self {
        if courses.is_empty() {
            return Self::NoMatches;
        }

        Self::Items(
            courses
                .iter()
                .enumerate()
                .map(|(idx, course)| ListItem {
                    id: course.display_id(),
                    selected: selected == Some(idx),
                })
                .collect(),
        )
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoMatches => Some(NO_MATCHES_MESSAGE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "course", rename_all = "snake_case")]
pub enum DetailView {
    Idle,
    Course(CourseDetails),
    NoMatches,
    CouldNotLoad,
}

impl DetailView {
    /// Placeholder text for states without a course
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle => Some(IDLE_DETAIL),
            Self::Course(_) => None,
            Self::NoMatches => Some(NO_MATCHES_DETAIL),
            Self::CouldNotLoad => Some(LOAD_FAILED_DETAIL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_courses;

    #[test]
    fn test_formatted_details_lists_every_field() {
        let courses = parse_courses(
            r#"[{
                "id": "CS101", "title": "Intro", "department": "CS", "level": 100,
                "credits": 3, "instructor": "Smith", "description": "Basics",
                "semester": "Fall 2023"
            }]"#,
        )
        .unwrap();

        let details = formatted_details(&courses[0]);
        assert_eq!(details.id, "CS101");
        assert_eq!(details.description, "Basics");

        let labels: Vec<_> = details.fields.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec!["Title", "Department", "Level", "Credits", "Instructor", "Semester"]
        );
        assert_eq!(details.fields[2].value, "100");
    }

    #[test]
    fn test_formatted_details_handles_missing_fields() {
        let courses = parse_courses(r#"[{"id": "X"}]"#).unwrap();
        let details = formatted_details(&courses[0]);

        let instructor = details.fields.iter().find(|f| f.label == "Instructor").unwrap();
        assert_eq!(instructor.value, "TBA");
        assert_eq!(details.fields[0].value, "(missing)");
    }

    #[test]
    fn test_heading_matches_list_entry_without_id() {
        let courses = parse_courses(r#"[{"title": "Untitled id"}]"#).unwrap();
        let ListView::Items(items) = ListView::from_courses(&courses, Some(0)) else {
            panic!("Expected ListView::Items variant");
        };

        let details = formatted_details(&courses[0]);
        assert_eq!(details.id, "");
        assert_eq!(details.id, items[0].id);
    }

    #[test]
    fn test_list_view_marks_selection() {
        let courses = parse_courses(r#"[{"id": "A"}, {"id": "B"}]"#).unwrap();
        let ListView::Items(items) = ListView::from_courses(&courses, Some(1)) else {
            panic!("Expected ListView::Items variant");
        };
        assert!(!items[0].selected);
        assert!(items[1].selected);
    }

    #[test]
    fn test_empty_list_reports_no_matches() {
        let list = ListView::from_courses(&[], None);
        assert_eq!(list, ListView::NoMatches);
        assert_eq!(list.message(), Some(NO_MATCHES_MESSAGE));
        assert_eq!(DetailView::NoMatches.message(), Some(NO_MATCHES_DETAIL));
    }
}
