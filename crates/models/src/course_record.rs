use crate::{field_value::FieldValue, semester::semester_value};
use serde::Serialize;
use serde_json::{Map, Value};

/// Instructor shown when an entry does not name one
pub const DEFAULT_INSTRUCTOR: &str = "TBA";

/// Represents a single course entry from a catalog file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    /// Course identifier (e.g., "CS101"), used as the display key
    pub id: FieldValue,
    pub title: FieldValue,
    pub department: FieldValue,
    /// Course level, numeric or textual (e.g., 100 or "Graduate")
    pub level: FieldValue,
    /// Credit count, numeric or textual
    pub credits: FieldValue,
    /// Defaults to [`DEFAULT_INSTRUCTOR`] when absent or `null`
    pub instructor: FieldValue,
    pub description: FieldValue,
    /// Semester offered, in the form `"<Term> <Year>"` (e.g., "Fall 2023")
    pub semester: FieldValue,
}

impl CourseRecord {
    /// Builds a record from a JSON object, ignoring unknown keys
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        let field = |key: &str| FieldValue::from_json(obj.get(key));

        let instructor = match field("instructor") {
            value if value.is_blank() => FieldValue::text(DEFAULT_INSTRUCTOR),
            value => value,
        };

        Self {
            id: field("id"),
            title: field("title"),
            department: field("department"),
            level: field("level"),
            credits: field("credits"),
            instructor,
            description: field("description"),
            semester: field("semester"),
        }
    }

    /// The label shown in course lists
    pub fn display_id(&self) -> String {
        self.id.sort_text()
    }

    /// Chronological rank of this record's semester; non-text semesters rank 0
    pub fn semester_rank(&self) -> u64 {
        semester_value(self.semester.as_text())
    }
}
