use crate::{course_record::CourseRecord, field_value::FieldValue};
use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Option that places no constraint on a facet
pub const WILDCARD: &str = "All";

/// A course field that can constrain the working set
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FacetField {
    #[strum(to_string = "department", serialize = "dept")]
    Department,
    Level,
    Credits,
    #[strum(to_string = "instructor", serialize = "instr")]
    Instructor,
}

impl FacetField {
    pub fn all() -> Vec<FacetField> {
        FacetField::iter().collect()
    }

    /// The record field this facet reads
    pub fn value_of(self, course: &CourseRecord) -> &FieldValue {
        match self {
            Self::Department => &course.department,
            Self::Level => &course.level,
            Self::Credits => &course.credits,
            Self::Instructor => &course.instructor,
        }
    }

    /// Whether selections compare against the field's label rather than its value
    pub fn compares_as_string(self) -> bool {
        matches!(self, Self::Level | Self::Credits)
    }
}

/// Whether a selection value places no constraint on its facet
pub fn is_unconstrained(selection: &str) -> bool {
    selection.is_empty() || selection == WILDCARD
}

/// The current value chosen for each facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetSelections {
    pub department: String,
    pub level: String,
    pub credits: String,
    pub instructor: String,
}

impl FacetSelections {
    pub fn get(&self, field: FacetField) -> &str {
        match field {
            FacetField::Department => &self.department,
            FacetField::Level => &self.level,
            FacetField::Credits => &self.credits,
            FacetField::Instructor => &self.instructor,
        }
    }

    pub fn set(&mut self, field: FacetField, value: impl Into<String>) {
        let slot = match field {
            FacetField::Department => &mut self.department,
            FacetField::Level => &mut self.level,
            FacetField::Credits => &mut self.credits,
            FacetField::Instructor => &mut self.instructor,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`FacetSelections::set`]
    pub fn with(mut self, field: FacetField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Whether every facet is unconstrained
    pub fn is_unconstrained(&self) -> bool {
        FacetField::iter().all(|field| is_unconstrained(self.get(field)))
    }
}

impl Default for FacetSelections {
    fn default() -> Self {
        Self {
            department: WILDCARD.to_string(),
            level: WILDCARD.to_string(),
            credits: WILDCARD.to_string(),
            instructor: WILDCARD.to_string(),
        }
    }
}
