use models::{
    course_record::CourseRecord,
    facet::{FacetField, WILDCARD},
    field_value::FieldValue,
};
use serde::{Serialize, Serializer};
use std::{collections::HashSet, iter};
use strum::IntoEnumIterator;

/// The distinct values observed for one facet, in order of first appearance
#[derive(Debug, Clone, PartialEq)]
pub struct FacetDomain {
    pub field: FacetField,
    pub values: Vec<FieldValue>,
}

impl FacetDomain {
    /// Selectable option labels, starting with the wildcard
    pub fn options(&self) -> impl Iterator<Item = String> + '_ {
        iter::once(WILDCARD.to_string()).chain(self.values.iter().map(FieldValue::label))
    }
}

impl Serialize for FacetDomain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.options())
    }
}

/// Facet domains for every [`FacetField`], in [`FacetField`] order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetIndex {
    pub department: FacetDomain,
    pub level: FacetDomain,
    pub credits: FacetDomain,
    pub instructor: FacetDomain,
}

impl FacetIndex {
    pub fn get(&self, field: FacetField) -> &FacetDomain {
        match field {
            FacetField::Department => &self.department,
            FacetField::Level => &self.level,
            FacetField::Credits => &self.credits,
            FacetField::Instructor => &self.instructor,
        }
    }

    pub fn domains(&self) -> impl Iterator<Item = &FacetDomain> {
        FacetField::iter().map(|field| self.get(field))
    }
}

pub struct FacetService;

impl FacetService {
    /// Derives the facet domains of a full record set
    ///
    /// # Returns
    /// `None` for an empty set, so existing domains can be left as they are
    pub fn build_facets(courses: &[CourseRecord]) -> Option<FacetIndex> {
        if courses.is_empty() {
            return None;
        }

        Some(FacetIndex {
            department: Self::build_domain(courses, FacetField::Department),
            level: Self::build_domain(courses, FacetField::Level),
            credits: Self::build_domain(courses, FacetField::Credits),
            instructor: Self::build_domain(courses, FacetField::Instructor),
        })
    }

    /// Collects distinct values by type-preserving equality, so `3` and `"3"` both appear
    fn build_domain(courses: &[CourseRecord], field: FacetField) -> FacetDomain {
        let mut seen = HashSet::new();
        let values = courses
            .iter()
            .map(|course| field.value_of(course))
            .filter(|value| seen.insert(*value))
            .cloned()
            .collect();

        FacetDomain { field, values }
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
                {"id": "CS303", "department": "CS", "level": "200", "credits": "3", "instructor": "Smith"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_set_has_no_facets() {
        assert!(FacetService::build_facets(&[]).is_none());
    }

    #[test]
    fn test_domains_start_with_wildcard() {
        let index = FacetService::build_facets(&courses()).unwrap();
        for domain in index.domains() {
            assert_eq!(domain.options().next().as_deref(), Some(WILDCARD));
        }
    }

    #[test]
    fn test_first_appearance_order() {
        let index = FacetService::build_facets(&courses()).unwrap();
        let departments: Vec<_> = index.department.options().collect();
        assert_eq!(departments, vec!["All", "CS", "MATH"]);

        let instructors: Vec<_> = index.instructor.options().collect();
        assert_eq!(instructors, vec!["All", "Smith", "TBA", "Jones"]);
    }

    #[test]
    fn test_dedup_preserves_value_type() {
        let index = FacetService::build_facets(&courses()).unwrap();

        // Numeric 200 and text "200" are distinct facet values with the same label
        assert_eq!(
            index.level.values,
            vec![
                FieldValue::Number(100.0),
                FieldValue::Number(200.0),
                FieldValue::text("200"),
            ]
        );
        let credits: Vec<_> = index.credits.options().collect();
        assert_eq!(credits, vec!["All", "3", "4", "3"]);
    }

    #[test]
    fn test_each_observed_value_once() {
        let index = FacetService::build_facets(&courses()).unwrap();
        for domain in index.domains() {
            let unique: HashSet<_> = domain.values.iter().collect();
            assert_eq!(unique.len(), domain.values.len());
        }
    }

    #[test]
    fn test_serializes_as_option_labels() {
        let index = FacetService::build_facets(&courses()).unwrap();
        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json["department"], serde_json::json!(["All", "CS", "MATH"]));
    }
}
