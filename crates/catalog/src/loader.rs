use crate::error::{CatalogError, Result};
use log::debug;
use models::course_record::CourseRecord;
use serde_json::Value;
use std::path::Path;

/// Reads a catalog file into memory without interpreting it
///
/// Bytes that are not valid UTF-8 become U+FFFD, so only I/O failures are
/// read errors and everything else is left for [`parse_courses`] to judge.
pub async fn read_catalog(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading catalog from {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parses catalog text into course records, preserving entry order
///
/// # Errors
/// [`CatalogError::Structural`] if the text is not JSON, the root is not an
/// array, or any entry is not an object. Missing fields never fail.
pub fn parse_courses(text: &str) -> Result<Vec<CourseRecord>> {
    let Value::Array(entries) = serde_json::from_str::<Value>(text)? else {
        return Err(CatalogError::Structural(
            "JSON root must be an array.".to_string(),
        ));
    };

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| match entry {
            Value::Object(obj) => Ok(CourseRecord::from_object(obj)),
            _ => Err(CatalogError::Structural(format!(
                "Entry {idx} is not an object."
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{course_record::DEFAULT_INSTRUCTOR, field_value::FieldValue};

    #[test]
    fn test_parse_preserves_order_and_length() {
        let text = r#"[
            {"id": "CS300", "title": "Compilers"},
            {"id": "CS100", "title": "Intro"},
            {"id": "CS200", "title": "Data Structures"}
        ]"#;

        let courses = parse_courses(text).unwrap();
        let ids: Vec<_> = courses.iter().map(|c| c.display_id()).collect();
        assert_eq!(ids, vec!["CS300", "CS100", "CS200"]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_courses("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            parse_courses("{not json"),
            Err(CatalogError::Structural(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_array_root() {
        let err = parse_courses(r#"{"id": "CS101"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Structural(ref msg) if msg.contains("array")));
    }

    #[test]
    fn test_parse_rejects_non_object_entry() {
        let err = parse_courses(r#"[{"id": "A"}, null]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Structural(ref msg) if msg.contains("Entry 1")));
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let courses = parse_courses(r#"[{}]"#).unwrap();
        assert_eq!(courses[0].id, FieldValue::Missing);
        assert_eq!(courses[0].instructor, FieldValue::text(DEFAULT_INSTRUCTOR));
    }

    #[tokio::test]
    async fn test_read_catalog_replaces_invalid_utf8() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("latin1.json");
        tokio::fs::write(&path, b"[{\"id\": \"CS\xe9101\"}]").await.unwrap();

        let text = read_catalog(&path).await.unwrap();
        assert_eq!(text, "[{\"id\": \"CS\u{fffd}101\"}]");
    }

    #[tokio::test]
    async fn test_read_catalog_missing_file() {
        let err = read_catalog("/nonexistent/catalog.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
