use super::collate::locale_compare;
use log::debug;
use models::course_record::CourseRecord;
use serde::Serialize;
use std::{cmp::Ordering, str::FromStr};
use strum::{Display, EnumString};

/// Ordering applied to the working set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum SortKey {
    #[strum(to_string = "idAZ", serialize = "id-asc")]
    #[serde(rename = "idAZ")]
    IdAscending,
    #[strum(to_string = "idZA", serialize = "id-desc")]
    #[serde(rename = "idZA")]
    IdDescending,
    #[strum(to_string = "titleAZ", serialize = "title-asc")]
    #[serde(rename = "titleAZ")]
    TitleAscending,
    #[strum(to_string = "titleZA", serialize = "title-desc")]
    #[serde(rename = "titleZA")]
    TitleDescending,
    #[strum(to_string = "semEarliest", serialize = "earliest")]
    #[serde(rename = "semEarliest")]
    SemesterEarliest,
    #[strum(to_string = "semLatest", serialize = "latest")]
    #[serde(rename = "semLatest")]
    SemesterLatest,
    /// Leaves the current order alone
    #[default]
    #[strum(to_string = "", serialize = "none")]
    #[serde(rename = "")]
    None,
}

impl SortKey {
    /// Parses a key name, treating anything unrecognized as [`SortKey::None`]
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_str(name.trim()).unwrap_or_default()
    }
}

pub struct SortService;

impl SortService {
    /// Stably reorders the working set in place
    pub fn sort_courses(courses: &mut [CourseRecord], key: SortKey) {
        debug!("Sorting {} courses by {key:?}", courses.len());

        match key {
            SortKey::IdAscending => courses.sort_by(|a, b| Self::compare_ids(a, b)),
            SortKey::IdDescending => courses.sort_by(|a, b| Self::compare_ids(b, a)),
            SortKey::TitleAscending => courses.sort_by(|a, b| Self::compare_titles(a, b)),
            SortKey::TitleDescending => courses.sort_by(|a, b| Self::compare_titles(b, a)),
            SortKey::SemesterEarliest => courses.sort_by_key(CourseRecord::semester_rank),
            SortKey::SemesterLatest => {
                courses.sort_by(|a, b| b.semester_rank().cmp(&a.semester_rank()))
            }
            SortKey::None => {}
        }
    }

    fn compare_ids(a: &CourseRecord, b: &CourseRecord) -> Ordering {
        locale_compare(&a.id.sort_text(), &b.id.sort_text())
    }

    fn compare_titles(a: &CourseRecord, b: &CourseRecord) -> Ordering {
        locale_compare(&a.title.sort_text(), &b.title.sort_text())
    }
}
