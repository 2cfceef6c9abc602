use crate::services::{facets::FacetIndex, sort::SortKey};
use models::{course_record::CourseRecord, facet::FacetSelections};
use serde::Serialize;

/// Where the catalog is in its load lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing loaded yet
    #[default]
    Idle,
    Loaded,
    /// The last load failed structurally and the sets were cleared
    Failed,
}

/// What the list and detail views currently show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Nothing has been presented yet
    #[default]
    Idle,
    /// The working set, possibly empty
    Results,
    /// Cleared by a failed load
    Cleared,
}

/// Everything the browser knows about the current catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub phase: Phase,
    pub surface: Surface,
    /// Records from the most recent successful load
    pub full_set: Vec<CourseRecord>,
    /// Filtered and sorted view of the full set
    pub working_set: Vec<CourseRecord>,
    /// Facet domains of the last non-empty load
    pub facets: Option<FacetIndex>,
    pub selections: FacetSelections,
    pub sort_key: SortKey,
    /// Index into the working set of the detailed course
    pub selected: Option<usize>,
    /// User-facing message from the last failed action
    pub error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_course(&self) -> Option<&CourseRecord> {
        self.selected.and_then(|idx| self.working_set.get(idx))
    }

    /// Points the selection at the first course of the working set, if any
    pub fn reset_selection(&mut self) {
        self.selected = (!self.working_set.is_empty()).then_some(0);
    }
}
