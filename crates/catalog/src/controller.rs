use crate::{
    error::CatalogError,
    loader::{parse_courses, read_catalog},
    presentation::{DetailView, INVALID_FORMAT_ERROR, ListView, READ_ERROR, formatted_details},
    services::{
        facets::{FacetIndex, FacetService},
        filter::FilterService,
        sort::{SortKey, SortService},
    },
    state::{CatalogState, Phase, Surface},
};
use log::{debug, info, warn};
use models::facet::{FacetField, FacetSelections};
use serde::Serialize;
use std::path::Path;

/// A user action against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw catalog text was read successfully
    Load(String),
    /// The catalog file could not be read
    ReadFailed(String),
    SetFilter { field: FacetField, value: String },
    SetSort(SortKey),
    /// Select the course at this index of the working set
    Select(usize),
}

/// Snapshot of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub phase: Phase,
    pub error: Option<String>,
    pub facets: Option<FacetIndex>,
    pub selections: FacetSelections,
    pub sort_key: SortKey,
    pub list: ListView,
    pub detail: DetailView,
}

/// Owns the catalog state and runs the filter, sort and select pipeline for each command
#[derive(Debug, Default)]
pub struct CatalogController {
    state: CatalogState,
}

impl CatalogController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Applies a command and returns the view to render
    pub fn dispatch(&mut self, command: Command) -> View {
        match command {
            Command::Load(text) => self.on_load(&text),
            Command::ReadFailed(message) => self.on_read_error(&message),
            Command::SetFilter { field, value } => self.on_filter_change(field, value),
            Command::SetSort(key) => self.on_sort_change(key),
            Command::Select(idx) => self.on_select(idx),
        }
        self.view()
    }

    /// Reads a catalog file and dispatches the outcome
    pub async fn load_file(&mut self, path: impl AsRef<Path>) -> View {
        let command = match read_catalog(path).await {
            Ok(text) => Command::Load(text),
            Err(err) => Command::ReadFailed(err.to_string()),
        };
        self.dispatch(command)
    }

    /// Replaces the full set with freshly parsed records
    ///
    /// A structural failure clears both sets and invalidates the display.
    pub fn on_load(&mut self, text: &str) {
        match parse_courses(text) {
            Ok(courses) => {
                info!("Loaded {} courses", courses.len());

                // Empty catalogs leave the existing facet domains and selections alone
                if let Some(facets) = FacetService::build_facets(&courses) {
                    self.state.facets = Some(facets);
                    self.state.selections = FacetSelections::default();
                }

                self.state.full_set = courses;
                self.state.phase = Phase::Loaded;
                self.state.error = None;
                self.apply_filters();
            }
            Err(err) => self.fail_load(&err),
        }
    }

    /// Reports an unreadable file without touching the loaded catalog
    pub fn on_read_error(&mut self, message: &str) {
        warn!("{message}");
        self.state.error = Some(READ_ERROR.to_string());
    }

    pub fn on_filter_change(&mut self, field: FacetField, value: impl Into<String>) {
        self.state.selections.set(field, value);
        self.apply_filters();
    }

    /// Re-sorts the current working set without re-filtering
    pub fn on_sort_change(&mut self, key: SortKey) {
        self.state.sort_key = key;
        self.apply_sorting();
    }

    /// Moves the selection; out-of-range indices are ignored
    pub fn on_select(&mut self, idx: usize) {
        if idx < self.state.working_set.len() {
            self.state.selected = Some(idx);
        } else {
            warn!(
                "Ignoring selection {idx}: only {} courses listed",
                self.state.working_set.len()
            );
        }
    }

    /// Builds the current view snapshot
    pub fn view(&self) -> View {
        let state = &self.state;

        let (list, detail) = match state.surface {
            Surface::Idle => (ListView::Idle, DetailView::Idle),
            Surface::Cleared => (ListView::Cleared, DetailView::CouldNotLoad),
            Surface::Results => (
                ListView::from_courses(&state.working_set, state.selected),
                state
                    .selected_course()
                    .map_or(DetailView::NoMatches, |course| {
                        DetailView::Course(formatted_details(course))
                    }),
            ),
        };

        View {
            phase: state.phase,
            error: state.error.clone(),
            facets: state.facets.clone(),
            selections: state.selections.clone(),
            sort_key: state.sort_key,
            list,
            detail,
        }
    }

    fn fail_load(&mut self, err: &CatalogError) {
        warn!("Failed to load catalog: {err}");

        self.state.full_set.clear();
        self.state.working_set.clear();
        self.state.selected = None;
        self.state.phase = Phase::Failed;
        self.state.surface = Surface::Cleared;
        self.state.error = Some(INVALID_FORMAT_ERROR.to_string());
    }

    /// Rebuilds the working set from the full set, then applies the current sort
    fn apply_filters(&mut self) {
        self.state.working_set =
            FilterService::filter_courses(&self.state.full_set, &self.state.selections);
        debug!(
            "Filtered {} of {} courses",
            self.state.working_set.len(),
            self.state.full_set.len()
        );
        self.apply_sorting();
    }

    fn apply_sorting(&mut self) {
        SortService::sort_courses(&mut self.state.working_set, self.state.sort_key);
        // Nothing has been loaded yet, so there are no results to show
        if self.state.phase != Phase::Idle {
            self.state.surface = Surface::Results;
        }
        self.state.reset_selection();
    }
}
