pub mod html;
pub mod text;

use catalog::{controller::View, services::facets::FacetIndex};
use models::facet::FacetSelections;
use serde::Serialize;
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to encode view as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct FacetsOutput<'a> {
    facets: &'a Option<FacetIndex>,
    selections: &'a FacetSelections,
}

/// How views are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    /// HTML fragments for a list panel and a detail panel
    Html,
    Json,
}

impl OutputFormat {
    /// Renders the error banner, list and detail of a view
    pub fn render_view(self, view: &View) -> Result<String, RenderError> {
        Ok(match self {
            Self::Text => text::render_view(view),
            Self::Html => html::render_view(view),
            Self::Json => serde_json::to_string_pretty(view)?,
        })
    }

    /// Renders the facet options and current selections
    pub fn render_facets(self, view: &View) -> Result<String, RenderError> {
        Ok(match self {
            Self::Text => text::render_facets(view),
            Self::Html => html::render_facets(view),
            Self::Json => serde_json::to_string_pretty(&FacetsOutput {
                facets: &view.facets,
                selections: &view.selections,
            })?,
        })
    }
}
