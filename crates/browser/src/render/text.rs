use catalog::{
    controller::View,
    presentation::{CourseDetails, DetailView, ListView},
};
use models::facet::FacetField;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Marker placed before the selected list entry
const SELECTED_MARKER: &str = ">";

/// Plain-text rendering of a view
pub fn render_view(view: &View) -> String {
    TextView(view).to_string()
}

/// Lists every facet's options, marking the current selection
pub fn render_facets(view: &View) -> String {
    TextFacets(view).to_string()
}

struct TextView<'a>(&'a View);

impl Display for TextView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let view = self.0;

        if let Some(error) = &view.error {
            writeln!(f, "Error: {error}")?;
        }
        writeln!(f, "{}", Summary(view))?;
        writeln!(f)?;

        match &view.list {
            ListView::Items(items) => {
                for (idx, item) in items.iter().enumerate() {
                    let marker = if item.selected { SELECTED_MARKER } else { " " };
                    writeln!(f, "{marker} {:>3}. {}", idx + 1, item.id)?;
                }
            }
            ListView::NoMatches => writeln!(f, "{}", view.list.message().unwrap_or_default())?,
            ListView::Idle | ListView::Cleared => {}
        }

        writeln!(f)?;
        match &view.detail {
            DetailView::Course(details) => write_details(f, details),
            other => writeln!(f, "{}", other.message().unwrap_or_default()),
        }
    }
}

/// `[sort] department=.. level=.. credits=.. instructor=..`
struct Summary<'a>(&'a View);

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let view = self.0;
        match view.sort_key.to_string() {
            key if key.is_empty() => write!(f, "[unsorted]")?,
            key => write!(f, "[{key}]")?,
        }
        for field in FacetField::all() {
            write!(f, " {field}={}", view.selections.get(field))?;
        }
        Ok(())
    }
}

fn write_details(f: &mut Formatter<'_>, details: &CourseDetails) -> FmtResult {
    writeln!(f, "{}", details.id)?;
    for field in &details.fields {
        writeln!(f, "  {}: {}", field.label, field.value)?;
    }
    writeln!(f)?;
    writeln!(f, "  {}", details.description)
}

struct TextFacets<'a>(&'a View);

impl Display for TextFacets<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let view = self.0;
        let Some(facets) = &view.facets else {
            return writeln!(f, "No facets available; load a catalog first.");
        };

        for domain in facets.domains() {
            let selected = view.selections.get(domain.field);
            write!(f, "{}:", domain.field)?;
            for (idx, option) in domain.options().enumerate() {
                let separator = if idx == 0 { " " } else { ", " };
                if option == selected {
                    write!(f, "{separator}[{option}]")?;
                } else {
                    write!(f, "{separator}{option}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
