use catalog::{
    controller::View,
    presentation::{CourseDetails, DetailView, ListView},
};
use models::facet::FacetField;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Escapes text for use in HTML content and attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Element id of a facet's `<select>`
fn select_id(field: FacetField) -> &'static str {
    match field {
        FacetField::Department => "filterDept",
        FacetField::Level => "filterLevel",
        FacetField::Credits => "filterCredits",
        FacetField::Instructor => "filterInstructor",
    }
}

/// Renders the error banner, course list and detail panel
pub fn render_view(view: &View) -> String {
    HtmlView(view).to_string()
}

/// Renders one `<select>` per facet with the current selection marked
pub fn render_facets(view: &View) -> String {
    HtmlFacets(view).to_string()
}

struct HtmlView<'a>(&'a View);

impl Display for HtmlView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let view = self.0;

        let error = view.error.as_deref().map(escape).unwrap_or_default();
        writeln!(f, r#"<div id="error">{error}</div>"#)?;

        write!(f, r#"<div id="courseList">"#)?;
        match &view.list {
            ListView::Items(items) => {
                writeln!(f)?;
                for item in items {
                    let class = if item.selected {
                        "courseItem selected"
                    } else {
                        "courseItem"
                    };
                    writeln!(f, r#"  <div class="{class}">{}</div>"#, escape(&item.id))?;
                }
            }
            ListView::NoMatches => write!(f, "{}", view.list.message().unwrap_or_default())?,
            ListView::Idle | ListView::Cleared => {}
        }
        writeln!(f, "</div>")?;

        write!(f, r#"<div id="courseDetails">"#)?;
        match &view.detail {
            DetailView::Course(details) => {
                writeln!(f)?;
                write_details(f, details)?;
            }
            other => write!(f, "{}", other.message().unwrap_or_default())?,
        }
        writeln!(f, "</div>")
    }
}

fn write_details(f: &mut Formatter<'_>, details: &CourseDetails) -> FmtResult {
    writeln!(f, "  <h2>{}</h2>", escape(&details.id))?;
    for field in &details.fields {
        writeln!(
            f,
            "  <p><strong>{}:</strong> {}</p>",
            field.label,
            escape(&field.value)
        )?;
    }
    writeln!(f, "  <p>{}</p>", escape(&details.description))
}

struct HtmlFacets<'a>(&'a View);

impl Display for HtmlFacets<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let view = self.0;
        let Some(facets) = &view.facets else {
            return Ok(());
        };

        for domain in facets.domains() {
            let selected = view.selections.get(domain.field);
            writeln!(f, r#"<select id="{}">"#, select_id(domain.field))?;
            for option in domain.options() {
                let marker = if option == selected { " selected" } else { "" };
                let option = escape(&option);
                writeln!(f, r#"  <option value="{option}"{marker}>{option}</option>"#)?;
            }
            writeln!(f, "</select>")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::controller::{CatalogController, Command};

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_details_markup() {
        let mut controller = CatalogController::new();
        let view = controller.dispatch(Command::Load(
            r#"[{"id": "CS101", "title": "Intro <1>", "credits": 3, "description": "Basics"}]"#
                .to_string(),
        ));

        let output = render_view(&view);
        assert!(output.contains(r#"<div class="courseItem selected">CS101</div>"#));
        assert!(output.contains("<h2>CS101</h2>"));
        assert!(output.contains("<p><strong>Title:</strong> Intro &lt;1&gt;</p>"));
        assert!(output.contains("<p><strong>Credits:</strong> 3</p>"));
        assert!(output.contains("<p><strong>Instructor:</strong> TBA</p>"));
        assert!(output.contains("<p>Basics</p>"));
    }

    #[test]
    fn test_failed_load_markup() {
        let mut controller = CatalogController::new();
        let output = render_view(&controller.dispatch(Command::Load("[1".to_string())));

        assert!(output.contains(r#"<div id="error">Invalid JSON file format.</div>"#));
        assert!(output.contains(r#"<div id="courseList"></div>"#));
        assert!(output.contains(r#"<div id="courseDetails">Could not load data.</div>"#));
    }

    #[test]
    fn test_facet_selects() {
        let mut controller = CatalogController::new();
        controller.dispatch(Command::Load(
            r#"[{"id": "A", "department": "CS"}, {"id": "B", "department": "MATH"}]"#.to_string(),
        ));
        let view = controller.dispatch(Command::SetFilter {
            field: FacetField::Department,
            value: "MATH".to_string(),
        });

        let output = render_facets(&view);
        assert!(output.contains(r#"<select id="filterDept">"#));
        assert!(output.contains(r#"<option value="MATH" selected>MATH</option>"#));
        assert!(output.contains(r#"<option value="All">All</option>"#));
        assert!(output.contains(r#"<select id="filterInstructor">"#));
    }
}
