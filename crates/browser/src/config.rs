use crate::render::OutputFormat;
use catalog::services::sort::SortKey;
use clap::Parser;
use models::facet::FacetField;
use std::{path::PathBuf, str::FromStr};

/// Command-line arguments for course-browser
#[derive(Parser, Debug)]
#[command(name = "course-browser")]
#[command(about = "Browse a JSON course catalog: filter by facet, sort, and inspect courses")]
#[command(version)]
pub struct Args {
    /// Catalog file (a JSON array of course objects) to load at startup
    #[arg(env = "COURSE_BROWSER_FILE")]
    pub file: Option<PathBuf>,

    /// Initial sort key (idAZ, idZA, titleAZ, titleZA, semEarliest, semLatest)
    #[arg(short, long, default_value = "", env = "COURSE_BROWSER_SORT")]
    pub sort: String,

    /// Output format
    #[arg(
        short,
        long,
        default_value = "text",
        env = "COURSE_BROWSER_FORMAT",
        value_parser = OutputFormat::from_str
    )]
    pub format: OutputFormat,

    /// Initial department selection
    #[arg(long, value_name = "VALUE")]
    pub department: Option<String>,

    /// Initial level selection
    #[arg(long, value_name = "VALUE")]
    pub level: Option<String>,

    /// Initial credits selection
    #[arg(long, value_name = "VALUE")]
    pub credits: Option<String>,

    /// Initial instructor selection
    #[arg(long, value_name = "VALUE")]
    pub instructor: Option<String>,

    /// Render once after startup and exit instead of reading commands
    #[arg(short, long)]
    pub batch: bool,
}

/// Resolved startup settings
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    pub file: Option<PathBuf>,
    pub sort_key: SortKey,
    pub format: OutputFormat,
    /// Selections given on the command line, applied after the startup load
    pub selections: Vec<(FacetField, String)>,
    pub batch: bool,
}

impl From<Args> for BrowserConfig {
    fn from(args: Args) -> Self {
        let selections = [
            (FacetField::Department, args.department),
            (FacetField::Level, args.level),
            (FacetField::Credits, args.credits),
            (FacetField::Instructor, args.instructor),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect();

        Self {
            file: args.file,
            sort_key: SortKey::parse_lenient(&args.sort),
            format: args.format,
            selections,
            batch: args.batch,
        }
    }
}
