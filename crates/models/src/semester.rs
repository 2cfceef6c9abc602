use serde::Serialize;
use std::str::FromStr;
use strum::{Display, EnumString};

/// Academic term, in calendar order within a year
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumString,
)]
pub enum Term {
    Winter = 1,
    Spring = 2,
    Summer = 3,
    Fall = 4,
}

impl Term {
    pub fn ordinal(self) -> u64 {
        self as u64
    }
}

/// Parses the leading run of digits of `s` as a positive year, ignoring trailing junk
fn leading_year(s: &str) -> Option<u64> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse::<u64>().ok().filter(|year| *year > 0)
}

/// Chronological rank of a `"<Term> <Year>"` string: `year * 10 + term ordinal`
///
/// A semester with an unknown term or a missing, zero or non-numeric year is
/// malformed and ranks 0, below every well-formed semester.
pub fn semester_value(semester: Option<&str>) -> u64 {
    let Some(semester) = semester.filter(|s| !s.is_empty()) else {
        return 0;
    };

    let mut parts = semester.split(' ');
    let term = parts.next().and_then(|t| Term::from_str(t).ok());
    let year = parts.next().and_then(leading_year);

    match (term, year) {
        (Some(term), Some(year)) => year.saturating_mul(10).saturating_add(term.ordinal()),
        _ => 0,
    }
}
