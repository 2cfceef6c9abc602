use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Compares two strings the way a reader expects a listing to be ordered
///
/// Base letters compare first, ignoring case and accents. Ties go to the
/// unaccented string, then to lowercase at the first case difference, then
/// to code point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

/// Lowercased base letters with combining marks removed
fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased decomposition, marks kept
fn accent_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Tie-break for strings equal up to case
fn compare_case(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
}
