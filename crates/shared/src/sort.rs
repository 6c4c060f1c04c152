use std::cmp::Ordering;

use crate::domain::{GameRecord, SortKey};

/// Orders records in place for display. The sort is stable.
///
/// Titles compare case-insensitively first so "celeste" and "Celeste" sit
/// together, with the exact title as tie-break. Records without a release
/// year trail the dated ones.
pub fn sort_games(records: &mut [GameRecord], key: SortKey) {
    match key {
        SortKey::Title => records.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::ReleaseYear => {
            records.sort_by(|a, b| compare_years(a.release_year, b.release_year))
        }
    }
}

pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_years(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
