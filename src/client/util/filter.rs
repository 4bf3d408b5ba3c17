use std::str::FromStr;

use crate::model::course::{Course, Difficulty};

/// Narrows `courses` to those matching the search box and difficulty selector
///
/// A course matches when its title contains `query` ignoring case and, if `difficulty` is
/// set, its difficulty is exactly that level. Matches keep their original order.
pub fn filter_courses<'a>(
    courses: &'a [Course],
    query: &str,
    difficulty: Option<Difficulty>,
) -> Vec<&'a Course> {
    let query = query.to_lowercase();

    courses
        .iter()
        .filter(|course| course.title.to_lowercase().contains(&query))
        .filter(|course| difficulty.map_or(true, |level| course.difficulty == level))
        .collect()
}

/// Maps a difficulty selector value to a filter, the empty option means every level
pub fn parse_difficulty_filter(value: &str) -> Option<Difficulty> {
    if value.is_empty() {
        return None;
    }

    Difficulty::from_str(value).ok()
}
