//! Turning user text into typed edit values.

use story_model::{normalize_days, Day, EditError};

/// Parse an integer, e.g. a branch day.
pub fn parse_int(input: &str) -> Result<i64, EditError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| EditError::NotAnInteger(trimmed.to_string()))
}

/// Parse a non-negative death count.
pub fn parse_count(input: &str) -> Result<u32, EditError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| EditError::NotAnInteger(trimmed.to_string()))
}

/// Parse a menu selection.
pub fn parse_index(input: &str) -> Result<usize, EditError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| EditError::NotAnInteger(trimmed.to_string()))
}

/// Parse a comma-separated day list.
///
/// Tokens that are not integers are dropped; the rest come back sorted.
pub fn parse_days(input: &str) -> Vec<Day> {
    let mut days: Vec<Day> = input
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect();
    normalize_days(&mut days);
    days
}
