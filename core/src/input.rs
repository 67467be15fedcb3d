//! Text-field helpers shared by every numeric entry in the app.

use crate::bounds::Bounds;

pub const ANSWER_MAX_LEN: usize = 5;
pub const BOUND_MAX_LEN: usize = 4;

/// Drops every character that is neither an ASCII digit nor `-`.
pub fn filter_numeric(text: &mut String) {
    text.retain(|c| c.is_ascii_digit() || c == '-');
}

pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Both fields parse and form a valid range.
pub fn parse_bounds(min_text: &str, max_text: &str) -> Option<Bounds> {
    let min = parse_integer(min_text)?;
    let max = parse_integer(max_text)?;
    Bounds::new(min, max).ok()
}
