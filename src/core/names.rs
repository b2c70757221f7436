use crate::models::seat::is_valid_name;

/// Split a comma-separated batch of names.
///
/// Each piece is trimmed; empty pieces and pieces longer than four
/// characters are dropped without complaint.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| is_valid_name(name))
        .map(str::to_string)
        .collect()
}
