//! Deterministic filename suggestions for generated documents

use chrono::{Local, NaiveDate};
use expediente_types::Template;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^\p{Alphabetic}\p{N}\s]+").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

const MAX_TITLE_CHARS: usize = 30;
const MAX_ID_CHARS: usize = 20;

/// Build a filename from the template title, the case id and a calendar
/// date. Deterministic: the same inputs always produce the same name.
pub fn suggest_filename(template: &Template, case_id: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.docx",
        sanitize(&template.title, MAX_TITLE_CHARS),
        sanitize(case_id, MAX_ID_CHARS),
        date.format("%Y-%m-%d")
    )
}

/// Convenience wrapper using today's date
pub fn suggest_filename_today(template: &Template, case_id: &str) -> String {
    suggest_filename(template, case_id, Local::now().date_naive())
}

/// Strip everything that is not alphanumeric or whitespace, collapse
/// whitespace runs into single underscores, and cap the length.
fn sanitize(input: &str, max_chars: usize) -> String {
    let stripped = DISALLOWED.replace_all(input, "");
    let underscored = WHITESPACE.replace_all(stripped.trim(), "_");
    underscored.chars().take(max_chars).collect()
}
