// Input checks shared by the add and edit flows.
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DUE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid due date regex"));

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Lowercases and strips combining diacritics, so "Fácil" and "facil" compare equal.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Shape check only: month 13 or day 40 still pass.
pub fn is_valid_due_date(input: &str) -> bool {
    DUE_DATE_RE.is_match(input)
}
