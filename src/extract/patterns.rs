//! Patterns and text helpers shared by the extractors.
//!
//! The regexes record how the portal formats its markup. Each is applied with
//! `captures`/`find`, so the first match in the text always wins.

use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

pub(crate) static CLASS_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ViewClassPopUp\((\d+)").unwrap());

pub(crate) static SECTION_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ViewAssignmentsRCPopUp\((\d+)").unwrap());

pub(crate) static COURSE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Z0-9]+)").unwrap());

pub(crate) static PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Per:\s*([^\s]+)").unwrap());

pub(crate) static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

pub(crate) static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("hard-coded selector must parse")
}

/// All text below `element`, trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant matching `selector`, or `""`.
pub(crate) fn first_text(scope: &ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|element| element_text(&element))
        .unwrap_or_default()
}

/// First capture group of the first match.
pub(crate) fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First decimal number in `text`. Stray dots such as `Avg.` are skipped.
pub(crate) fn first_number(text: &str) -> Option<f64> {
    NUMBER_RE.find(text)?.as_str().parse().ok()
}

pub(crate) fn first_percentage(text: &str) -> Option<f64> {
    capture(&PERCENT_RE, text)?.parse().ok()
}

/// Collapses whitespace runs to one space and trims.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_number_takes_leading_decimal() {
        assert_eq!(first_number("94.2 (A)"), Some(94.2));
        assert_eq!(first_number("Avg 88"), Some(88.0));
        assert_eq!(first_number("A"), None);
        assert_eq!(first_number(""), None);
        assert_eq!(first_number(". 90"), Some(90.0));
        assert_eq!(first_number("Avg. 94.2"), Some(94.2));
        assert_eq!(first_number("100."), Some(100.0));
    }

    #[test]
    fn percentage_needs_percent_sign() {
        assert_eq!(first_percentage("Student Grades 91.35%"), Some(91.35));
        assert_eq!(first_percentage("91.35"), None);
        assert_eq!(first_percentage("12 of 80.5% and 70%"), Some(80.5));
    }

    #[test]
    fn captures_first_match_only() {
        assert_eq!(
            capture(&CLASS_ID_RE, "ViewClassPopUp(4521, 1); ViewClassPopUp(99, 1)"),
            Some("4521".to_string())
        );
        assert_eq!(
            capture(&COURSE_CODE_RE, "(BIO201A - 3) (ZZZ)"),
            Some("BIO201A".to_string())
        );
        assert_eq!(capture(&PERIOD_RE, "Per: 3 Room 210"), Some("3".to_string()));
        assert_eq!(capture(&PERIOD_RE, "Period 3"), None);
    }

    #[test]
    fn normalizes_inner_whitespace() {
        assert_eq!(normalize_whitespace("  AP \n  Biology\t"), "AP Biology");
    }
}
