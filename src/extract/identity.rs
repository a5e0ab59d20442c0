use super::patterns::{normalize_whitespace, selector};
use crate::log_debug;
use crate::models::StudentIdentity;
use scraper::{Html, Selector};
use std::sync::LazyLock;

// Newest skin first.
static NAME_CANDIDATES: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        ".sg-banner-menu-element.sg-menu-element-identity span",
        "#plnMain_lblStudentName",
        ".StudentName",
        "#lblStudentName",
        r#"span[id*="StudentName"]"#,
    ]
    .into_iter()
    .map(selector)
    .collect()
});

pub(super) fn extract(document: &Html) -> StudentIdentity {
    let name = NAME_CANDIDATES
        .iter()
        .find_map(|candidate| {
            document
                .select(candidate)
                .next()
                .map(|element| normalize_whitespace(&element.text().collect::<String>()))
                .filter(|name| !name.is_empty())
        })
        .unwrap_or_default();

    if name.is_empty() {
        log_debug!("[extract] No student name found on page");
    }

    StudentIdentity { name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures;

    fn name_of(html: &str) -> String {
        extract(&Html::parse_document(html)).name
    }

    #[test]
    fn reads_banner_identity() {
        assert_eq!(name_of(fixtures::WEEK_VIEW), "Jane Doe");
    }

    #[test]
    fn falls_back_to_legacy_label() {
        assert_eq!(name_of(fixtures::LEGACY_CLASSES), "Doe, Jane");
    }

    #[test]
    fn skips_empty_candidates() {
        let html = r#"<span id="plnMain_lblStudentName">  </span>
            <div class="StudentName">Sam Roe</div>"#;
        assert_eq!(name_of(html), "Sam Roe");
    }

    #[test]
    fn partial_id_match_is_last_resort() {
        assert_eq!(
            name_of(r#"<span id="ctl00_StudentNameLabel">Kai</span>"#),
            "Kai"
        );
    }

    #[test]
    fn unknown_page_gives_empty_name() {
        assert_eq!(name_of("<p>nothing here</p>"), "");
    }
}
