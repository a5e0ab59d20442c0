mod detail;
mod identity;
mod listing;
pub(crate) mod patterns;

#[cfg(test)]
pub(crate) mod fixtures;

pub use detail::DetailExtractor;
pub use listing::{CourseLink, ListingExtractor};

use crate::models::StudentIdentity;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static TOKEN_INPUT: LazyLock<Selector> =
    LazyLock::new(|| patterns::selector(r#"input[name="__RequestVerificationToken"]"#));

/// One parsed portal page. Every query borrows the document and leaves it as is.
pub struct Extractor {
    document: Html,
}

impl Extractor {
    pub fn new(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn listing(&self) -> ListingExtractor<'_> {
        ListingExtractor::new(&self.document)
    }

    pub fn detail(&self) -> DetailExtractor<'_> {
        DetailExtractor::new(&self.document)
    }

    pub fn identity(&self) -> StudentIdentity {
        identity::extract(&self.document)
    }

    /// Value of the login form's hidden anti-forgery field, if present and non-empty.
    pub fn verification_token(&self) -> Option<String> {
        self.document
            .select(&TOKEN_INPUT)
            .next()?
            .value()
            .attr("value")
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_verification_token() {
        let extractor = Extractor::new(fixtures::LOGIN_PAGE);
        assert_eq!(extractor.verification_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert!(Extractor::new(fixtures::LOGIN_PAGE_WITHOUT_TOKEN)
            .verification_token()
            .is_none());
        assert!(Extractor::new(
            r#"<input name="__RequestVerificationToken" type="hidden" value="">"#
        )
        .verification_token()
        .is_none());
    }
}
