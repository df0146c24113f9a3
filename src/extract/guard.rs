//! Challenge-page detection
//!
//! Every genuine page carries the header logo link with a text node. Bot
//! checks and interstitial redirects do not, so its absence means the body
//! must not be parsed and the URL has to be fetched again.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static HEADER_LOGO: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a.p-header__logo-img").expect("Failed to parse header logo selector - this is a bug")
});

/// Returns true if the document is a genuine content page
pub fn is_genuine_page(document: &Html) -> bool {
    document.select(&HEADER_LOGO).any(|logo| {
        logo.children()
            .any(|child| child.value().as_text().is_some())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_with_logo_is_genuine() {
        let html = Html::parse_document(
            r#"<html><body><header><a class="p-header__logo-img" href="/">食べログ</a></header></body></html>"#,
        );
        assert!(is_genuine_page(&html));
    }

    #[test]
    fn test_logo_with_extra_classes_is_genuine() {
        let html = Html::parse_document(
            r#"<html><body><a class="p-header__logo-img js-logo" href="/">Tabelog</a></body></html>"#,
        );
        assert!(is_genuine_page(&html));
    }

    #[test]
    fn test_challenge_page_is_not_genuine() {
        let html = Html::parse_document(
            r#"<html><head><title>Just a moment...</title></head><body><div id="challenge"></div></body></html>"#,
        );
        assert!(!is_genuine_page(&html));
    }

    #[test]
    fn test_logo_without_text_is_not_genuine() {
        let html = Html::parse_document(
            r#"<html><body><a class="p-header__logo-img" href="/"><img src="logo.png"></a></body></html>"#,
        );
        assert!(!is_genuine_page(&html));
    }

    #[test]
    fn test_empty_body_is_not_genuine() {
        assert!(!is_genuine_page(&Html::parse_document("")));
    }
}
