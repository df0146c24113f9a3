//! Small structural-query helpers over parsed pages

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Where a field's text is read from once its element is found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// The element's first non-blank direct text node
    Own,
    /// All descendant text, concatenated
    Content,
}

/// One candidate location for a field
#[derive(Debug, Clone, Copy)]
pub struct Lookup {
    pub selector: &'static LazyLock<Selector>,
    pub source: TextSource,
}

impl Lookup {
    pub const fn own(selector: &'static LazyLock<Selector>) -> Self {
        Self {
            selector,
            source: TextSource::Own,
        }
    }

    pub const fn content(selector: &'static LazyLock<Selector>) -> Self {
        Self {
            selector,
            source: TextSource::Content,
        }
    }

    /// Returns the first non-empty trimmed text among matching elements
    pub fn find(&self, scope: ElementRef<'_>) -> Option<String> {
        scope
            .select(self.selector)
            .find_map(|element| read_text(element, self.source))
    }

    /// Returns every non-empty trimmed text among matching elements, in order
    pub fn find_all(&self, scope: ElementRef<'_>) -> Vec<String> {
        scope
            .select(self.selector)
            .filter_map(|element| read_text(element, self.source))
            .collect()
    }
}

/// Tries each location in order; the first that yields text wins
pub fn first_match(scope: ElementRef<'_>, chain: &[Lookup]) -> Option<String> {
    chain.iter().find_map(|lookup| lookup.find(scope))
}

/// Returns the whole-document scope for lookups
pub fn root(document: &Html) -> ElementRef<'_> {
    document.root_element()
}

/// Reads text from an element and trims it; blank text counts as absent
pub fn read_text(element: ElementRef<'_>, source: TextSource) -> Option<String> {
    match source {
        TextSource::Own => own_text(element),
        TextSource::Content => non_blank(&element.text().collect::<String>()),
    }
}

/// First non-blank text node directly under the element, trimmed
pub fn own_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .find_map(|text| non_blank(text))
}

/// Next sibling that is an element, skipping text and comments
pub fn next_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// Returns true if any element matches
pub fn exists(scope: ElementRef<'_>, selector: &Selector) -> bool {
    scope.select(selector).next().is_some()
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
