//! Menu listing extraction
//!
//! Not dispatched by the link classifier; callers that fetch a business's
//! menu page run it directly.

use super::dom::{root, Lookup};
use crate::model::MenuItem;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static MENU_ENTRY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.rstdtl-menu-lst__contents")
        .expect("Failed to parse menu entry selector - this is a bug")
});
static MENU_NAME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".rstdtl-menu-lst__menu-title")
        .expect("Failed to parse menu name selector - this is a bug")
});
static MENU_PRICE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".rstdtl-menu-lst__price")
        .expect("Failed to parse menu price selector - this is a bug")
});
static MENU_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".rstdtl-menu-lst__ex")
        .expect("Failed to parse menu description selector - this is a bug")
});

/// Parses every menu entry on a page, in document order
///
/// Entries without a name are dropped.
pub fn extract_menu_items(document: &Html) -> Vec<MenuItem> {
    root(document)
        .select(&MENU_ENTRY)
        .filter_map(|entry| {
            let Some(name) = Lookup::content(&MENU_NAME).find(entry) else {
                tracing::debug!("Dropping menu entry without a name");
                return None;
            };

            Some(MenuItem {
                name,
                price: Lookup::content(&MENU_PRICE).find(entry),
                description: Lookup::content(&MENU_DESCRIPTION).find(entry),
            })
        })
        .collect()
}
