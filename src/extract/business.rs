//! Business detail page extraction

use super::coerce::{integer_or_string, numeric_or_string};
use super::dom::{first_match, root, Lookup};
use crate::model::{Business, Meal};
use crate::url::BusinessPath;
use crate::{ExtractError, ExtractResult};
use scraper::{Html, Selector};
use std::sync::LazyLock;

static NAME_TABLE_CELL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.rstinfo-table > table > tbody > tr > td")
        .expect("Failed to parse name table selector - this is a bug")
});
static NAME_HEADLINE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.rd-header__headline > h2 > a")
        .expect("Failed to parse name headline selector - this is a bug")
});
static NAME_SUBLABEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.rd-header__headline > h2 > small")
        .expect("Failed to parse name sub-label selector - this is a bug")
});
static CATEGORY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"dd.rdheader-subinfo__item-text a[href^="https://tabelog.com/rstLst/"] > span"#)
        .expect("Failed to parse category selector - this is a bug")
});
static TELEPHONE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.rstinfo-table strong.rstinfo-table__tel-num")
        .expect("Failed to parse telephone selector - this is a bug")
});
static STARS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.rdheader-rating__score-val-dtl")
        .expect("Failed to parse stars selector - this is a bug")
});
static PRICE_DINNER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p.rdheader-budget__icon.rdheader-budget__icon--dinner > span > a")
        .expect("Failed to parse dinner price selector - this is a bug")
});
static PRICE_LUNCH: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p.rdheader-budget__icon.rdheader-budget__icon--lunch > span > a")
        .expect("Failed to parse lunch price selector - this is a bug")
});
static REVIEW_COUNT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"em[property="v:count"]"#)
        .expect("Failed to parse review count selector - this is a bug")
});

/// Name locations, most specific first: the info table lists chain-store
/// names, the headline anchor is the usual layout, the sub-label is used by
/// pages whose headline has no link.
static NAME_CHAIN: [Lookup; 3] = [
    Lookup::own(&NAME_TABLE_CELL),
    Lookup::own(&NAME_HEADLINE),
    Lookup::own(&NAME_SUBLABEL),
];

fn price_lookup(meal: Meal) -> Lookup {
    match meal {
        Meal::Dinner => Lookup::own(&PRICE_DINNER),
        Meal::Lunch => Lookup::own(&PRICE_LUNCH),
    }
}

/// Parses a business detail page
///
/// The page must already have passed the validity guard.
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `url` - Final URL of the response; the id and location come from its path
///
/// # Errors
///
/// * `ExtractError::Url` - The URL is not a business URL
/// * `ExtractError::MissingField` - The rating node is absent
pub fn extract_business(document: &Html, url: &str) -> ExtractResult<Business> {
    let path = BusinessPath::parse(url)?;
    let scope = root(document);

    let name = first_match(scope, &NAME_CHAIN);
    if name.is_none() {
        tracing::debug!("No business name found on {}", url);
    }

    let stars = Lookup::own(&STARS)
        .find(scope)
        .map(|raw| numeric_or_string(&raw))
        .ok_or(ExtractError::MissingField { field: "stars" })?;

    Ok(Business {
        business_id: path.business_id,
        name,
        categories: Lookup::own(&CATEGORY).find_all(scope),
        telephone: Lookup::own(&TELEPHONE).find(scope),
        stars,
        price_dinner: price_lookup(Meal::Dinner).find(scope),
        price_lunch: price_lookup(Meal::Lunch).find(scope),
        review_count: Lookup::own(&REVIEW_COUNT)
            .find(scope)
            .map(|raw| integer_or_string(&raw)),
        prefecture: path.prefecture,
        area: path.area,
        subarea: path.subarea,
    })
}
