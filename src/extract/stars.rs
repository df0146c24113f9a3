//! Per-meal star breakdown of a review node

use super::coerce::numeric_or_string;
use super::dom::{exists, Lookup};
use crate::model::{Criterion, Meal, Numeric, StarBreakdown};
use crate::{ExtractError, ExtractResult};
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static RATING_BLOCK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("li.rvw-item__ratings-item")
        .expect("Failed to parse rating block selector - this is a bug")
});
static DINNER_MARK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.c-rating__time--dinner")
        .expect("Failed to parse dinner mark selector - this is a bug")
});
static LUNCH_MARK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span.c-rating__time--lunch")
        .expect("Failed to parse lunch mark selector - this is a bug")
});
static TOTAL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("b.c-rating__val").expect("Failed to parse rating total selector - this is a bug")
});
static SUB_SCORE_ITEM: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("ul.rvw-item__ratings-dtlscore > li")
        .expect("Failed to parse sub-score item selector - this is a bug")
});
static SUB_SCORE_VALUE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("strong.rvw-item__ratings-dtlscore-score")
        .expect("Failed to parse sub-score value selector - this is a bug")
});

/// Selector for the marker that tags a price or rating with its meal
pub(crate) fn meal_marker(meal: Meal) -> &'static Selector {
    match meal {
        Meal::Dinner => &DINNER_MARK,
        Meal::Lunch => &LUNCH_MARK,
    }
}

/// Reads the star breakdown a review gives for one meal
///
/// Returns `Ok(None)` when no rating block on the node is marked for the meal.
/// When several blocks carry the meal's marker, the last one in document
/// order is read.
/// The sub-score list is positional: the n-th entry is the n-th
/// `Criterion::ALL` value, so fewer than five entries is an error rather than
/// a partially filled breakdown.
///
/// # Errors
///
/// * `ExtractError::MissingField` - A marked block has no total or an empty sub-score
/// * `ExtractError::IncompleteStarBreakdown` - Fewer than five sub-scores
pub fn extract_star_breakdown(
    node: ElementRef<'_>,
    meal: Meal,
) -> ExtractResult<Option<StarBreakdown>> {
    let Some(block) = node
        .select(&RATING_BLOCK)
        .filter(|block| exists(*block, meal_marker(meal)))
        .last()
    else {
        return Ok(None);
    };

    let total = Lookup::own(&TOTAL)
        .find(block)
        .map(|raw| numeric_or_string(&raw))
        .ok_or(ExtractError::MissingField { field: "stars.total" })?;

    let scores = block
        .select(&SUB_SCORE_ITEM)
        .map(|item| {
            Lookup::own(&SUB_SCORE_VALUE)
                .find(item)
                .map(|raw| numeric_or_string(&raw))
                .ok_or(ExtractError::MissingField { field: "stars.sub_score" })
        })
        .collect::<ExtractResult<Vec<Numeric>>>()?;

    let found = scores.len();
    let scores: [Numeric; 5] = scores
        .into_iter()
        .take(Criterion::ALL.len())
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| ExtractError::IncompleteStarBreakdown { meal, found })?;

    Ok(Some(StarBreakdown::new(total, scores)))
}
