//! Review-list page extraction
//!
//! A review-list page holds one `div.rvw-item` node per review. Every review
//! on the page belongs to the business named in the page URL. A node that
//! lacks a required part is skipped on its own; the rest of the page is kept.

use super::dom::{next_element, read_text, Lookup, TextSource};
use super::stars::{extract_star_breakdown, meal_marker};
use super::user::{extract_user, extract_user_id};
use crate::model::{Entity, Meal, Review, Situation, User};
use crate::url::{review_detail_id, review_list_business_id};
use crate::{ExtractError, ExtractResult};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static REVIEW_NODE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.rvw-item").expect("Failed to parse review node selector - this is a bug")
});
static VISIT_COUNT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".rvw-item__visit-count-num")
        .expect("Failed to parse visit count selector - this is a bug")
});
static COMMENT_PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.rvw-item__rvw-comment > p")
        .expect("Failed to parse comment selector - this is a bug")
});
static TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a.rvw-item__title-target").expect("Failed to parse title selector - this is a bug")
});
static USED_PRICE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("dd.rvw-item__usedprice-data > span")
        .expect("Failed to parse used price selector - this is a bug")
});
static SITUATION_ICON: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p.rvw-item__situation > img")
        .expect("Failed to parse situation icon selector - this is a bug")
});

/// Attribute on a review node that holds its detail URL
const DETAIL_URL_ATTR: &str = "data-detail-url";

/// Suffix of the greyed-out (unselected) situation icons
const UNSELECTED_ICON_SUFFIX: &str = "_g.gif";

/// A review node that could not be turned into an entity
#[derive(Debug)]
pub struct SkippedNode {
    /// Position of the node on the page
    pub index: usize,
    /// Which entity failed ("review" or "user")
    pub entity: &'static str,
    pub error: ExtractError,
}

/// One review node that was turned into a review
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub review: Review,
    /// The node's reviewer, when requested and extractable
    pub user: Option<User>,
}

/// Everything extracted from one review-list page
#[derive(Debug, Default)]
pub struct ReviewPage {
    /// Entries in document order
    pub entries: Vec<ReviewEntry>,
    pub skipped: Vec<SkippedNode>,
}

impl ReviewPage {
    pub fn reviews(&self) -> impl Iterator<Item = &Review> {
        self.entries.iter().map(|entry| &entry.review)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.entries.iter().filter_map(|entry| entry.user.as_ref())
    }

    /// Flattens the page into entities, each user right after its review
    pub fn into_entities(self) -> Vec<Entity> {
        self.entries
            .into_iter()
            .flat_map(|entry| {
                std::iter::once(Entity::from(entry.review)).chain(entry.user.map(Entity::from))
            })
            .collect()
    }
}

/// Parses a review-list page
///
/// # Arguments
///
/// * `document` - The parsed page, already past the validity guard
/// * `url` - Final URL of the response; the business id comes from its path
/// * `with_users` - Also build a `User` for every node that links a reviewer
///
/// # Errors
///
/// Only a URL without a business id fails the whole page. Node-level
/// failures are reported in `ReviewPage::skipped`.
pub fn extract_reviews(document: &Html, url: &str, with_users: bool) -> ExtractResult<ReviewPage> {
    let business_id = review_list_business_id(url)?;
    let mut page = ReviewPage::default();

    for (index, node) in document.select(&REVIEW_NODE).enumerate() {
        let user_id = extract_user_id(node);

        let review = match extract_review(node, business_id, user_id.clone()) {
            Ok(review) => review,
            Err(error) => {
                tracing::warn!("Skipping review node {} on {}: {}", index, url, error);
                page.skipped.push(SkippedNode {
                    index,
                    entity: "review",
                    error,
                });
                continue;
            }
        };

        let user = match (with_users, user_id) {
            (true, Some(user_id)) => match extract_user(node, user_id) {
                Ok(user) => Some(user),
                Err(error) => {
                    tracing::warn!("Skipping reviewer of node {} on {}: {}", index, url, error);
                    page.skipped.push(SkippedNode {
                        index,
                        entity: "user",
                        error,
                    });
                    None
                }
            },
            _ => None,
        };

        page.entries.push(ReviewEntry { review, user });
    }

    Ok(page)
}

/// Builds one review from its node
///
/// # Errors
///
/// * `ExtractError::MissingField` - No detail URL or no comment block
/// * `ExtractError::Url` - The detail URL has no review id
/// * `ExtractError::IncompleteStarBreakdown` - A meal rating lacks sub-scores
pub fn extract_review(
    node: ElementRef<'_>,
    business_id: u64,
    user_id: Option<String>,
) -> ExtractResult<Review> {
    let detail_url = node
        .value()
        .attr(DETAIL_URL_ATTR)
        .ok_or(ExtractError::MissingField { field: "review_id" })?;
    let review_id = review_detail_id(detail_url)?;

    let text = extract_comment(node)?;

    Ok(Review {
        review_id,
        business_id,
        user_id,
        visit: Lookup::own(&VISIT_COUNT).find(node),
        text,
        title: Lookup::content(&TITLE).find(node),
        price_dinner: extract_used_price(node, Meal::Dinner),
        price_lunch: extract_used_price(node, Meal::Lunch),
        stars_dinner: extract_star_breakdown(node, Meal::Dinner)?,
        stars_lunch: extract_star_breakdown(node, Meal::Lunch)?,
    })
}

/// Comment text as fragments, in order
///
/// Each paragraph yields its full text content, split at `<br>` line breaks.
/// Text inside inline markup stays part of its sentence.
fn extract_comment(node: ElementRef<'_>) -> ExtractResult<Vec<String>> {
    let mut paragraphs = node.select(&COMMENT_PARAGRAPH).peekable();
    if paragraphs.peek().is_none() {
        return Err(ExtractError::MissingField { field: "text" });
    }

    Ok(paragraphs.flat_map(line_fragments).collect())
}

/// Descendant text of an element, one string per `<br>`-separated line
fn line_fragments(element: ElementRef<'_>) -> Vec<String> {
    let mut lines = vec![String::new()];

    for descendant in element.descendants() {
        let value = descendant.value();
        if let Some(text) = value.as_text() {
            if let Some(line) = lines.last_mut() {
                line.push_str(text);
            }
        } else if value.as_element().is_some_and(|e| e.name() == "br") {
            lines.push(String::new());
        }
    }

    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The amount spent on a meal: the element right after the meal marker
fn extract_used_price(node: ElementRef<'_>, meal: Meal) -> Option<String> {
    node.select(&USED_PRICE)
        .find(|span| meal_marker(meal).matches(span))
        .and_then(next_element)
        .and_then(|price| read_text(price, TextSource::Content))
}

/// Situations the reviewer ticked
///
/// Icons are positional (see `Situation::ALL`); a greyed icon means the
/// situation was not selected.
pub fn extract_situations(node: ElementRef<'_>) -> Vec<Situation> {
    node.select(&SITUATION_ICON)
        .zip(Situation::ALL)
        .filter(|(icon, _)| {
            icon.value()
                .attr("src")
                .is_some_and(|src| !src.ends_with(UNSELECTED_ICON_SUFFIX))
        })
        .map(|(_, situation)| situation)
        .collect()
}
