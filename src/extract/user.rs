//! Reviewer extraction from a review node

use super::dom::{exists, Lookup};
use crate::model::User;
use crate::url::profile_user_id;
use crate::{ExtractError, ExtractResult};
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static PROFILE_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".rvw-item__rvwr-name > a:first-child")
        .expect("Failed to parse profile link selector - this is a bug")
});
static NAME: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".rvw-item__rvwr-name > a > span")
        .expect("Failed to parse reviewer name selector - this is a bug")
});
static REVIEW_COUNT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".rvw-item__rvwr-rvwcount")
        .expect("Failed to parse reviewer count selector - this is a bug")
});
static PROFILE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".rvw-item__rvwr-profile")
        .expect("Failed to parse reviewer profile selector - this is a bug")
});
static AUTH_MARK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".mark-auth-mobile").expect("Failed to parse auth mark selector - this is a bug")
});
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Failed to compile digits regex"));

/// Reads the reviewer slug from the first link of the reviewer-name block
pub fn extract_user_id(node: ElementRef<'_>) -> Option<String> {
    node.select(&PROFILE_LINK)
        .next()?
        .value()
        .attr("href")
        .and_then(profile_user_id)
}

/// Builds the reviewer record for a review node
///
/// # Arguments
///
/// * `node` - The `div.rvw-item` element
/// * `user_id` - Slug from `extract_user_id`
///
/// # Errors
///
/// * `ExtractError::MissingField` - The node has no reviewer name
pub fn extract_user(node: ElementRef<'_>, user_id: String) -> ExtractResult<User> {
    let name = Lookup::own(&NAME)
        .find(node)
        .ok_or(ExtractError::MissingField { field: "user.name" })?;

    // "口コミ 1,204件" -> 1204
    let review_count = Lookup::content(&REVIEW_COUNT).find(node).and_then(|label| {
        let label = label.replace(',', "");
        DIGITS_RE.find(&label).and_then(|m| m.as_str().parse().ok())
    });

    Ok(User {
        user_id,
        name,
        review_count,
        profile: Lookup::content(&PROFILE).find(node),
        verified: exists(node, &AUTH_MARK),
    })
}
