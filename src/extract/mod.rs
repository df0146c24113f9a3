//! Page handlers
//!
//! A page handler takes one fetched response the classifier dispatched and
//! returns either the entities found on it or a request to fetch the same URL
//! again. Pages that fail the validity guard are never parsed further.

pub mod business;
mod coerce;
pub mod dom;
pub mod guard;
pub mod menu;
pub mod review;
pub mod stars;
pub mod user;

pub use business::extract_business;
pub use coerce::{integer_or_string, numeric_or_string};
pub use guard::is_genuine_page;
pub use menu::extract_menu_items;
pub use review::{
    extract_review, extract_reviews, extract_situations, ReviewEntry, ReviewPage, SkippedNode,
};
pub use stars::extract_star_breakdown;
pub use user::{extract_user, extract_user_id};

use crate::config::ExtractConfig;
use crate::model::Entity;
use crate::url::Handler;
use crate::ExtractResult;
use scraper::Html;

/// A response body as handed over by the crawl engine
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL of the response, after redirects
    pub url: String,
    pub body: String,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Instruction to fetch a URL again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefetchRequest {
    pub url: String,
    /// The engine must skip its visited-URL filter for this request
    pub bypass_dedup: bool,
}

/// What a page handler produced
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// Fully built entities, in document order
    Entities {
        entities: Vec<Entity>,
        /// Review nodes dropped because a required part was missing
        skipped_nodes: usize,
    },
    /// The page was a challenge or redirect page; nothing was extracted
    RefetchRequired(RefetchRequest),
}

impl PageOutcome {
    /// Entities of the outcome; empty for a refetch
    pub fn entities(&self) -> &[Entity] {
        match self {
            Self::Entities { entities, .. } => entities,
            Self::RefetchRequired(_) => &[],
        }
    }

    pub fn is_refetch(&self) -> bool {
        matches!(self, Self::RefetchRequired(_))
    }
}

/// Switches for optional output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Emit a `User` after each review that links a reviewer profile
    pub emit_users: bool,
}

impl From<&ExtractConfig> for ExtractOptions {
    fn from(config: &ExtractConfig) -> Self {
        Self {
            emit_users: config.emit_users,
        }
    }
}

/// Runs the validity guard and then the handler's extractor
///
/// # Errors
///
/// Returns the extractor's error when a business page has no rating or
/// the URL does not have the handler's shape. Review-node failures are
/// counted in `skipped_nodes` instead.
pub fn handle_page(
    handler: Handler,
    page: &FetchedPage,
    options: &ExtractOptions,
) -> ExtractResult<PageOutcome> {
    let document = page.document();

    if !is_genuine_page(&document) {
        tracing::warn!("Challenge page at {}, requesting refetch", page.url);
        return Ok(PageOutcome::RefetchRequired(RefetchRequest {
            url: page.url.clone(),
            bypass_dedup: true,
        }));
    }

    match handler {
        Handler::Business => {
            let business = extract_business(&document, &page.url)?;
            Ok(PageOutcome::Entities {
                entities: vec![business.into()],
                skipped_nodes: 0,
            })
        }
        Handler::Reviews => {
            let review_page = extract_reviews(&document, &page.url, options.emit_users)?;
            let skipped_nodes = review_page.skipped.len();
            let entities = review_page.into_entities();

            tracing::debug!(
                "Extracted {} entities from {} ({} nodes skipped)",
                entities.len(),
                page.url,
                skipped_nodes
            );

            Ok(PageOutcome::Entities {
                entities,
                skipped_nodes,
            })
        }
    }
}
