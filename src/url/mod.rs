//! URL handling module for Tabelog-Harvest
//!
//! This module provides the link classifier that turns discovered links into
//! crawl actions, and the parsers for identifiers embedded in URL paths.

mod matcher;
mod shape;

use std::fmt;

// Re-export main types
pub use matcher::{Classification, LinkClassifier, LinkRule, RuleMatch};
pub use shape::{profile_user_id, review_detail_id, review_list_business_id, BusinessPath};

/// Extractor a fetched page is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Business detail page -> `Business`
    Business,
    /// Paginated review list -> `Review` (and optionally `User`)
    Reviews,
}

impl Handler {
    /// Name the crawl engine registers the handler under
    pub fn name(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the crawl engine should do with a discovered link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkAction {
    /// Drop the link
    Ignore,
    /// Fetch it and classify the links found on it
    Follow,
    /// Fetch it and hand the page to an extractor
    Dispatch(Handler),
    /// Both of the above
    FollowAndDispatch(Handler),
}

impl LinkAction {
    /// Combines a rule's follow flag and optional handler
    pub fn from_parts(follow: bool, handler: Option<Handler>) -> Self {
        match (follow, handler) {
            (false, None) => Self::Ignore,
            (true, None) => Self::Follow,
            (false, Some(h)) => Self::Dispatch(h),
            (true, Some(h)) => Self::FollowAndDispatch(h),
        }
    }

    /// Returns true if links on the fetched page should be classified too
    pub fn follows(&self) -> bool {
        matches!(self, Self::Follow | Self::FollowAndDispatch(_))
    }

    /// Returns the extractor the fetched page goes to, if any
    pub fn handler(&self) -> Option<Handler> {
        match self {
            Self::Dispatch(h) | Self::FollowAndDispatch(h) => Some(*h),
            Self::Ignore | Self::Follow => None,
        }
    }

    /// Returns true if the link needs fetching at all
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

impl fmt::Display for LinkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("ignore"),
            Self::Follow => f.write_str("follow"),
            Self::Dispatch(h) => write!(f, "dispatch:{}", h),
            Self::FollowAndDispatch(h) => write!(f, "follow+dispatch:{}", h),
        }
    }
}
