//! Adapter between the crawl engine and the extraction core
//!
//! The engine owns fetching, scheduling and deduplication. This module holds
//! what the core needs across calls: the compiled classifier and the refetch
//! ceiling for challenge pages.

mod harvester;
mod retry;

pub use harvester::Harvester;
pub use retry::{Charge, RefetchBudget};
