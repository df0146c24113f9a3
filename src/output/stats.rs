//! Running counters for a harvest
//!
//! The adapter feeds every page outcome and failure in; the CLI prints the
//! totals at the end.

use crate::extract::PageOutcome;
use crate::model::Entity;

/// Harvest statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestStats {
    /// Pages that produced an entity list
    pub pages: u64,

    pub businesses: u64,
    pub reviews: u64,
    pub users: u64,

    /// Refetch requests issued for challenge pages
    pub refetches: u64,

    /// Review nodes dropped for missing required parts
    pub skipped_nodes: u64,

    /// Pages that failed outright (extraction error or refetch ceiling)
    pub failed_pages: u64,
}

impl HarvestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one page outcome
    pub fn record_outcome(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::Entities {
                entities,
                skipped_nodes,
            } => {
                self.pages += 1;
                self.skipped_nodes += *skipped_nodes as u64;
                entities.iter().for_each(|entity| self.record_entity(entity));
            }
            PageOutcome::RefetchRequired(_) => self.refetches += 1,
        }
    }

    pub fn record_entity(&mut self, entity: &Entity) {
        match entity {
            Entity::Business(_) => self.businesses += 1,
            Entity::Review(_) => self.reviews += 1,
            Entity::User(_) => self.users += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.failed_pages += 1;
    }

    pub fn total_entities(&self) -> u64 {
        self.businesses + self.reviews + self.users
    }

    /// Share of handled pages that yielded entities, as a percentage
    pub fn success_rate(&self) -> f64 {
        let handled = self.pages + self.failed_pages;
        if handled == 0 {
            return 0.0;
        }
        (self.pages as f64 / handled as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &HarvestStats) {
    println!("=== Harvest Statistics ===\n");

    println!("Entities:");
    println!("  Businesses: {}", stats.businesses);
    println!("  Reviews: {}", stats.reviews);
    println!("  Users: {}", stats.users);
    println!("  Total: {}", stats.total_entities());
    println!();

    println!("Pages:");
    println!("  Extracted: {}", stats.pages);
    println!("  Refetch requests: {}", stats.refetches);
    println!("  Failed: {}", stats.failed_pages);
    if stats.skipped_nodes > 0 {
        println!("  Skipped review nodes: {}", stats.skipped_nodes);
    }
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} pages extracted)",
        stats.success_rate(),
        stats.pages,
        stats.pages + stats.failed_pages
    );
}
