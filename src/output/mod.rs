//! Output module for extracted entities
//!
//! This module handles:
//! - Writing entities to a sink (JSON lines by default)
//! - Counting what a harvest produced

mod jsonl;
pub mod stats;
mod traits;

pub use jsonl::JsonLinesSink;
pub use stats::{print_statistics, HarvestStats};
pub use traits::{EntitySink, OutputError, OutputResult};
