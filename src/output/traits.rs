//! Output sink trait and errors

use crate::model::Entity;
use thiserror::Error;

/// Errors that can occur while writing entities
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize entity: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for extracted entities
///
/// Sinks receive entities in the order handlers produce them. They do no
/// deduplication; a reviewer seen on several pages is recorded each time.
pub trait EntitySink {
    /// Records one entity
    ///
    /// # Arguments
    ///
    /// * `source_url` - URL of the page the entity came from
    /// * `entity` - The fully built entity
    fn record(&mut self, source_url: &str, entity: &Entity) -> OutputResult<()>;

    /// Records every entity of a page, in order
    fn record_all(&mut self, source_url: &str, entities: &[Entity]) -> OutputResult<()> {
        entities
            .iter()
            .try_for_each(|entity| self.record(source_url, entity))
    }

    /// Flushes buffered output
    fn finish(&mut self) -> OutputResult<()>;
}
