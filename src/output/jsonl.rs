//! JSON-lines entity output

use super::traits::{EntitySink, OutputResult};
use crate::model::Entity;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One output line: the entity plus where and when it was extracted
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    extracted_at: String,
    source_url: &'a str,
    #[serde(flatten)]
    entity: &'a Entity,
}

/// Writes one JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of lines written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`
    pub fn create(path: impl AsRef<Path>) -> OutputResult<Self> {
        let file = File::create(path.as_ref())?;
        tracing::debug!("Writing entities to {}", path.as_ref().display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EntitySink for JsonLinesSink<W> {
    fn record(&mut self, source_url: &str, entity: &Entity) -> OutputResult<()> {
        let envelope = Envelope {
            extracted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source_url,
            entity,
        };

        serde_json::to_writer(&mut self.writer, &envelope)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        tracing::debug!("Flushed {} entity lines", self.written);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn user(id: &str) -> Entity {
        Entity::from(User {
            user_id: id.to_string(),
            name: "Mika".to_string(),
            review_count: None,
            profile: None,
            verified: true,
        })
    }

    #[test]
    fn test_one_line_per_entity() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.record_all("https://tabelog.com/x/", &[user("a"), user("b")])
            .unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.written(), 2);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "user");
        assert_eq!(first["user_id"], "a");
        assert_eq!(first["verified"], true);
        assert_eq!(first["source_url"], "https://tabelog.com/x/");
        assert!(first.get("review_count").is_none());
    }

    #[test]
    fn test_extracted_at_is_rfc3339() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.record("https://tabelog.com/x/", &user("a")).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let line: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        let stamp = line["extracted_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entities.jsonl");

        let mut sink = JsonLinesSink::create(&path).unwrap();
        sink.record("https://tabelog.com/x/", &user("a")).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
