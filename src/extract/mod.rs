// File: ./src/extract/mod.rs
//! Turning raw announcements into structured event records.
//!
//! The generative service itself lives behind [`ModelClient`]; this module
//! owns the prompt, the response parsing and the field validation. Callers
//! that want a retry or timeout policy wrap their own [`EventExtractor`].
pub mod ingest;
pub mod parser;
pub mod prompt;
pub mod sources;

use crate::model::EventRecord;
use crate::model::validate::extract_link;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use ingest::ingest;
pub use sources::{RawAnnouncement, collect_all, collect_announcements};

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Extraction service failed: {0}")]
    Service(String),

    #[error("Extraction service returned an empty response")]
    EmptyResponse,

    #[error("Image not found: {}", .0.display())]
    MissingImage(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text-and-image understanding service (allows mocking).
pub trait ModelClient {
    fn generate(&self, prompt: &str, image: Option<&Path>) -> Result<String, ExtractionError>;
}

/// Anything able to produce an event record from an announcement.
pub trait EventExtractor {
    fn extract(&self, text: &str, image: Option<&Path>) -> Result<EventRecord, ExtractionError>;
}

/// Extractor that prompts a [`ModelClient`] for six numbered fields.
pub struct PromptExtractor<C> {
    client: C,
    target_year: i32,
}

impl<C: ModelClient> PromptExtractor<C> {
    pub fn new(client: C, target_year: i32) -> Self {
        Self {
            client,
            target_year,
        }
    }

    pub fn target_year(&self) -> i32 {
        self.target_year
    }
}

impl<C: ModelClient> EventExtractor for PromptExtractor<C> {
    fn extract(&self, text: &str, image: Option<&Path>) -> Result<EventRecord, ExtractionError> {
        if let Some(path) = image
            && !path.exists()
        {
            return Err(ExtractionError::MissingImage(path.to_path_buf()));
        }

        let prompt = prompt::build_prompt(text, self.target_year);
        let response = self.client.generate(&prompt, image)?;
        if response.trim().is_empty() {
            return Err(ExtractionError::EmptyResponse);
        }

        Ok(parser::parse_response(&response, text, self.target_year))
    }
}

/// Runs `extractor` and degrades any failure to the all-default record.
/// The link found in the raw text is kept either way.
pub fn extract_or_default<E: EventExtractor + ?Sized>(
    extractor: &E,
    text: &str,
    image: Option<&Path>,
) -> EventRecord {
    match extractor.extract(text, image) {
        Ok(ev) => ev,
        Err(e) => {
            log::warn!("Error processing announcement with extraction service: {}", e);
            EventRecord::unspecified(extract_link(text))
        }
    }
}
