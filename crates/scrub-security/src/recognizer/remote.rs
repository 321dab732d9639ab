//! NER over HTTP
//!
//! Sends `{"text": ...}` to an external recognition service and reads back
//! `{"entities": [{"text", "label", "start", "end"}]}`. Offsets are optional;
//! entities whose literal text cannot be found in the input are dropped.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{EntityLabel, EntityRecognizer, EntitySpan, RecognizerError, Result};

const PROBE_TEXT: &str = "Ada Lovelace wrote the first program.";

#[derive(Serialize)]
struct RecognizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    entities: Vec<RemoteEntity>,
}

#[derive(Debug, Deserialize)]
struct RemoteEntity {
    text: String,
    label: String,
    #[serde(default)]
    start: Option<usize>,
    #[serde(default)]
    end: Option<usize>,
}

/// Recognizer backed by a remote NER endpoint
pub struct RemoteRecognizer {
    client: Client,
    endpoint: Url,
}

impl RemoteRecognizer {
    /// Build a client for `endpoint` without contacting it
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            RecognizerError::Unavailable(format!("invalid endpoint {}: {}", endpoint, e))
        })?;

        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(RecognizerError::Unavailable(format!(
                "endpoint must be http:// or https://: {}",
                endpoint
            )));
        }

        let client = Client::builder()
            .user_agent("scrub/0.2 (forum redaction)")
            .timeout(timeout)
            .build()
            .map_err(|e| {
                RecognizerError::Unavailable(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, endpoint })
    }

    /// Build a client and make sure the endpoint answers
    pub fn connect(endpoint: &str, timeout: Duration) -> Result<Self> {
        let recognizer = Self::new(endpoint, timeout)?;

        recognizer.recognize(PROBE_TEXT).map_err(|e| {
            RecognizerError::Unavailable(format!("{} did not answer: {}", recognizer.endpoint, e))
        })?;

        info!("Connected to remote entity recognizer at {}", recognizer.endpoint);
        Ok(recognizer)
    }
}

impl EntityRecognizer for RemoteRecognizer {
    fn name(&self) -> &str {
        "remote"
    }

    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let response: RecognizeResponse = self
            .client
            .post(self.endpoint.clone())
            .json(&RecognizeRequest { text })
            .send()?
            .error_for_status()?
            .json()?;

        Ok(into_spans(text, response.entities))
    }
}

fn into_spans(text: &str, entities: Vec<RemoteEntity>) -> Vec<EntitySpan> {
    let mut spans = Vec::with_capacity(entities.len());

    for entity in entities {
        let located = match (entity.start, entity.end) {
            (Some(start), Some(end))
                if start < end && text.get(start..end) == Some(entity.text.as_str()) =>
            {
                Some((start, end))
            }
            // Offsets missing or counted differently (e.g. in characters)
            _ => text
                .find(&entity.text)
                .map(|start| (start, start + entity.text.len())),
        };

        match located {
            Some((start, end)) if !entity.text.is_empty() => spans.push(EntitySpan {
                label: EntityLabel::from_tag(&entity.label),
                text: entity.text,
                start,
                end,
            }),
            _ => debug!(label = %entity.label, "Dropping entity not found verbatim in text"),
        }
    }

    spans
}
