use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use tracing::debug;

use crate::error::SynthesisError;

pub const ENGLISH: &str = "en";

#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Bytes, SynthesisError>;

    fn mime_type(&self) -> &'static str {
        "audio/mpeg"
    }
}

#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateTts {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Synthesizer for GoogleTranslateTts {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Bytes, SynthesisError> {
        debug!(text, language_code, "requesting speech");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", language_code),
                ("client", "tw-ob"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SynthesisError::Status(status.as_u16()));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }
        Ok(audio)
    }
}

pub async fn synthesize_with_timeout(
    synthesizer: &dyn Synthesizer,
    text: &str,
    language_code: &str,
    limit: Duration,
) -> Result<Bytes, SynthesisError> {
    tokio::time::timeout(limit, synthesizer.synthesize(text, language_code))
        .await
        .map_err(|_| SynthesisError::Timeout(limit))?
}
