//! HTTP translator
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use super::Translate;
use crate::error::Error;

// a stuck translation service must not block the whole batch
const TIMEOUT: Duration = Duration::from_secs(10);

/// Word-level translator backed by a LibreTranslate-compatible endpoint.
pub struct HttpTranslator {
    client: Client,
    endpoint: Url,
    source: String,
    target: String,
}

#[derive(Debug, Deserialize)]
struct Translated {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpTranslator {
    /// Build a translator against `endpoint`, translating from `source` to
    /// `target` (ISO 639-1 codes).
    pub fn new(endpoint: &str, source: &str, target: &str) -> Result<Self, Error> {
        let client = Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
            source: source.to_string(),
            target: target.to_string(),
        })
    }
}

impl Translate for HttpTranslator {
    fn translate(&self, text: &str) -> Result<String, Error> {
        let payload = serde_json::json!({
            "q": text,
            "source": self.source,
            "target": self.target,
            "format": "text",
        });

        let response: Translated = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_endpoint() {
        assert!(HttpTranslator::new("not a url", "vi", "en").is_err());
    }

    #[test]
    fn test_response_field_name() {
        let parsed: Translated =
            serde_json::from_str(r#"{"translatedText": "the dog"}"#).unwrap();
        assert_eq!(parsed.translated_text, "the dog");
    }
}
