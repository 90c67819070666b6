//! Client for the external summarization inference endpoint.
//!
//! The input text is truncated to [`MAX_INPUT_CHARS`] characters before it is
//! sent — long documents are cut, never chunked and re-combined. Generation
//! parameters are fixed constants, not per-call options. The call is made
//! once with no retry; a failed or malformed response surfaces as a
//! [`SummarizeError`] for the caller to report.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Maximum number of characters forwarded to the inference endpoint.
pub const MAX_INPUT_CHARS: usize = 2000;

/// Target upper bound on generated summary length (model tokens).
const SUMMARY_MAX_LENGTH: u32 = 1000;
/// Target lower bound on generated summary length (model tokens).
const SUMMARY_MIN_LENGTH: u32 = 300;
const LENGTH_PENALTY: f64 = 2.0;
const NUM_BEAMS: u32 = 4;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("summarization request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("summarization endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("no summary text found in response")]
    EmptyResponse,
}

/// A summarization backend that compresses text to a shorter synopsis.
pub trait Summarizer: Send + Sync {
    /// Summarize the given text. Implementations own any truncation policy.
    fn summarize<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, SummarizeError>> + Send + 'a>>;
}

/// Truncate input to [`MAX_INPUT_CHARS`] characters, respecting UTF-8
/// boundaries.
pub fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the JSON request body sent to the inference endpoint.
///
/// Pure function so the truncation contract is testable without a network.
pub fn build_request_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "inputs": truncate_input(text),
        "parameters": {
            "max_length": SUMMARY_MAX_LENGTH,
            "min_length": SUMMARY_MIN_LENGTH,
            "length_penalty": LENGTH_PENALTY,
            "num_beams": NUM_BEAMS,
        },
    })
}

/// Pull the first `summary_text` out of the endpoint's response array.
pub fn parse_response(data: &serde_json::Value) -> Result<String, SummarizeError> {
    data.as_array()
        .and_then(|items| items.first())
        .and_then(|item| item["summary_text"].as_str())
        .map(str::to_string)
        .ok_or(SummarizeError::EmptyResponse)
}

/// [`Summarizer`] backed by a Hugging Face style inference endpoint.
pub struct HfSummarizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HfSummarizer {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

impl Summarizer for HfSummarizer {
    fn summarize<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, SummarizeError>> + Send + 'a>> {
        Box::pin(async move {
            let body = build_request_body(text);
            tracing::debug!(
                input_chars = text.chars().count(),
                endpoint = %self.endpoint,
                "sending summarization request"
            );

            let mut request = self.client.post(&self.endpoint).json(&body);
            if let Some(ref key) = self.api_key {
                request = request.bearer_auth(key);
            }

            let resp = request.send().await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(SummarizeError::Status(status));
            }

            let data: serde_json::Value = resp.json().await?;
            parse_response(&data)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_not_truncated() {
        let text = "a short document";
        assert_eq!(truncate_input(text), text);
    }

    #[test]
    fn input_at_threshold_not_truncated() {
        let text = "x".repeat(MAX_INPUT_CHARS);
        assert_eq!(truncate_input(&text).chars().count(), MAX_INPUT_CHARS);
        assert_eq!(truncate_input(&text), text);
    }

    #[test]
    fn long_input_truncated_to_threshold() {
        let text = "x".repeat(MAX_INPUT_CHARS * 3);
        assert_eq!(truncate_input(&text).chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // é is two bytes in UTF-8; truncation must not split a code point.
        let text = "é".repeat(MAX_INPUT_CHARS + 50);
        let truncated = truncate_input(&text);
        assert_eq!(truncated.chars().count(), MAX_INPUT_CHARS);
        assert!(text.is_char_boundary(truncated.len()));
    }

    #[test]
    fn request_body_carries_truncated_input() {
        let text = "y".repeat(MAX_INPUT_CHARS + 1);
        let body = build_request_body(&text);
        let inputs = body["inputs"].as_str().unwrap();
        assert_eq!(inputs.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn request_body_carries_fixed_parameters() {
        let body = build_request_body("some text");
        assert_eq!(body["inputs"], "some text");
        assert_eq!(body["parameters"]["max_length"], 1000);
        assert_eq!(body["parameters"]["min_length"], 300);
        assert_eq!(body["parameters"]["length_penalty"], 2.0);
        assert_eq!(body["parameters"]["num_beams"], 4);
    }

    #[test]
    fn parse_response_takes_first_summary() {
        let data = serde_json::json!([
            { "summary_text": "first" },
            { "summary_text": "second" },
        ]);
        assert_eq!(parse_response(&data).unwrap(), "first");
    }

    #[test]
    fn parse_response_empty_array_fails() {
        let data = serde_json::json!([]);
        assert!(matches!(
            parse_response(&data),
            Err(SummarizeError::EmptyResponse)
        ));
    }

    #[test]
    fn parse_response_malformed_fails() {
        let data = serde_json::json!({ "error": "model loading" });
        assert!(matches!(
            parse_response(&data),
            Err(SummarizeError::EmptyResponse)
        ));

        let data = serde_json::json!([{ "generated_text": "wrong field" }]);
        assert!(matches!(
            parse_response(&data),
            Err(SummarizeError::EmptyResponse)
        ));
    }
}
