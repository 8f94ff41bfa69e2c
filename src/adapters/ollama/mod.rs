//! Ollama-backed validation oracle
//!
//! Sends each candidate to a local model via `POST /api/generate` with
//! `format: "json"` and reads the model's JSON verdict from the response.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::CapabilityError;
use crate::core::models::OracleVerdict;
use crate::core::ports::{ValidationOracle, ValidationRequest};

/// Default Ollama endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model name
pub const DEFAULT_MODEL: &str = "llama3";

/// Reachability check bound
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    format: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Validation oracle talking to an Ollama server
#[derive(Debug, Clone)]
pub struct OllamaOracle {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaOracle {
    /// Create an oracle for `model` served at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Check that the server answers at all
    pub fn probe(&self) -> Result<(), CapabilityError> {
        let url = format!("{}/api/tags", self.base_url);
        block_on(async {
            let resp = self
                .client
                .get(&url)
                .timeout(PROBE_TIMEOUT)
                .send()
                .await
                .map_err(|e| classify(&e, PROBE_TIMEOUT))?;
            if resp.status().is_success() {
                Ok(())
            } else {
                Err(CapabilityError::Unavailable(format!("{url} returned {}", resp.status())))
            }
        })?
    }
}

impl ValidationOracle for OllamaOracle {
    fn validate(
        &self,
        request: &ValidationRequest,
        timeout: Duration,
    ) -> Result<OracleVerdict, CapabilityError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt: request.prompt(),
            stream: false,
            format: "json",
        };

        let text = block_on(async {
            let resp = self
                .client
                .post(&url)
                .json(&body)
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| classify(&e, timeout))?;
            if !resp.status().is_success() {
                return Err(CapabilityError::Transport(format!("{url} returned {}", resp.status())));
            }
            let parsed: GenerateResponse =
                resp.json().await.map_err(|e| CapabilityError::Malformed(e.to_string()))?;
            Ok(parsed.response)
        })??;

        parse_verdict(&text)
    }
}

fn block_on<F: Future>(future: F) -> Result<F::Output, CapabilityError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CapabilityError::Unavailable(format!("cannot start runtime: {e}")))?;
    Ok(runtime.block_on(future))
}

fn classify(error: &reqwest::Error, timeout: Duration) -> CapabilityError {
    if error.is_timeout() {
        CapabilityError::Timeout(timeout)
    } else {
        CapabilityError::Transport(error.to_string())
    }
}

/// Read the verdict object out of the model's text, tolerating chatter around it
fn parse_verdict(text: &str) -> Result<OracleVerdict, CapabilityError> {
    let start = text.find('{');
    let end = text.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => return Err(CapabilityError::Malformed(format!("no JSON object in {text:?}"))),
    };
    serde_json::from_str(json).map_err(|e| CapabilityError::Malformed(e.to_string()))
}
