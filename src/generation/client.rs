use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use reqwest::blocking::Client;
use tracing::{debug, error, info};

use super::prompt::build_prompt;
use super::schema::{self, GenerationRequest, HumanizedPayload};
use super::{GenerationError, Result};
use crate::config::AppConfig;
use crate::types::{HumanizeOptions, HumanizedResult};

const ERROR_BODY_PREVIEW: usize = 300;

/// Issues one generation call and returns the model's raw text output.
pub trait GenerationBackend: Send {
    fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Gemini `generateContent` over HTTPS.
pub struct GeminiBackend {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiBackend {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GenerationError::transport(err.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, model)
    }
}

impl GenerationBackend for GeminiBackend {
    fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GenerationError::missing_credential("no API key configured (set API_KEY)")
        })?;
        let url = self.url(&request.model);
        debug!(url = %url, prompt_chars = request.prompt.len(), "sending generateContent");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request.to_body())
            .send()
            .map_err(|err| GenerationError::transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|err| GenerationError::transport(err.to_string()))?;
        if !status.is_success() {
            return Err(GenerationError::status(format!(
                "API returned {}: {}",
                status,
                preview(&body)
            )));
        }
        schema::response_text(&body)
    }
}

fn preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW).collect()
}

/// Turns text and options into one remote call and a typed result.
pub struct Humanizer<B> {
    backend: B,
    model: String,
}

impl<B: GenerationBackend> Humanizer<B> {
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn humanize(&self, text: &str, options: &HumanizeOptions) -> Result<HumanizedResult> {
        if text.trim().is_empty() {
            return Err(GenerationError::invalid_input("input text is empty"));
        }
        let request = GenerationRequest::new(self.model.clone(), build_prompt(text, options));
        info!(
            model = %self.model,
            style = %options.style,
            intensity = options.intensity,
            preserve_structure = options.preserve_structure,
            input_chars = text.chars().count(),
            "requesting humanization"
        );
        let start = Instant::now();
        let outcome = self
            .backend
            .generate(&request)
            .and_then(|raw| HumanizedPayload::parse(&raw));
        let payload = match outcome {
            Ok(payload) => payload,
            Err(err) => {
                error!(kind = ?err.kind(), error = %err, "humanization failed");
                return Err(err);
            }
        };
        let result = HumanizedResult::new(
            text,
            payload.humanized_text,
            payload.human_score,
            payload.readability_score,
        );
        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            human_score = result.human_score,
            readability_score = result.readability_score,
            word_count = result.word_count,
            "humanization complete"
        );
        Ok(result)
    }
}

/// Scripted backend replaying canned replies and recording every request.
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    replies: VecDeque<Result<String>>,
    requests: Vec<GenerationRequest>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.state().replies.push_back(Ok(reply.into()));
        self
    }

    pub fn with_error(self, error: GenerationError) -> Self {
        self.state().replies.push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.state().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().requests.len()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GenerationBackend for MockBackend {
    fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let mut state = self.state();
        state.requests.push(request.clone());
        state
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::transport("mock backend has no reply queued")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::generation::ErrorKind;

    #[test]
    fn gemini_backend_reports_missing_credential_at_call_time() {
        let backend = GeminiBackend::new(&AppConfig::default()).unwrap();
        let err = backend
            .generate(&GenerationRequest::new("m", "p"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredential);
    }

    #[test]
    fn url_targets_model() {
        let backend = GeminiBackend::new(&AppConfig::default()).unwrap();
        assert_eq!(
            backend.url("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn humanizer_sends_model_and_prompt() {
        let backend = MockBackend::new()
            .with_reply(r#"{"humanizedText":"ok","humanScore":10,"readabilityScore":20}"#);
        let humanizer = Humanizer::new(backend.clone(), "model-x");
        humanizer
            .humanize("Texte source", &HumanizeOptions::default())
            .unwrap();
        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "model-x");
        assert!(requests[0].prompt.contains("\"Texte source\""));
    }

    #[test]
    fn preview_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(preview(&body).len(), ERROR_BODY_PREVIEW);
    }
}
