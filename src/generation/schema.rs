//! Wire format of the `generateContent` call and strict validation of its reply

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{GenerationError, Result};

pub const TEMPERATURE: f32 = 0.9;
pub const TOP_P: f32 = 0.95;
pub const RESPONSE_MIME_TYPE: &str = "application/json";
pub const SCORE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Transport-independent description of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }

    pub fn to_body(&self) -> GenerateContentBody {
        GenerateContentBody {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: self.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                top_p: self.top_p,
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentBody {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Object with three required fields the model must fill.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "humanizedText": { "type": "STRING" },
            "humanScore": {
                "type": "NUMBER",
                "description": "Score de ressemblance humaine prédit de 0 à 100"
            },
            "readabilityScore": {
                "type": "NUMBER",
                "description": "Score de facilité de lecture de 0 à 100"
            }
        },
        "required": ["humanizedText", "humanScore", "readabilityScore"]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Extracts the model text from a `generateContent` envelope.
pub fn response_text(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|err| GenerationError::malformed(format!("invalid response envelope: {}", err)))?;
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::malformed("response contains no candidates"))?;
    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();
    if text.is_empty() {
        return Err(GenerationError::malformed("candidate carries no text"));
    }
    Ok(text)
}

/// Structured payload the model returns inside its text part.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizedPayload {
    pub humanized_text: String,
    pub human_score: f64,
    pub readability_score: f64,
}

impl HumanizedPayload {
    pub fn parse(raw: &str) -> Result<Self> {
        let payload: HumanizedPayload = serde_json::from_str(raw.trim())
            .map_err(|err| GenerationError::malformed(format!("invalid payload: {}", err)))?;
        payload.validate()?;
        Ok(payload)
    }

    fn validate(&self) -> Result<()> {
        check_score("humanScore", self.human_score)?;
        check_score("readabilityScore", self.readability_score)
    }
}

fn check_score(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && SCORE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::malformed(format!(
            "{} out of range: {}",
            field, value
        )))
    }
}
