//! Core types shared by the generation client and the view layer

use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 100;

/// Tone requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    #[default]
    Natural,
    Casual,
    Professional,
    Creative,
    Academic,
    Storyteller,
}

impl WritingStyle {
    pub const ALL: [WritingStyle; 6] = [
        WritingStyle::Natural,
        WritingStyle::Casual,
        WritingStyle::Professional,
        WritingStyle::Creative,
        WritingStyle::Academic,
        WritingStyle::Storyteller,
    ];

    /// Identifier interpolated into the prompt
    pub fn as_str(self) -> &'static str {
        match self {
            WritingStyle::Natural => "natural",
            WritingStyle::Casual => "casual",
            WritingStyle::Professional => "professional",
            WritingStyle::Creative => "creative",
            WritingStyle::Academic => "academic",
            WritingStyle::Storyteller => "storyteller",
        }
    }

    /// Label shown in the style selector
    pub fn label(self) -> &'static str {
        match self {
            WritingStyle::Natural => "Naturel",
            WritingStyle::Casual => "Décontracté",
            WritingStyle::Professional => "Professionnel",
            WritingStyle::Creative => "Créatif",
            WritingStyle::Academic => "Académique",
            WritingStyle::Storyteller => "Conteur",
        }
    }
}

impl std::fmt::Display for WritingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-selected options, read once per submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeOptions {
    pub style: WritingStyle,
    /// Humanization strength in [1, 100]
    #[serde(deserialize_with = "deserialize_intensity")]
    pub intensity: u8,
    /// Free text, may be empty
    pub target_audience: String,
    pub preserve_structure: bool,
}

impl Default for HumanizeOptions {
    fn default() -> Self {
        Self {
            style: WritingStyle::Natural,
            intensity: 75,
            target_audience: "Public Général".to_string(),
            preserve_structure: true,
        }
    }
}

impl HumanizeOptions {
    pub fn with_style(mut self, style: WritingStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.set_intensity(intensity);
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = audience.into();
        self
    }

    pub fn with_structure(mut self, preserve: bool) -> Self {
        self.preserve_structure = preserve;
        self
    }

    pub fn set_intensity(&mut self, intensity: u8) {
        self.intensity = intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
    }
}

/// Out-of-range values from stored state are pulled back into [1, 100].
fn deserialize_intensity<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = u64::deserialize(deserializer)?;
    Ok(raw.clamp(MIN_INTENSITY as u64, MAX_INTENSITY as u64) as u8)
}

/// Outcome of one successful generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizedResult {
    /// Input text exactly as submitted
    pub original_text: String,
    pub humanized_text: String,
    /// Predicted human-likeness, 0 to 100
    pub human_score: f64,
    /// Ease of reading, 0 to 100
    pub readability_score: f64,
    /// Derived from `humanized_text`, never taken from the model
    pub word_count: usize,
}

impl HumanizedResult {
    pub fn new(
        original_text: impl Into<String>,
        humanized_text: impl Into<String>,
        human_score: f64,
        readability_score: f64,
    ) -> Self {
        let humanized_text = humanized_text.into();
        Self {
            original_text: original_text.into(),
            word_count: word_count(&humanized_text),
            humanized_text,
            human_score,
            readability_score,
        }
    }
}

/// Number of whitespace-delimited tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
