use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    #[serde(with = "crate::api::secret::secret_string")]
    pub password: SecretString,
    #[serde(with = "crate::api::secret::secret_string_option")]
    pub api_key: Option<SecretString>,
    /// Minimum acceptable crack time in seconds; the backend adds a feedback
    /// line when its estimate falls below it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time_to_crack: Option<f64>,
}

impl AnalysisRequest {
    pub fn new(password: &str, api_key: Option<String>, max_time_to_crack: Option<f64>) -> Self {
        Self {
            password: SecretString::new(password.into()),
            api_key: api_key.map(|k| SecretString::new(k.into())),
            max_time_to_crack,
        }
    }
}

/// Report returned by the analysis endpoint. The required fields drive the
/// score card; everything in [`AnalysisExtras`] is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32,
    pub strength: String,
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub entropy: Entropy,
    pub time_to_crack: String,
    pub feedback: Vec<String>,
    #[serde(flatten)]
    pub extras: AnalysisExtras,
}

/// Entropy is displayed verbatim, whether the backend sends a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entropy {
    Number(f64),
    Text(String),
}

impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entropy::Number(n) => write!(f, "{n}"),
            Entropy::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisExtras {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_common: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_repeated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_sequential: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_keyboard_pattern: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_date_pattern: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_common_words: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weakness_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improved_suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_crack_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_explanation: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_vulnerabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_example: Option<String>,
}

impl AnalysisExtras {
    /// Human readable names of the weak patterns the backend flagged.
    pub fn detected_patterns(&self) -> Vec<&'static str> {
        [
            (self.is_common, "Commonly used password"),
            (self.has_repeated, "Repeated characters"),
            (self.has_sequential, "Sequential pattern"),
            (self.has_keyboard_pattern, "Keyboard pattern"),
            (self.has_date_pattern, "Date pattern"),
            (self.has_common_words, "Common words"),
        ]
        .into_iter()
        .filter_map(|(flag, name)| (flag == Some(true)).then_some(name))
        .collect()
    }
}

/// Response of `GET /create-sample-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapResponse {
    pub message: String,
    #[serde(default)]
    pub success: Option<bool>,
}
