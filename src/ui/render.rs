//! Pure rendering of an [`AnalysisResult`] into the results area.

use serde::Serialize;

use crate::api::models::AnalysisResult;

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const MIN_RECOMMENDED_LENGTH: usize = 8;
pub const PASS_GLYPH: &str = "✅";
pub const FAIL_GLYPH: &str = "❌";
pub const STRENGTH_LABEL_CLASS: &str = "strength-label";
/// Color of the unfilled part of the gauge.
pub const GAUGE_TRACK_COLOR: &str = "var(--light-color)";

/// Color band of the score gauge. Each band is closed on its low end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GaugeBand {
    Red,
    Orange,
    Yellow,
    LightGreen,
    DarkGreen,
}

impl GaugeBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s < 25 => GaugeBand::Red,
            s if s < 50 => GaugeBand::Orange,
            s if s < 65 => GaugeBand::Yellow,
            s if s < 80 => GaugeBand::LightGreen,
            _ => GaugeBand::DarkGreen,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            GaugeBand::Red => "#e74c3c",
            GaugeBand::Orange => "#e67e22",
            GaugeBand::Yellow => "#f1c40f",
            GaugeBand::LightGreen => "#2ecc71",
            GaugeBand::DarkGreen => "#27ae60",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            GaugeBand::Red => (0xe7, 0x4c, 0x3c),
            GaugeBand::Orange => (0xe6, 0x7e, 0x22),
            GaugeBand::Yellow => (0xf1, 0xc4, 0x0f),
            GaugeBand::LightGreen => (0x2e, 0xcc, 0x71),
            GaugeBand::DarkGreen => (0x27, 0xae, 0x60),
        }
    }
}

pub fn gauge_angle(score: u32) -> f64 {
    f64::from(score) / 100.0 * 360.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub band: GaugeBand,
    /// Sweep of the filled arc in degrees.
    pub angle: f64,
}

impl Gauge {
    pub fn for_score(score: u32) -> Self {
        Self {
            band: GaugeBand::for_score(score),
            angle: gauge_angle(score),
        }
    }

    /// Filled fraction, clamped for scores outside 0..=100.
    pub fn ratio(&self) -> f64 {
        (self.angle / 360.0).clamp(0.0, 1.0)
    }

    /// The gauge as a CSS background.
    pub fn conic_gradient(&self) -> String {
        let a = self.angle;
        format!(
            "conic-gradient({} 0deg {a}deg, {GAUGE_TRACK_COLOR} {a}deg 360deg)",
            self.band.hex()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Check {
    Pass,
    Fail,
}

impl Check {
    pub fn glyph(self) -> &'static str {
        match self {
            Check::Pass => PASS_GLYPH,
            Check::Fail => FAIL_GLYPH,
        }
    }
}

impl From<bool> for Check {
    fn from(ok: bool) -> Self {
        if ok {
            Check::Pass
        } else {
            Check::Fail
        }
    }
}

pub fn strength_class(strength: &str) -> String {
    strength.to_lowercase().replace(' ', "-")
}

/// Optional extras the backend may attach to a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Insights {
    pub patterns: Vec<String>,
    pub weakness_reasons: Vec<String>,
    pub improved_suggestion: Option<String>,
    pub ai_explanation: Vec<String>,
    pub ai_vulnerabilities: Vec<String>,
    pub ai_suggestions: Vec<String>,
    pub ai_example: Option<String>,
}

impl Insights {
    pub fn is_empty(&self) -> bool {
        self == &Insights::default()
    }
}

/// Everything in the results area except the feedback list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub score: String,
    pub score_color: GaugeBand,
    pub strength: String,
    pub strength_classes: Vec<String>,
    pub gauge: Gauge,
    pub length: String,
    pub length_check: Check,
    pub uppercase: Check,
    pub lowercase: Check,
    pub digits: Check,
    pub special: Check,
    pub entropy: String,
    pub time_to_crack: String,
    pub insights: Insights,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsArea {
    pub visible: bool,
    pub card: Option<ScoreCard>,
    pub feedback: Vec<String>,
}

pub fn render(result: &AnalysisResult) -> ResultsArea {
    let gauge = Gauge::for_score(result.score);
    let extras = &result.extras;
    let card = ScoreCard {
        score: result.score.to_string(),
        score_color: gauge.band,
        strength: result.strength.clone(),
        strength_classes: vec![
            STRENGTH_LABEL_CLASS.to_string(),
            strength_class(&result.strength),
        ],
        gauge,
        length: result.length.to_string(),
        length_check: Check::from(result.length >= MIN_RECOMMENDED_LENGTH),
        uppercase: Check::from(result.has_uppercase),
        lowercase: Check::from(result.has_lowercase),
        digits: Check::from(result.has_digits),
        special: Check::from(result.has_special),
        entropy: result.entropy.to_string(),
        time_to_crack: result.time_to_crack.clone(),
        insights: Insights {
            patterns: extras
                .detected_patterns()
                .into_iter()
                .map(String::from)
                .collect(),
            weakness_reasons: extras.weakness_reasons.clone(),
            improved_suggestion: extras.improved_suggestion.clone(),
            ai_explanation: extras.ai_explanation.clone(),
            ai_vulnerabilities: extras.ai_vulnerabilities.clone(),
            ai_suggestions: extras.ai_suggestions.clone(),
            ai_example: extras.ai_example.clone(),
        },
    };
    ResultsArea {
        visible: true,
        card: Some(card),
        feedback: result.feedback.clone(),
    }
}

/// A failed request only replaces the feedback list.
pub fn render_failure(previous: &ResultsArea) -> ResultsArea {
    ResultsArea {
        feedback: vec![GENERIC_ERROR_MESSAGE.to_string()],
        ..previous.clone()
    }
}
