use std::fmt;
use zeroize::Zeroizing;

use crate::ui::render::ResultsArea;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }

    /// Label of the toggle control: the action it performs next.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Visibility::Masked => "Show",
            Visibility::Revealed => "Hide",
        }
    }

    pub fn display(self, value: &str) -> String {
        match self {
            Visibility::Masked => "•".repeat(value.chars().count()),
            Visibility::Revealed => value.to_string(),
        }
    }
}

/// Edit applied to a text input.
#[derive(Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Set(String),
}

// Inputs carry passwords and API keys.
impl fmt::Debug for InputEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEdit::Insert(_) => f.write_str("Insert(<REDACTED>)"),
            InputEdit::Backspace => f.write_str("Backspace"),
            InputEdit::Set(_) => f.write_str("Set(<REDACTED>)"),
        }
    }
}

impl InputEdit {
    pub fn apply(self, buf: &mut String) {
        match self {
            InputEdit::Insert(c) => buf.push(c),
            InputEdit::Backspace => {
                buf.pop();
            }
            InputEdit::Set(s) => *buf = s,
        }
    }
}

#[derive(Clone, Default, PartialEq)]
pub enum SettingsModal {
    #[default]
    Closed,
    Open { api_key_input: Zeroizing<String> },
}

impl SettingsModal {
    pub fn is_open(&self) -> bool {
        matches!(self, SettingsModal::Open { .. })
    }

    pub fn input(&self) -> Option<&str> {
        match self {
            SettingsModal::Open { api_key_input } => Some(api_key_input.as_str()),
            SettingsModal::Closed => None,
        }
    }
}

impl fmt::Debug for SettingsModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsModal::Closed => f.write_str("Closed"),
            SettingsModal::Open { .. } => f
                .debug_struct("Open")
                .field("api_key_input", &"<REDACTED>")
                .finish(),
        }
    }
}

/// Everything the analyzer page shows.
#[derive(Clone, PartialEq)]
pub struct UiState {
    pub password: Zeroizing<String>,
    pub visibility: Visibility,
    pub results: ResultsArea,
    pub settings: SettingsModal,
    /// Scroll the results into view after each successful render.
    pub auto_scroll: bool,
    pub next_request_id: u64,
}

impl UiState {
    pub fn new(auto_scroll: bool) -> Self {
        Self {
            password: Zeroizing::new(String::new()),
            visibility: Visibility::Masked,
            results: ResultsArea::default(),
            settings: SettingsModal::Closed,
            auto_scroll,
            next_request_id: 1,
        }
    }

    pub fn password_display(&self) -> String {
        self.visibility.display(&self.password)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl fmt::Debug for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiState")
            .field("password", &"<REDACTED>")
            .field("visibility", &self.visibility)
            .field("results", &self.results)
            .field("settings", &self.settings)
            .field("auto_scroll", &self.auto_scroll)
            .field("next_request_id", &self.next_request_id)
            .finish()
    }
}
