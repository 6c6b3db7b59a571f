//! The analyzer page as a reducer: `(state, action) -> (state, effects)`.
//!
//! Nothing in here performs I/O. Network calls, storage access and blocking
//! notifications are returned as [`Effect`]s for the controller to run.

use std::fmt;
use tracing::{debug, error, info};
use zeroize::Zeroizing;

use crate::api::models::AnalysisResult;
use crate::ui::render::{render, render_failure};
use crate::ui::state::{InputEdit, SettingsModal, UiState};

pub const EMPTY_PASSWORD_ALERT: &str = "Please enter a password to analyze";
pub const EMPTY_API_KEY_ALERT: &str = "Please enter a valid API key";
pub const API_KEY_SAVED_ALERT: &str = "API key saved successfully!";
pub const API_KEY_SAVE_FAILED_ALERT: &str = "Could not save the API key. Please try again.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The page finished loading.
    Loaded,
    BootstrapSucceeded { message: String },
    BootstrapFailed { error: String },
    ToggleVisibility,
    PasswordInput(InputEdit),
    /// Key released while the password field has focus.
    PasswordKeyUp(Key),
    AnalyzeClicked,
    AnalysisSucceeded { request_id: u64, result: AnalysisResult },
    AnalysisFailed { request_id: u64, error: String },
    OpenSettings,
    StoredApiKeyLoaded(Option<String>),
    ApiKeyInput(InputEdit),
    CloseSettings,
    /// Click whose target is the modal backdrop, outside the dialog.
    ClickOutsideSettings,
    SaveApiKey,
    ApiKeyStored,
    ApiKeyStoreFailed { error: String },
}

#[derive(Clone, PartialEq)]
pub enum Effect {
    Bootstrap,
    /// Read the stored API key, then POST the password to the analyzer.
    Analyze {
        request_id: u64,
        password: Zeroizing<String>,
    },
    LoadStoredApiKey,
    StoreApiKey(Zeroizing<String>),
    /// Blocking notification.
    Alert(String),
    ScrollResultsIntoView,
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Bootstrap => f.write_str("Bootstrap"),
            Effect::Analyze { request_id, .. } => f
                .debug_struct("Analyze")
                .field("request_id", request_id)
                .field("password", &"<REDACTED>")
                .finish(),
            Effect::LoadStoredApiKey => f.write_str("LoadStoredApiKey"),
            Effect::StoreApiKey(_) => f.write_str("StoreApiKey(<REDACTED>)"),
            Effect::Alert(msg) => f.debug_tuple("Alert").field(msg).finish(),
            Effect::ScrollResultsIntoView => f.write_str("ScrollResultsIntoView"),
        }
    }
}

pub fn dispatch(mut state: UiState, action: Action) -> (UiState, Vec<Effect>) {
    let effects = match action {
        Action::Loaded => vec![Effect::Bootstrap],
        Action::BootstrapSucceeded { message } => {
            info!("{message}");
            vec![]
        }
        Action::BootstrapFailed { error } => {
            error!("Error creating sample data: {error}");
            vec![]
        }
        Action::ToggleVisibility => {
            state.visibility = state.visibility.toggled();
            vec![]
        }
        Action::PasswordInput(edit) => {
            edit.apply(&mut state.password);
            vec![]
        }
        Action::PasswordKeyUp(Key::Enter) | Action::AnalyzeClicked => submit(&mut state),
        Action::PasswordKeyUp(Key::Other) => vec![],
        Action::AnalysisSucceeded { request_id, result } => {
            debug!(request_id, score = result.score, "rendering analysis result");
            state.results = render(&result);
            if state.auto_scroll {
                vec![Effect::ScrollResultsIntoView]
            } else {
                vec![]
            }
        }
        Action::AnalysisFailed { request_id, error } => {
            error!(request_id, "Error analyzing password: {error}");
            state.results = render_failure(&state.results);
            vec![]
        }
        Action::OpenSettings => {
            state.settings = SettingsModal::Open {
                api_key_input: Zeroizing::new(String::new()),
            };
            vec![Effect::LoadStoredApiKey]
        }
        Action::StoredApiKeyLoaded(stored) => {
            if let (SettingsModal::Open { api_key_input }, Some(key)) = (&mut state.settings, stored)
            {
                *api_key_input = Zeroizing::new(key);
            }
            vec![]
        }
        Action::ApiKeyInput(edit) => {
            if let SettingsModal::Open { api_key_input } = &mut state.settings {
                edit.apply(api_key_input);
            }
            vec![]
        }
        Action::CloseSettings | Action::ClickOutsideSettings => {
            state.settings = SettingsModal::Closed;
            vec![]
        }
        Action::SaveApiKey => match state.settings.input().map(str::trim) {
            Some("") => vec![Effect::Alert(EMPTY_API_KEY_ALERT.to_string())],
            Some(key) => vec![Effect::StoreApiKey(Zeroizing::new(key.to_string()))],
            None => vec![],
        },
        Action::ApiKeyStored => {
            state.settings = SettingsModal::Closed;
            vec![Effect::Alert(API_KEY_SAVED_ALERT.to_string())]
        }
        Action::ApiKeyStoreFailed { error } => {
            error!("Error saving API key: {error}");
            vec![Effect::Alert(API_KEY_SAVE_FAILED_ALERT.to_string())]
        }
    };
    (state, effects)
}

fn submit(state: &mut UiState) -> Vec<Effect> {
    if state.password.is_empty() {
        return vec![Effect::Alert(EMPTY_PASSWORD_ALERT.to_string())];
    }
    let request_id = state.next_request_id;
    state.next_request_id += 1;
    debug!(request_id, "submitting password for analysis");
    vec![Effect::Analyze {
        request_id,
        password: state.password.clone(),
    }]
}
