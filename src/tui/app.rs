use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

use crate::tui::views::settings::settings_area;
use crate::ui::controller::Notice;
use crate::ui::dispatch::{Action, Key};
use crate::ui::state::{InputEdit, UiState};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Password,
    Toggle,
    Analyze,
    Settings,
}

/// What the event loop should do with an input event.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Dispatch(Action),
    Quit,
    None,
}

/// Terminal-only state layered over the page model: focus, the blocking
/// alert queue and the results scroll offset.
pub struct App {
    pub focus: Focus,
    alerts: VecDeque<String>,
    pub results_scroll: u16,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            focus: Focus::Password,
            alerts: VecDeque::new(),
            results_scroll: 0,
        }
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn push_alert(&mut self, msg: String) {
        self.alerts.push_back(msg);
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn scroll_results_into_view(&mut self) {
        self.results_scroll = 0;
    }

    pub fn apply_notices(&mut self, notices: Vec<Notice>) {
        for notice in notices {
            match notice {
                Notice::Alert(msg) => self.push_alert(msg),
                Notice::ScrollResultsIntoView => self.scroll_results_into_view(),
            }
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Password => Focus::Toggle,
            Focus::Toggle => Focus::Analyze,
            Focus::Analyze => Focus::Settings,
            Focus::Settings => Focus::Password,
        };
    }

    pub fn prev_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Password => Focus::Settings,
            Focus::Toggle => Focus::Password,
            Focus::Analyze => Focus::Toggle,
            Focus::Settings => Focus::Analyze,
        };
    }

    pub fn on_key(&mut self, state: &UiState, k: KeyEvent) -> Command {
        let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && k.code == KeyCode::Char('c') {
            return Command::Quit;
        }

        // Alerts block everything until acknowledged
        if self.current_alert().is_some() {
            if matches!(k.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return Command::None;
        }

        if state.settings.is_open() {
            return match k.code {
                KeyCode::Esc => Command::Dispatch(Action::CloseSettings),
                KeyCode::Enter => Command::Dispatch(Action::SaveApiKey),
                KeyCode::Backspace => Command::Dispatch(Action::ApiKeyInput(InputEdit::Backspace)),
                KeyCode::Char(c) if !ctrl && !c.is_control() => {
                    Command::Dispatch(Action::ApiKeyInput(InputEdit::Insert(c)))
                }
                _ => Command::None,
            };
        }

        match k.code {
            KeyCode::Tab => {
                self.next_focus();
                return Command::None;
            }
            KeyCode::BackTab => {
                self.prev_focus();
                return Command::None;
            }
            KeyCode::F(2) => return Command::Dispatch(Action::OpenSettings),
            KeyCode::PageDown => {
                self.results_scroll = self.results_scroll.saturating_add(5);
                return Command::None;
            }
            KeyCode::PageUp => {
                self.results_scroll = self.results_scroll.saturating_sub(5);
                return Command::None;
            }
            KeyCode::Char('r') if ctrl => return Command::Dispatch(Action::ToggleVisibility),
            KeyCode::Esc => return Command::Quit,
            _ => {}
        }

        match self.focus {
            Focus::Password => match k.code {
                KeyCode::Enter => Command::Dispatch(Action::PasswordKeyUp(Key::Enter)),
                KeyCode::Backspace => Command::Dispatch(Action::PasswordInput(InputEdit::Backspace)),
                KeyCode::Char(c) if !ctrl && !c.is_control() => {
                    Command::Dispatch(Action::PasswordInput(InputEdit::Insert(c)))
                }
                _ => Command::None,
            },
            focus => match k.code {
                KeyCode::Enter | KeyCode::Char(' ') => Command::Dispatch(match focus {
                    Focus::Toggle => Action::ToggleVisibility,
                    Focus::Analyze => Action::AnalyzeClicked,
                    _ => Action::OpenSettings,
                }),
                KeyCode::Char('q') => Command::Quit,
                _ => Command::None,
            },
        }
    }

    /// Left click at (`column`, `row`) on a screen of size `screen`.
    pub fn on_click(&self, state: &UiState, screen: Rect, column: u16, row: u16) -> Command {
        if self.current_alert().is_some() || !state.settings.is_open() {
            return Command::None;
        }
        if settings_area(screen).contains(Position::new(column, row)) {
            Command::None
        } else {
            Command::Dispatch(Action::ClickOutsideSettings)
        }
    }
}
