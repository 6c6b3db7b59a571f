pub mod alert;
pub mod analyzer;
pub mod settings;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::Frame;

use crate::tui::app::App;
use crate::ui::state::UiState;

/// Draw the page, then the settings modal, then any pending alert on top.
pub fn draw(f: &mut Frame, app: &App, state: &UiState) {
    analyzer::render_analyzer(f, app, state);
    if state.settings.is_open() {
        settings::render_settings(f, state);
    }
    if let Some(msg) = app.current_alert() {
        alert::render_alert(f, msg);
    }
}

pub(crate) fn centered_rect(width_pct: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width_pct)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
