use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::theme::Theme;
use crate::tui::views::centered_rect;
use crate::ui::state::UiState;

/// Bounds of the settings dialog; clicks outside them close it.
pub fn settings_area(screen: Rect) -> Rect {
    centered_rect(60, 7, screen)
}

pub fn render_settings(f: &mut Frame, state: &UiState) {
    let theme = Theme::default();
    let area = settings_area(f.area());
    let value = state.settings.input().unwrap_or_default();

    let lines = vec![
        Line::from("Gemini API key (stored locally, sent with each analysis):"),
        Line::styled(format!("> {value}"), theme.selection_style()),
        Line::raw(""),
        Line::styled("Enter=save  Esc=close  click outside=close", theme.muted_style()),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Settings"))
        .style(theme.normal_style())
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
