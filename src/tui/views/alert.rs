use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::theme::Theme;
use crate::tui::views::centered_rect;

pub fn render_alert(f: &mut Frame, message: &str) {
    let theme = Theme::default();
    let area = centered_rect(50, 5, f.area());
    let lines = vec![
        Line::styled(message, theme.alert_style()),
        Line::styled("Enter=OK", theme.muted_style()),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Notice"))
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
