use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use crate::tui::app::{App, Focus};
use crate::tui::theme::Theme;
use crate::ui::render::{Insights, ScoreCard};
use crate::ui::state::UiState;

fn button<'a>(label: &'a str, focused: bool, theme: &Theme) -> Span<'a> {
    let style = if focused {
        theme.selection_style().add_modifier(Modifier::REVERSED)
    } else {
        theme.normal_style()
    };
    Span::styled(format!("[ {label} ]"), style)
}

pub fn render_analyzer(f: &mut Frame, app: &App, state: &UiState) {
    let theme = Theme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // password + controls
            Constraint::Min(1),    // results
            Constraint::Length(1), // footer
        ])
        .split(f.area());

    let title = Paragraph::new("pwgauge — Password Strength Checker").style(theme.title_style());
    f.render_widget(title, chunks[0]);

    let input_style = if app.focus == Focus::Password {
        theme.selection_style()
    } else {
        theme.normal_style()
    };
    let controls = Line::from(vec![
        Span::styled(format!("Password: {}", state.password_display()), input_style),
        Span::raw("  "),
        button(state.visibility.toggle_label(), app.focus == Focus::Toggle, &theme),
        Span::raw(" "),
        button("Analyze", app.focus == Focus::Analyze, &theme),
        Span::raw(" "),
        button("Settings", app.focus == Focus::Settings, &theme),
    ]);
    let input = Paragraph::new(controls).block(Block::default().borders(Borders::ALL));
    f.render_widget(input, chunks[1]);

    let results = &state.results;
    match (&results.card, results.visible) {
        (Some(card), true) => render_results(f, app, card, &results.feedback, chunks[2], &theme),
        _ if !results.feedback.is_empty() => {
            // A failed first request has no card to show, only feedback
            let para = feedback_paragraph(&results.feedback, None, app.results_scroll, &theme);
            f.render_widget(para, chunks[2]);
        }
        _ => {}
    }

    let footer = "Tab=focus  Enter=analyze  Ctrl-R=show/hide  F2=settings  PgUp/PgDn=scroll  Esc=quit";
    f.render_widget(Paragraph::new(footer).style(theme.muted_style()), chunks[3]);
}

fn render_results(
    f: &mut Frame,
    app: &App,
    card: &ScoreCard,
    feedback: &[String],
    area: Rect,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(cols[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Score"))
        .gauge_style(theme.gauge_style(card.gauge.band))
        .ratio(card.gauge.ratio())
        .label(Span::styled(card.score.clone(), theme.score_style(card.score_color)));
    f.render_widget(gauge, left[0]);

    let check = |label: &str, c: crate::ui::render::Check| {
        Line::from(vec![
            Span::raw(format!("{label}: ")),
            Span::styled(c.glyph(), theme.check_style(c)),
        ])
    };
    let lines = vec![
        Line::from(vec![
            Span::raw("Strength: "),
            Span::styled(card.strength.clone(), theme.strength_style(&card.strength_classes)),
        ]),
        Line::from(vec![
            Span::raw(format!("Length: {} ", card.length)),
            Span::styled(card.length_check.glyph(), theme.check_style(card.length_check)),
        ]),
        check("Uppercase", card.uppercase),
        check("Lowercase", card.lowercase),
        check("Numbers", card.digits),
        check("Special", card.special),
        Line::from(format!("Entropy: {}", card.entropy)),
        Line::from(format!("Time to crack: {}", card.time_to_crack)),
    ];
    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Checks"))
        .style(theme.normal_style());
    f.render_widget(summary, left[1]);

    let para = feedback_paragraph(feedback, Some(&card.insights), app.results_scroll, theme);
    f.render_widget(para, cols[1]);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &'a str, items: &'a [String], theme: &Theme) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(title, theme.title_style()));
    lines.extend(items.iter().map(|i| Line::raw(format!("• {i}"))));
}

fn feedback_paragraph<'a>(
    feedback: &'a [String],
    insights: Option<&'a Insights>,
    scroll: u16,
    theme: &Theme,
) -> Paragraph<'a> {
    let mut lines: Vec<Line> = feedback.iter().map(|i| Line::raw(format!("• {i}"))).collect();

    if let Some(ins) = insights.filter(|i| !i.is_empty()) {
        section(&mut lines, "Detected patterns", &ins.patterns, theme);
        section(&mut lines, "Why it is weak", &ins.weakness_reasons, theme);
        if let Some(s) = &ins.improved_suggestion {
            lines.push(Line::raw(""));
            lines.push(Line::raw(format!("Suggestion: {s}")));
        }
        section(&mut lines, "AI explanation", &ins.ai_explanation, theme);
        section(&mut lines, "AI vulnerabilities", &ins.ai_vulnerabilities, theme);
        section(&mut lines, "AI suggestions", &ins.ai_suggestions, theme);
        if let Some(e) = &ins.ai_example {
            lines.push(Line::raw(""));
            lines.push(Line::raw(format!("Example: {e}")));
        }
    }

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Feedback"))
        .style(theme.normal_style())
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
}
