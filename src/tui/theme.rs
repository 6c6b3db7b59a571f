use ratatui::style::{Color, Modifier, Style};

use crate::ui::render::{Check, GaugeBand};

#[derive(Clone, Debug)]
pub struct Theme {
    pub fg: Color,
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub selection: Color,
    /// Unfilled part of the gauge.
    pub track: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            primary: Color::Blue,
            accent: Color::Red,
            muted: Color::DarkGray,
            selection: Color::Cyan,
            track: Color::Rgb(0xec, 0xf0, 0xf1),
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }
    pub fn normal_style(&self) -> Style { Style::default().fg(self.fg) }
    pub fn muted_style(&self) -> Style { Style::default().fg(self.muted) }
    pub fn selection_style(&self) -> Style { Style::default().fg(self.selection).add_modifier(Modifier::BOLD) }
    pub fn alert_style(&self) -> Style { Style::default().fg(self.accent).add_modifier(Modifier::BOLD) }

    pub fn band_color(&self, band: GaugeBand) -> Color {
        let (r, g, b) = band.rgb();
        Color::Rgb(r, g, b)
    }

    pub fn gauge_style(&self, band: GaugeBand) -> Style {
        Style::default().fg(self.band_color(band)).bg(self.track)
    }

    pub fn score_style(&self, band: GaugeBand) -> Style {
        Style::default().fg(self.band_color(band)).add_modifier(Modifier::BOLD)
    }

    /// Style for the strength label's class list, mirroring the page stylesheet.
    pub fn strength_style(&self, classes: &[String]) -> Style {
        let band = classes.iter().find_map(|c| match c.as_str() {
            "very-weak" => Some(GaugeBand::Red),
            "weak" => Some(GaugeBand::Orange),
            "moderate" => Some(GaugeBand::Yellow),
            "strong" => Some(GaugeBand::LightGreen),
            "very-strong" => Some(GaugeBand::DarkGreen),
            _ => None,
        });
        match band {
            Some(b) => self.score_style(b),
            None => self.normal_style().add_modifier(Modifier::BOLD),
        }
    }

    pub fn check_style(&self, check: Check) -> Style {
        match check {
            Check::Pass => Style::default().fg(self.band_color(GaugeBand::DarkGreen)),
            Check::Fail => Style::default().fg(self.band_color(GaugeBand::Red)),
        }
    }
}
