use crate::api::client::HttpBackend;
use crate::cli::cli::{Cli, Commands, ConfigCommand, KeyCommand};
use crate::config::config::{config_file_path, Config};
use crate::core::ports::{AnalysisBackend, CredentialStore, API_KEY_STORAGE_KEY};
use crate::filesystem::store::FileCredentialStore;
use crate::logging::{setup_logger, LogTarget};
use crate::tui;
use crate::ui::controller::{Controller, Notice};
use crate::ui::dispatch::Action;
use crate::ui::render::ResultsArea;
use crate::ui::state::InputEdit;
use anyhow::Context;
use clap::Parser;
use inquire::Password;
use std::sync::Arc;

pub mod cli;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::create(cli.server)?;

    match cli.command {
        Commands::Tui => {
            setup_logger(LogTarget::File(config.log_path.clone()))?;
            tui::launch(&config).await?;
        }
        Commands::Analyze { password, json } => {
            setup_logger(LogTarget::Stderr)?;
            handle_analyze(&config, password, json).await?;
        }
        Commands::Bootstrap => {
            setup_logger(LogTarget::Stderr)?;
            let backend = HttpBackend::new(config.server_url.clone());
            let res = backend
                .bootstrap()
                .await
                .context("Error creating sample data")?;
            println!("{}", res.message);
        }
        Commands::Key(cmd) => {
            setup_logger(LogTarget::Stderr)?;
            handle_key_commands(&config, cmd)?;
        }
        Commands::Config(cmd) => handle_config_commands(&config, cmd),
    }

    Ok(())
}

fn build_controller(config: &Config) -> Controller {
    let store: Arc<dyn CredentialStore> =
        Arc::new(FileCredentialStore::new(config.storage_path.clone()));
    let backend: Arc<dyn AnalysisBackend> =
        Arc::new(HttpBackend::new(config.server_url.clone()));
    Controller::new(backend, store, config.controller_options())
}

fn first_alert(notices: Vec<Notice>) -> Option<String> {
    notices.into_iter().find_map(|n| match n {
        Notice::Alert(msg) => Some(msg),
        Notice::ScrollResultsIntoView => None,
    })
}

async fn handle_analyze(config: &Config, password: Option<String>, json: bool) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new("Password")
            .without_confirmation()
            .prompt()?,
    };

    let mut controller = build_controller(config);
    controller.dispatch(Action::PasswordInput(InputEdit::Set(password)));
    controller.dispatch(Action::AnalyzeClicked);
    if let Some(msg) = first_alert(controller.take_notices()) {
        anyhow::bail!(msg);
    }
    controller.settle_all().await;

    let results = &controller.state().results;
    if results.card.is_none() {
        anyhow::bail!(results.feedback.join("\n"));
    }
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        for line in report_lines(results) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Plain-text rendition of the results area.
pub fn report_lines(results: &ResultsArea) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(card) = &results.card {
        let filled = (card.gauge.ratio() * 20.0).round() as usize;
        out.push(format!("Score: {}/100 ({})", card.score, card.strength));
        out.push(format!(
            "Gauge: [{}{}] {}",
            "#".repeat(filled),
            ".".repeat(20 - filled),
            card.gauge.band.hex()
        ));
        out.push(format!("Length: {} {}", card.length, card.length_check.glyph()));
        out.push(format!("Uppercase: {}", card.uppercase.glyph()));
        out.push(format!("Lowercase: {}", card.lowercase.glyph()));
        out.push(format!("Numbers: {}", card.digits.glyph()));
        out.push(format!("Special: {}", card.special.glyph()));
        out.push(format!("Entropy: {}", card.entropy));
        out.push(format!("Time to crack: {}", card.time_to_crack));
        if let Some(s) = &card.insights.improved_suggestion {
            out.push(format!("Suggestion: {s}"));
        }
    }
    if !results.feedback.is_empty() {
        out.push("Feedback:".to_string());
        out.extend(results.feedback.iter().map(|f| format!("  • {f}")));
    }
    out
}

fn mask_key(key: &str) -> String {
    let n = key.chars().count();
    if n <= 4 {
        return "*".repeat(n);
    }
    let head: String = key.chars().take(4).collect();
    format!("{head}{}", "*".repeat(n - 4))
}

fn handle_key_commands(config: &Config, cmd: KeyCommand) -> anyhow::Result<()> {
    match cmd {
        KeyCommand::Set { key } => {
            let key = match key {
                Some(k) => k,
                None => Password::new("API key").without_confirmation().prompt()?,
            };
            let mut controller = build_controller(config);
            controller.dispatch(Action::OpenSettings);
            controller.dispatch(Action::ApiKeyInput(InputEdit::Set(key)));
            controller.dispatch(Action::SaveApiKey);
            let alert = first_alert(controller.take_notices()).unwrap_or_default();
            if controller.state().settings.is_open() {
                anyhow::bail!(alert);
            }
            println!("{alert}");
        }
        KeyCommand::Show { reveal } => {
            let store = FileCredentialStore::new(config.storage_path.clone());
            match store.get(API_KEY_STORAGE_KEY)? {
                Some(k) if reveal => println!("{k}"),
                Some(k) => println!("{}", mask_key(&k)),
                None => println!("No API key stored."),
            }
        }
    }
    Ok(())
}

fn handle_config_commands(config: &Config, cmd: ConfigCommand) {
    match cmd {
        ConfigCommand::Path => println!("{}", config_file_path().display()),
        ConfigCommand::Show => {
            println!("config file: {}", config_file_path().display());
            println!("server_url: {}", config.server_url);
            println!("storage_path: {}", config.storage_path.display());
            println!("log_path: {}", config.log_path.display());
            match config.max_time_to_crack {
                Some(s) => println!("max_time_to_crack: {s}"),
                None => println!("max_time_to_crack: (none)"),
            }
            println!("auto_scroll: {}", config.auto_scroll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{AnalysisExtras, AnalysisResult, Entropy};
    use crate::ui::render::render;

    #[test]
    fn mask_keeps_four_leading_chars() {
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key("abc123"), "abc1**");
    }

    #[test]
    fn report_lists_card_then_feedback() {
        let area = render(&AnalysisResult {
            score: 50,
            strength: "Moderate".into(),
            length: 9,
            has_uppercase: false,
            has_lowercase: true,
            has_digits: true,
            has_special: false,
            entropy: Entropy::Number(30.5),
            time_to_crack: "2 days".into(),
            feedback: vec!["Add uppercase letters (A-Z)".into()],
            extras: AnalysisExtras::default(),
        });
        let lines = report_lines(&area);
        assert_eq!(lines[0], "Score: 50/100 (Moderate)");
        assert_eq!(lines[1], "Gauge: [##########..........] #f1c40f");
        assert_eq!(lines[2], "Length: 9 ✅");
        assert_eq!(lines[3], "Uppercase: ❌");
        assert_eq!(lines.last().unwrap(), "  • Add uppercase letters (A-Z)");
    }

    #[test]
    fn failure_report_is_feedback_only() {
        let area = crate::ui::render::render_failure(&ResultsArea::default());
        assert_eq!(
            report_lines(&area),
            vec!["Feedback:", "  • An unexpected error occurred. Please try again."]
        );
    }
}
